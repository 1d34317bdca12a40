pub mod legacy;
pub mod node;
pub mod value;

pub use legacy::*;
pub use node::*;
pub use value::*;

use crate::error::TreeParseError;

impl ConditionTree {
    /// Decodes an editor payload.
    pub fn from_json(json: &str) -> Result<Self, TreeParseError> {
        serde_json::from_str(json).map_err(|e| TreeParseError::Json(e.to_string()))
    }
}
