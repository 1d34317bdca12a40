use clap::{Parser, Subcommand};
use jouken::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

// --- Input Format Specific Structs ---
// A tree file holds either the editor's group/condition tree or an older flat list.

#[derive(Deserialize)]
#[serde(untagged)]
enum TreeFile {
    Tree(ConditionTree),
    Legacy(Vec<LegacyCondition>),
}

/// Compile visual filter condition trees into previews and alert SQL
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the human-readable preview of a condition tree
    Preview {
        /// Path to the condition tree JSON file
        tree_path: PathBuf,
    },
    /// Print the SQL WHERE clause of a condition tree
    Where {
        /// Path to the condition tree JSON file
        tree_path: PathBuf,
        /// Path to the stream field type map JSON file
        #[arg(short, long)]
        fields: Option<PathBuf>,
        /// Path to the query settings JSON file
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
    /// Print the alert evaluation query for an alert form and check it locally
    Query {
        /// Path to the alert form JSON file
        form_path: PathBuf,
        /// Path to the stream field type map JSON file
        #[arg(short, long)]
        fields: Option<PathBuf>,
        /// Path to the query settings JSON file
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Use the form's aggregation settings instead of a plain count
        #[arg(short, long)]
        aggregate: bool,
    },
    /// Run the local pre-validation rules on a SQL string
    Validate {
        /// The SQL query to check
        sql: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Preview { tree_path } => {
            let tree = load_tree(&tree_path);
            println!("{}", tree);
        }
        Command::Where {
            tree_path,
            fields,
            settings,
        } => {
            let tree = load_tree(&tree_path);
            let settings = load_settings(settings.as_deref());
            let field_types = load_field_types(fields.as_deref(), &settings);
            println!("{}", generate_where_clause(&tree, &field_types));
        }
        Command::Query {
            form_path,
            fields,
            settings,
            aggregate,
        } => run_query(&form_path, fields.as_deref(), settings.as_deref(), aggregate),
        Command::Validate { sql } => match validate_query(&sql) {
            Ok(()) => println!("OK"),
            Err(e) => exit_with_error(&e.to_string()),
        },
    }
}

fn run_query(form_path: &Path, fields: Option<&Path>, settings: Option<&Path>, aggregate: bool) {
    let form_json = read_file(form_path, "alert form");
    let form = AlertFormData::from_json(&form_json).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let settings = load_settings(settings);
    let field_types = load_field_types(fields, &settings);

    let missing: Vec<&str> = form
        .query_condition
        .conditions
        .columns()
        .into_iter()
        .filter(|column| field_types.get(column).is_none())
        .collect();
    if !missing.is_empty() {
        info!(?missing, "columns without a declared type will be quoted");
    }

    let sql = generate_sql_query(&form, &field_types, aggregate, &settings.timestamp_column);
    println!("{}", sql);

    if let Err(e) = validate_query(&sql) {
        exit_with_error(&format!("Generated query failed validation: {}", e));
    }
}

fn load_tree(path: &Path) -> ConditionTree {
    let json = read_file(path, "condition tree");
    let file: TreeFile = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse condition tree JSON: {}", e)));
    match file {
        TreeFile::Tree(tree) => tree,
        TreeFile::Legacy(conditions) => conditions
            .into_condition_tree()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert legacy conditions: {}", e))),
    }
}

fn load_settings(path: Option<&Path>) -> QuerySettings {
    match path {
        Some(path) => QuerySettings::from_json_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string())),
        None => QuerySettings::default(),
    }
}

fn load_field_types(path: Option<&Path>, settings: &QuerySettings) -> FieldTypeMap {
    let field_types = match path {
        Some(path) => {
            let json = read_file(path, "field type map");
            FieldTypeMap::from_json(&json).unwrap_or_else(|e| exit_with_error(&e.to_string()))
        }
        None => FieldTypeMap::new(),
    };
    settings.apply_to(field_types)
}

fn read_file(path: &Path, what: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read {} file '{}': {}",
            what,
            path.display(),
            e
        ))
    })
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
