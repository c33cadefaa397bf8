//! Init command implementation - scaffolds a new Seedbed project

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::InitArgs;

/// Execute the init command
pub(crate) async fn execute(args: &InitArgs) -> Result<()> {
    // Reject names that could cause path traversal or confusing directory names
    if args.name.contains('/')
        || args.name.contains('\\')
        || args.name.contains("..")
        || args.name.starts_with('.')
        || args.name.starts_with('-')
    {
        anyhow::bail!(
            "Invalid project name '{}': must not contain '/', '\\', '..', or start with '.' or '-'",
            args.name
        );
    }

    if args.database_type != "duckdb" && args.database_type != "sqlite" {
        anyhow::bail!(
            "Invalid database type '{}': expected 'duckdb' or 'sqlite'",
            args.database_type
        );
    }

    let project_dir = Path::new(&args.name);

    if project_dir.exists() {
        anyhow::bail!(
            "Directory '{}' already exists. Choose a different project name.",
            args.name
        );
    }

    println!("Creating new Seedbed project: {}\n", args.name);

    fs::create_dir_all(project_dir)
        .with_context(|| format!("Failed to create directory: {}", project_dir.display()))?;

    // Generate seedbed.yml
    // Escape YAML special characters in interpolated values
    let safe_name = args.name.replace('"', "\\\"");
    let safe_db_path = args.database_path.replace('"', "\\\"");
    let config_content = format!(
        r#"name: "{name}"
version: "1.0.0"

database:
  type: {db_type}
  path: "{db_path}"

# Fixture sets applied by `seedbed load`:
#   basic    - test_table and test_str, no UUID column
#   extended - test_table with a NOT NULL UUID column, plus test_str
fixtures: ["basic"]
"#,
        name = safe_name,
        db_type = args.database_type,
        db_path = safe_db_path,
    );

    let config_path = project_dir.join("seedbed.yml");
    fs::write(&config_path, config_content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("  created {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  cd {}", args.name);
    println!("  seedbed load");
    println!("  seedbed verify");

    Ok(())
}
