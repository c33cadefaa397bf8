//! List command implementation

use anyhow::{Context, Result};
use sb_core::catalog;
use serde_json::json;

use crate::cli::{GlobalArgs, LsArgs, LsOutput};

/// Execute the ls command
pub async fn execute(args: &LsArgs, _global: &GlobalArgs) -> Result<()> {
    let sets = catalog::builtin_sets();

    match args.output {
        LsOutput::Text => {
            for set in &sets {
                println!(
                    "{} ({} tables, {} rows) - {}",
                    set.name,
                    set.tables.len(),
                    set.row_count(),
                    set.description
                );
                for table in &set.tables {
                    println!(
                        "  {}: {} columns, {} rows",
                        table.name,
                        table.columns.len(),
                        table.rows.len()
                    );
                }
            }
        }
        LsOutput::Json => {
            let listing: Vec<_> = sets
                .iter()
                .map(|set| {
                    json!({
                        "name": set.name,
                        "description": set.description,
                        "tables": set.tables.iter().map(|t| {
                            json!({
                                "name": t.name,
                                "columns": t.columns.len(),
                                "rows": t.rows.len(),
                            })
                        }).collect::<Vec<_>>(),
                    })
                })
                .collect();

            let output =
                serde_json::to_string_pretty(&listing).context("Failed to serialize listing")?;
            println!("{}", output);
        }
    }

    Ok(())
}
