//! Load command implementation

use anyhow::{Context, Result};
use sb_loader::{LoadOptions, Loader};

use crate::cli::{GlobalArgs, LoadArgs};
use crate::context::RuntimeContext;

/// Execute the load command
pub async fn execute(args: &LoadArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let sets = ctx.resolve_sets(&args.sets)?;

    if sets.is_empty() {
        println!("No fixture sets selected.");
        return Ok(());
    }

    println!(
        "Loading {} fixture set(s) into {} ({})...\n",
        sets.len(),
        ctx.config.database.db_type,
        ctx.config.database.path
    );

    let loader = Loader::new(ctx.db.as_ref());
    let options = LoadOptions {
        refresh: args.refresh,
    };

    let mut reports = Vec::new();
    let mut failure_count = 0;
    let mut total_rows: usize = 0;

    for set in &sets {
        ctx.verbose(&format!("Applying fixture set: {}", set.name));

        match loader.load_with(set, options).await {
            Ok(report) => {
                for table in &report.tables {
                    println!("  ✓ {} ({} rows)", table.table, table.rows_inserted);
                }
                total_rows += report.total_rows();
                reports.push(report);
            }
            Err(e) => {
                failure_count += 1;
                println!("  ✗ {} - {}", set.name, e);
            }
        }
    }

    println!();
    println!(
        "Loaded {} fixture set(s) ({} total rows)",
        reports.len(),
        total_rows
    );

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&reports).context("Failed to serialize report")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write report: {}", path))?;
        ctx.verbose(&format!("Wrote load report to {}", path));
    }

    if failure_count > 0 {
        // Exit code 4 = database error during fixture loading
        std::process::exit(4);
    }

    Ok(())
}
