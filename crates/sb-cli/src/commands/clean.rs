//! Clean command implementation

use anyhow::Result;
use sb_loader::Loader;

use crate::cli::{CleanArgs, GlobalArgs};
use crate::context::RuntimeContext;

/// Execute the clean command
pub async fn execute(args: &CleanArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let sets = ctx.resolve_sets(&args.sets)?;

    let loader = Loader::new(ctx.db.as_ref());
    let mut total_dropped = 0;

    for set in &sets {
        ctx.verbose(&format!("Cleaning fixture set: {}", set.name));

        let dropped = loader.clean(set).await?;
        for table in &dropped {
            println!("  ✓ dropped {}", table);
        }
        total_dropped += dropped.len();
    }

    if total_dropped == 0 {
        println!("Nothing to clean.");
    } else {
        println!("\nDropped {} table(s)", total_dropped);
    }

    Ok(())
}
