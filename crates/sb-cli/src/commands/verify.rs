//! Verify command implementation

use anyhow::Result;
use sb_loader::Verifier;

use crate::cli::{GlobalArgs, VerifyArgs};
use crate::context::RuntimeContext;

/// Execute the verify command
pub async fn execute(args: &VerifyArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let sets = ctx.resolve_sets(&args.sets)?;

    if sets.is_empty() {
        println!("No fixture sets selected.");
        return Ok(());
    }

    let verifier = Verifier::new(ctx.db.as_ref());
    let mut all_passed = true;

    for set in &sets {
        println!("Verifying fixture set '{}'...", set.name);

        let (results, summary) = verifier.verify_all(set).await;

        for result in &results {
            if result.passed {
                ctx.verbose(&format!("check passed: {}", result.name));
            } else {
                let detail = result.detail.as_deref().unwrap_or("failed");
                println!("  ✗ {} - {}", result.name, detail);
            }
        }

        println!(
            "  {} checks: {} passed, {} failed\n",
            summary.total, summary.passed, summary.failed
        );

        all_passed &= summary.all_passed();
    }

    if !all_passed {
        std::process::exit(1);
    }

    println!("All fixture data verified.");
    Ok(())
}
