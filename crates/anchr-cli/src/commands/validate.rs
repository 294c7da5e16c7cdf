//! Validate command - check bounding polygons against the corner contract.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;

use anchr_core::StandardizedText;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Standardized text file (JSON)
    #[arg(required = true)]
    text: PathBuf,
}

pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let text = StandardizedText::from_file(&args.text)
        .with_context(|| format!("failed to load document from {}", args.text.display()))?;

    let issues = text.validate();
    if issues.is_empty() {
        println!(
            "{} all bounding polygons are well-formed",
            style("✓").green()
        );
        return Ok(());
    }

    eprintln!("{}", style("Geometry issues:").yellow());
    for issue in &issues {
        eprintln!("  - {issue}");
    }
    anyhow::bail!("{} malformed bounding polygon(s)", issues.len());
}
