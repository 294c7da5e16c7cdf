//! Extract command - resolve a query against a standardized text document.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::{debug, info};

use anchr_core::models::{ExtractionQuery, StandardizedText};
use anchr_core::StandardizedLine;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Extraction query file (JSON)
    #[arg(short, long)]
    query: PathBuf,

    /// Standardized text file (JSON)
    #[arg(short, long)]
    text: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip the bounding-polygon contract check on the document
    #[arg(long)]
    skip_geometry_check: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// The matched line as JSON (`null` when nothing matched)
    Json,
    /// A one-line human-readable summary
    Text,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let query = ExtractionQuery::from_file(&args.query)
        .with_context(|| format!("failed to load query from {}", args.query.display()))?;
    let text = StandardizedText::from_file(&args.text)
        .with_context(|| format!("failed to load document from {}", args.text.display()))?;

    info!(
        pages = text.pages.len(),
        anchor = query.anchor(),
        "document and query loaded"
    );

    // Polygon shape is a precondition of the core, checked only here.
    if !args.skip_geometry_check {
        let issues = text.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Geometry issues:").yellow());
            for issue in &issues {
                eprintln!("  - {issue}");
            }
        }
    }

    let result = anchr_core::extract(&query, &text);
    debug!(found = result.is_some(), "extraction finished");

    let output = format_result(result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    Ok(())
}

fn format_result(
    result: Option<&StandardizedLine>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => Ok(match result {
            Some(line) => format!("{} {}", style("✓").green(), line.text),
            None => format!("{} no matching line", style("✗").red()),
        }),
    }
}
