//! Compare command
//!
//! Usage: docdiff compare <A> <B> [--json | --html] [--output <FILE>]

use clap::Args;
use docdiff_core::diff::render_html_report;
use docdiff_core::errors::Side;
use docdiff_engine::extract::read_document;
use docdiff_engine::{compare_documents, CompareRequest, PlainTextExtractor};
use std::path::PathBuf;

use super::{emit, ChunkingArgs};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Original document (side A)
    pub a: PathBuf,

    /// Revised document (side B)
    pub b: PathBuf,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Print the full report as JSON
    #[arg(long, conflicts_with = "html")]
    pub json: bool,

    /// Print a standalone HTML page
    #[arg(long)]
    pub html: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.chunking.engine_config()?;
    let format = args.chunking.format;

    let a = read_document(&args.a, format, Side::A, &PlainTextExtractor)?;
    let b = read_document(&args.b, format, Side::B, &PlainTextExtractor)?;

    let report = compare_documents(CompareRequest::new(a, b).with_config(config))?;

    let rendered = if args.json {
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        json
    } else if args.html {
        let title = format!("{} vs {}", report.name_a, report.name_b);
        render_html_report(&title, &report.summary)
    } else {
        report.human_summary.clone()
    };

    emit(&rendered, args.output.as_deref())
}
