//! Chunk command
//!
//! Usage: docdiff chunk <FILE> [--json]

use clap::Args;
use docdiff_core::errors::Side;
use docdiff_core_types::RequestContext;
use docdiff_engine::commands::chunk::chunk_input;
use docdiff_engine::extract::read_document;
use docdiff_engine::PlainTextExtractor;
use std::path::PathBuf;

use super::{emit, ChunkingArgs};

#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Document to chunk
    pub file: PathBuf,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Print chunks as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Execute chunk command
pub fn execute(args: ChunkArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.chunking.engine_config()?;
    let input = read_document(&args.file, args.chunking.format, Side::A, &PlainTextExtractor)?;

    let chunks = chunk_input(&input, &config, &RequestContext::new())?;

    let rendered = if args.json {
        let mut json = serde_json::to_string_pretty(&chunks)?;
        json.push('\n');
        json
    } else {
        chunks
            .iter()
            .map(|c| format!("[{}] ({} chars) {}\n", c.index, c.char_len(), c.text))
            .collect()
    };

    emit(&rendered, None)
}
