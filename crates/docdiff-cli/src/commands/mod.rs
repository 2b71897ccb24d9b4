//! Subcommands and the options they share.

pub mod chunk;
pub mod compare;

use clap::{Args, ValueEnum};
use docdiff_core::config::{ChunkPolicy, EngineConfig};
use docdiff_core::format::SourceFormat;
use std::path::{Path, PathBuf};

/// Chunking policy names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Sentence,
    Paragraph,
    WordWindow,
}

/// Options controlling how documents are read and chunked
#[derive(Debug, Args)]
pub struct ChunkingArgs {
    /// Document format: text, pdf, word or excel (input must already be extracted text)
    #[arg(short, long, default_value = "text")]
    pub format: SourceFormat,

    /// TOML engine configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum chunk size in characters (overrides the config file)
    #[arg(long)]
    pub max_chunk_size: Option<usize>,

    /// Chunking policy for text documents (overrides the config file)
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Words per window for the word-window policy
    #[arg(long, default_value_t = 200)]
    pub words: usize,
}

impl ChunkingArgs {
    /// Load the config file, if any, and apply flag overrides.
    pub fn engine_config(&self) -> Result<EngineConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => EngineConfig::default(),
        };

        if let Some(max) = self.max_chunk_size {
            config = config.with_max_chunk_size(max);
        }
        if let Some(policy) = self.policy {
            config = config.with_chunk_policy(match policy {
                PolicyArg::Sentence => ChunkPolicy::Sentence,
                PolicyArg::Paragraph => ChunkPolicy::Paragraph,
                PolicyArg::WordWindow => ChunkPolicy::WordWindow { words: self.words },
            });
        }

        config.validate()?;
        Ok(config)
    }
}

/// Read an [`EngineConfig`] from a TOML file; missing keys take defaults.
pub fn load_config(path: &Path) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
    let config: EngineConfig =
        toml::from_str(&raw).map_err(|e| format!("invalid config {}: {}", path.display(), e))?;
    Ok(config)
}

/// Write `content` to `output`, or stdout when no path is given.
pub fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            eprintln!("✓ Written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
