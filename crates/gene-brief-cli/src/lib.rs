//! gene-brief CLI library
//!
//! Summarizes UniProt proteins with a local LLM served by Ollama.
//!
//! # Overview
//!
//! For every accession on the command line:
//!
//! 1. **Fetch** the UniProtKB entry as JSON ([`api::UniProtClient`])
//! 2. **Extract** names, organism and FUNCTION/DISEASE texts ([`record::ProteinRecord`])
//! 3. **Prompt** by filling a template ([`prompt::PromptTemplate`])
//! 4. **Generate** a completion ([`api::OllamaClient`])
//! 5. **Parse** the JSON summary out of the reply ([`response::extract_json`])
//!
//! Accessions run one after another; a failing accession is reported and
//! skipped. Results are written as JSON to stdout or a file ([`output`]).

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod prompt;
pub mod record;
pub mod response;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};
pub use output::ResultSet;
pub use record::ProteinRecord;

use clap::Parser;
use config::{DEFAULT_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_UNIPROT_URL};
use std::path::PathBuf;

/// Summarize UniProt proteins using a local LLM (Ollama).
#[derive(Parser, Debug)]
#[command(name = "gene-brief")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  gene-brief P04637 Q9T0Q8 --raw -o output.json")]
pub struct Cli {
    /// UniProt accessions to summarize (e.g. P04637)
    #[arg(value_name = "ACCESSIONS")]
    pub accessions: Vec<String>,

    /// Show raw UniProt JSON
    #[arg(long)]
    pub raw: bool,

    /// Save output to a JSON file
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Compact JSON without indentation
    #[arg(long)]
    pub compact: bool,

    /// Prompt template file with {protein_name}-style placeholders
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Ollama model name
    #[arg(short, long, env = "GENE_BRIEF_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// UniProt REST base URL
    #[arg(long, env = "GENE_BRIEF_UNIPROT_URL", default_value = DEFAULT_UNIPROT_URL)]
    pub uniprot_url: String,

    /// Ollama base URL
    #[arg(long, env = "GENE_BRIEF_OLLAMA_URL", default_value = DEFAULT_OLLAMA_URL)]
    pub ollama_url: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the CLI reference as Markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

impl Cli {
    /// Endpoint configuration selected by flags and environment
    pub fn config(&self) -> Config {
        Config::new(&self.uniprot_url, &self.ollama_url, &self.model)
    }
}
