//! Error types for the gene-brief CLI
//!
//! Messages are user-facing: each one says what failed and, where there is
//! one, what to check next.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// No accession was given on the command line
    #[error("You must provide at least one UniProt accession.")]
    NoAccessions,

    /// HTTP transport failure or non-success status
    #[error("Network request failed: {0}. Check your internet connection and the endpoint URLs.")]
    Http(#[from] reqwest::Error),

    /// The UniProt document lacks a field the extractor relies on
    #[error("Malformed UniProt entry: {0}")]
    MalformedEntry(String),

    /// Prompt template could not be loaded or rendered
    #[error("Prompt template error: {0}")]
    Template(String),

    /// The model replied with nothing but whitespace
    #[error("LLM returned empty response; cannot parse JSON.")]
    EmptyResponse,

    /// No JSON object could be recovered from the model reply
    #[error("Could not parse JSON from LLM response:\n{0}")]
    UnparseableResponse(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a malformed entry error
    pub fn malformed_entry(msg: impl Into<String>) -> Self {
        Self::MalformedEntry(msg.into())
    }

    /// Create a template error
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Create an unparseable response error carrying the raw model text
    pub fn unparseable_response(text: impl Into<String>) -> Self {
        Self::UnparseableResponse(text.into())
    }
}
