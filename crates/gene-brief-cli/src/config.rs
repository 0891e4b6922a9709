//! Configuration for the gene-brief CLI
//!
//! Endpoints and model selection. Values come from command-line flags, which
//! fall back to `GENE_BRIEF_*` environment variables (a `.env` file is loaded
//! at start-up) and then to the defaults below.

// ============================================================================
// Defaults
// ============================================================================

/// Public UniProt REST API.
pub const DEFAULT_UNIPROT_URL: &str = "https://rest.uniprot.org";

/// Local Ollama server.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Model used when none is selected.
pub const DEFAULT_MODEL: &str = "llama3";

/// Resolved endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// UniProt REST base URL
    pub uniprot_url: String,

    /// Ollama base URL
    pub ollama_url: String,

    /// Model name sent with every generate request
    pub model: String,
}

impl Config {
    /// Create a config; trailing slashes on the URLs are dropped.
    pub fn new(
        uniprot_url: impl Into<String>,
        ollama_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            uniprot_url: trim_base_url(uniprot_url.into()),
            ollama_url: trim_base_url(ollama_url.into()),
            model: model.into(),
        }
    }

    pub fn uniprot_url(&self) -> &str {
        &self.uniprot_url
    }

    pub fn ollama_url(&self) -> &str {
        &self.ollama_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_UNIPROT_URL, DEFAULT_OLLAMA_URL, DEFAULT_MODEL)
    }
}

fn trim_base_url(url: String) -> String {
    match url.strip_suffix('/') {
        Some(trimmed) => trim_base_url(trimmed.to_string()),
        None => url,
    }
}
