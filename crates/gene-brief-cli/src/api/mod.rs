//! HTTP clients
//!
//! One client per external service: UniProt for protein entries, Ollama for
//! text generation.

pub mod endpoints;
pub mod ollama;
pub mod types;
pub mod uniprot;

pub use ollama::OllamaClient;
pub use types::*;
pub use uniprot::UniProtClient;
