//! Wire types for the UniProt and Ollama APIs
//!
//! The UniProt types cover only the paths gene-brief reads; every other field
//! of the entry document is ignored.

use serde::{Deserialize, Serialize};

// ============================================================================
// UniProt
// ============================================================================

/// Comment type carrying the protein's function description
pub const COMMENT_FUNCTION: &str = "FUNCTION";

/// Comment type carrying disease involvement
pub const COMMENT_DISEASE: &str = "DISEASE";

/// Subset of a UniProtKB JSON entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniProtEntry {
    pub protein_description: ProteinDescription,

    #[serde(default)]
    pub genes: Vec<Gene>,

    pub organism: Organism,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinDescription {
    pub recommended_name: RecommendedName,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedName {
    pub full_name: ValueField,
}

/// `{"value": "..."}` wrapper used throughout UniProt JSON
#[derive(Debug, Clone, Deserialize)]
pub struct ValueField {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gene {
    pub gene_name: ValueField,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organism {
    pub scientific_name: String,
}

/// A free-text annotation; only the type tag and texts are read
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub comment_type: Option<String>,

    #[serde(default)]
    pub texts: Vec<CommentText>,
}

impl Comment {
    pub fn is_type(&self, kind: &str) -> bool {
        self.comment_type.as_deref() == Some(kind)
    }
}

/// Text entries are optional here because unrelated comment types vary in shape
#[derive(Debug, Clone, Deserialize)]
pub struct CommentText {
    #[serde(default)]
    pub value: Option<String>,
}

// ============================================================================
// Ollama
// ============================================================================

/// Body of `POST /api/generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

/// Non-streamed reply of `POST /api/generate`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}
