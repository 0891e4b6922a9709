//! Protein fields extracted from a UniProt entry
//!
//! A [`ProteinRecord`] is the small, prompt-ready view of an entry: names,
//! organism, and the FUNCTION and DISEASE annotation texts.

use crate::api::{Comment, UniProtEntry, COMMENT_DISEASE, COMMENT_FUNCTION};
use crate::error::{CliError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Placeholder used wherever a gene symbol is unavailable
pub const NOT_AVAILABLE: &str = "N/A";

/// Prompt-ready protein metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinRecord {
    pub protein_name: String,
    /// Gene symbols in the order UniProt lists them
    pub gene_names: Vec<String>,
    pub organism: String,
    /// FUNCTION comment texts, newline-joined
    pub function_text: String,
    /// DISEASE comment texts, newline-joined
    pub disease_text: String,
}

impl ProteinRecord {
    /// Extract the record from a fetched UniProtKB JSON document.
    ///
    /// Fails when the recommended protein name, the organism, a listed gene's
    /// name, or the text value of a FUNCTION/DISEASE comment is missing.
    pub fn from_document(document: &Value) -> Result<Self> {
        let entry = UniProtEntry::deserialize(document)
            .map_err(|e| CliError::malformed_entry(e.to_string()))?;
        Self::from_entry(entry)
    }

    pub fn from_entry(entry: UniProtEntry) -> Result<Self> {
        let gene_names = entry
            .genes
            .into_iter()
            .map(|gene| gene.gene_name.value)
            .collect();

        Ok(Self {
            protein_name: entry.protein_description.recommended_name.full_name.value,
            gene_names,
            organism: entry.organism.scientific_name,
            function_text: join_comment_texts(&entry.comments, COMMENT_FUNCTION)?,
            disease_text: join_comment_texts(&entry.comments, COMMENT_DISEASE)?,
        })
    }

    /// First gene symbol, or `N/A`
    pub fn primary_gene(&self) -> &str {
        self.gene_names
            .first()
            .map(String::as_str)
            .unwrap_or(NOT_AVAILABLE)
    }

    /// Gene symbols joined with `", "`, or `N/A`
    pub fn gene_list(&self) -> String {
        if self.gene_names.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.gene_names.join(", ")
        }
    }
}

fn join_comment_texts(comments: &[Comment], kind: &str) -> Result<String> {
    let mut texts = Vec::new();

    for comment in comments.iter().filter(|c| c.is_type(kind)) {
        for text in &comment.texts {
            let value = text.value.as_deref().ok_or_else(|| {
                CliError::malformed_entry(format!("{kind} comment text has no value"))
            })?;
            texts.push(value);
        }
    }

    Ok(texts.join("\n"))
}
