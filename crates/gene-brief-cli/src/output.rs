//! Result aggregation and JSON output
//!
//! A [`ResultSet`] maps accessions to summaries in command-line order. On
//! stdout a lone summary is printed on its own; otherwise the whole mapping is
//! printed (an empty batch yields `{}`). Files always get the mapping.

use crate::error::Result;
use colored::Colorize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::info;

/// Summaries keyed by accession, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Map<String, Value>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a summary; a repeated accession keeps its first position
    pub fn insert(&mut self, accession: String, summary: Value) {
        self.entries.insert(accession, summary);
    }

    pub fn get(&self, accession: &str) -> Option<&Value> {
        self.entries.get(accession)
    }

    pub fn accessions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The document printed on stdout: the lone summary, or the full mapping
    pub fn to_document(&self) -> Value {
        match self.entries.values().next() {
            Some(single) if self.entries.len() == 1 => single.clone(),
            _ => self.to_mapping(),
        }
    }

    /// The full accession -> summary mapping
    pub fn to_mapping(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    /// Serialize [`Self::to_document`], indented with two spaces unless compact
    pub fn render(&self, compact: bool) -> Result<String> {
        to_json(&self.to_document(), compact)
    }

    /// Serialize [`Self::to_mapping`]
    pub fn render_mapping(&self, compact: bool) -> Result<String> {
        to_json(&self.to_mapping(), compact)
    }
}

fn to_json(document: &Value, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(document)?
    } else {
        serde_json::to_string_pretty(document)?
    };
    Ok(text)
}

/// Write the results to `out`, or to stdout when no path is given
pub fn emit(results: &ResultSet, out: Option<&Path>, compact: bool) -> Result<()> {
    match out {
        Some(path) => {
            let rendered = results.render_mapping(compact)?;
            std::fs::write(path, format!("{rendered}\n"))?;
            info!(path = %path.display(), summaries = results.len(), "Saved summaries");
            println!("{} Saved summaries to {}", "✓".green(), path.display());
        }
        None => println!("{}", results.render(compact)?),
    }

    Ok(())
}
