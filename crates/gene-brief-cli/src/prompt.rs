//! Prompt templates
//!
//! Templates use `{name}` placeholders; `{{` and `}}` produce literal braces.
//! Available names are listed in [`TEMPLATE_VARIABLES`]. The built-in template
//! asks the model for a fixed JSON summary shape; a custom template file may
//! ask for anything.

use crate::error::{CliError, Result};
use crate::record::ProteinRecord;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Placeholder names every template can use
pub const TEMPLATE_VARIABLES: [&str; 7] = [
    "accession",
    "gene",
    "gene_names",
    "protein_name",
    "organism",
    "function_text",
    "disease_text",
];

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

const BUILTIN_TEMPLATE: &str = r#"
You are a bioinformatics assistant.

I will give you information about a protein from UniProt (function, disease relevance, etc.).
Using ONLY that information, produce a concise summary in the following JSON format:

{{
  "gene": "<main gene symbol>",
  "protein_name": "<short descriptive name>",
  "organism": "<species>",
  "summary_student": "<2–3 sentence explanation for a biology student>",
  "summary_researcher": "<2–3 sentence explanation for a researcher>",
  "key_functions": ["...", "..."],
  "pathways_or_processes": ["...", "..."],
  "disease_relevance": ["...", "..."],
  "experimental_notes": ["...", "..."]
}}

If information is not available, use an empty list or null.

Here is the protein metadata:

Gene names: {gene_names}
Protein name: {protein_name}
Organism: {organism}

FUNCTION:
{function_text}

DISEASE:
{disease_text}
"#;

/// A prompt template, built-in or loaded from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    /// The built-in summary prompt
    pub fn builtin() -> Self {
        Self {
            text: BUILTIN_TEMPLATE.to_string(),
        }
    }

    /// Use `text` as the template source
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Load a template file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::template(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Ok(Self::from_text(text))
    }

    /// Built-in template unless a path is given
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Substitute the record's fields into the template
    pub fn render(&self, record: &ProteinRecord, accession: &str) -> Result<String> {
        let vars = TemplateVars::new(record, accession);

        let mut rendered = String::with_capacity(self.text.len() + 512);
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.text) {
            let Some(whole) = caps.get(0) else { continue };
            rendered.push_str(&self.text[last..whole.start()]);

            let replacement = match caps.get(1) {
                Some(name) => vars.lookup(name.as_str()).ok_or_else(|| {
                    CliError::template(format!(
                        "unknown placeholder '{{{}}}'; available: {}",
                        name.as_str(),
                        TEMPLATE_VARIABLES.join(", ")
                    ))
                })?,
                None if whole.as_str() == "{{" => "{",
                None => "}",
            };
            rendered.push_str(replacement);
            last = whole.end();
        }

        rendered.push_str(&self.text[last..]);
        Ok(rendered)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::builtin()
    }
}

struct TemplateVars<'a> {
    accession: &'a str,
    record: &'a ProteinRecord,
    gene_names: String,
}

impl<'a> TemplateVars<'a> {
    fn new(record: &'a ProteinRecord, accession: &'a str) -> Self {
        Self {
            accession,
            record,
            gene_names: record.gene_list(),
        }
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        let value = match name {
            "accession" => self.accession,
            "gene" => self.record.primary_gene(),
            "gene_names" => self.gene_names.as_str(),
            "protein_name" => self.record.protein_name.as_str(),
            "organism" => self.record.organism.as_str(),
            "function_text" => self.record.function_text.as_str(),
            "disease_text" => self.record.disease_text.as_str(),
            _ => return None,
        };
        Some(value)
    }
}
