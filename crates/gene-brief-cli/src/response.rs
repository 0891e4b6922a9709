//! JSON recovery from model output
//!
//! Well-behaved models answer with bare JSON; others wrap it in prose or code
//! fences. [`extract_json`] first parses the whole reply, then falls back to
//! the span from the first `{` to the last `}`. That span is greedy: a reply
//! holding two separate objects yields one invalid span and fails.

use crate::error::{CliError, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

#[allow(clippy::expect_used)]
static OBJECT_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("object span pattern is valid"));

/// Parse a JSON value out of a raw model reply
pub fn extract_json(text: &str) -> Result<Value> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CliError::EmptyResponse);
    }

    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }

    if let Some(found) = OBJECT_SPAN.find(text) {
        debug!(start = found.start(), end = found.end(), "Falling back to brace-delimited span");
        if let Ok(value) = serde_json::from_str(found.as_str()) {
            return Ok(value);
        }
    }

    Err(CliError::unparseable_response(text))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_object_parses_directly() {
        let summary = json!({
            "gene": "TP53",
            "protein_name": "Cellular tumor antigen p53",
            "key_functions": ["DNA binding", "apoptosis"],
            "experimental_notes": []
        });
        let text = serde_json::to_string_pretty(&summary).unwrap();

        assert_eq!(extract_json(&text).unwrap(), summary);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(extract_json("\n\t {\"a\": 1}  \n").unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_prose_wrapped_object() {
        let value = extract_json("preamble {\"a\":1} trailing").unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_code_fenced_object_spanning_lines() {
        let text = "Here is the summary:\n```json\n{\n  \"gene\": \"INS\",\n  \"organism\": {\"name\": \"Homo sapiens\"}\n}\n```\nLet me know!";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"gene": "INS", "organism": {"name": "Homo sapiens"}}));
    }

    #[test]
    fn test_empty_reply_fails() {
        let err = extract_json("").unwrap_err();
        assert!(matches!(err, CliError::EmptyResponse));
        assert!(err.to_string().contains("empty response"));
    }

    #[test]
    fn test_whitespace_reply_fails() {
        assert!(matches!(extract_json("  \n\t ").unwrap_err(), CliError::EmptyResponse));
    }

    #[test]
    fn test_reply_without_json_embeds_text() {
        let err = extract_json("I cannot help with that.").unwrap_err();
        assert!(matches!(err, CliError::UnparseableResponse(_)));
        assert!(err.to_string().contains("I cannot help with that."));
    }

    #[test]
    fn test_two_objects_capture_greedily_and_fail() {
        let err = extract_json("first {\"a\": 1} then {\"b\": 2} done").unwrap_err();
        assert!(matches!(err, CliError::UnparseableResponse(_)));
    }

    #[test]
    fn test_non_object_json_is_returned_as_is() {
        assert_eq!(extract_json("[1, 2]").unwrap(), json!([1, 2]));
    }
}
