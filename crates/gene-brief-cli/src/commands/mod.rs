//! CLI command implementations

pub mod summarize;
