//! gene-brief common library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared infrastructure for the gene-brief workspace members.
//!
//! - **Logging**: `tracing` subscriber setup driven by [`logging::LogConfig`]
//!
//! # Example
//!
//! ```no_run
//! use gene_brief_common::logging::{init_logging, LogConfig, LogLevel};
//!
//! let config = LogConfig::builder().level(LogLevel::Debug).build();
//! init_logging(&config).ok();
//! ```

pub mod logging;
