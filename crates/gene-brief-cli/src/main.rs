//! gene-brief - main entry point

use clap::Parser;
use gene_brief_cli::Cli;
use gene_brief_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Verbose: debug level with targets and source locations; otherwise only
    // warnings and errors
    let log_config = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .include_targets(cli.verbose)
        .include_location(cli.verbose)
        .log_file_prefix("gene-brief")
        .build();

    // Environment variables take precedence
    let log_config = log_config
        .clone()
        .with_env_overrides()
        .unwrap_or(log_config);

    // The CLI works without logging, so setup errors are ignored
    let log_guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = gene_brief_cli::commands::summarize::run(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        drop(log_guard);
        process::exit(1);
    }
}
