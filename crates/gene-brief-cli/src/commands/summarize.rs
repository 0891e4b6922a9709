//! `gene-brief <ACCESSIONS>...` implementation
//!
//! Summarizes each accession in turn and writes the collected summaries.

use crate::error::{CliError, Result};
use crate::output;
use crate::pipeline::Summarizer;
use crate::prompt::PromptTemplate;
use crate::Cli;
use tracing::info;

/// Run the summarize command
///
/// Only argument, template and output problems are errors here; per-accession
/// failures are reported by the batch and do not affect the result.
pub async fn run(cli: &Cli) -> Result<()> {
    if cli.accessions.is_empty() {
        return Err(CliError::NoAccessions);
    }

    let template = PromptTemplate::resolve(cli.template.as_deref())?;
    let config = cli.config();

    info!(
        count = cli.accessions.len(),
        model = %config.model(),
        uniprot = %config.uniprot_url(),
        ollama = %config.ollama_url(),
        "Summarizing accessions"
    );

    let summarizer = Summarizer::new(&config, template)?.with_raw(cli.raw);
    let results = summarizer.run_batch(&cli.accessions).await;

    output::emit(&results, cli.out.as_deref(), cli.compact)
}
