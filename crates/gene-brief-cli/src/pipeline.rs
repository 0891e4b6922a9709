//! Per-accession summarization pipeline
//!
//! fetch -> extract -> prompt -> generate -> parse, one accession at a time.
//! [`Summarizer::run_batch`] isolates failures: an accession that fails at any
//! step is reported and left out of the [`ResultSet`], and the batch moves on.

use crate::api::{OllamaClient, UniProtClient};
use crate::config::Config;
use crate::error::Result;
use crate::output::ResultSet;
use crate::progress::StepProgress;
use crate::prompt::PromptTemplate;
use crate::record::ProteinRecord;
use crate::response::extract_json;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

const STEPS: usize = 5;

/// Runs the summarization pipeline against UniProt and Ollama
pub struct Summarizer {
    uniprot: UniProtClient,
    ollama: OllamaClient,
    template: PromptTemplate,
    show_raw: bool,
}

impl Summarizer {
    pub fn new(config: &Config, template: PromptTemplate) -> Result<Self> {
        Ok(Self {
            uniprot: UniProtClient::new(config.uniprot_url())?,
            ollama: OllamaClient::new(config.ollama_url(), config.model())?,
            template,
            show_raw: false,
        })
    }

    /// Echo each fetched UniProt document to stderr
    pub fn with_raw(mut self, show_raw: bool) -> Self {
        self.show_raw = show_raw;
        self
    }

    /// Summarize a single accession
    #[instrument(skip(self), fields(model = %self.ollama.model()))]
    pub async fn summarize(&self, accession: &str) -> Result<Value> {
        let progress = StepProgress::start(accession, STEPS);

        progress.step(1, "Fetching UniProt entry");
        let document = self.uniprot.fetch_entry(accession).await?;

        if self.show_raw {
            let pretty = serde_json::to_string_pretty(&document)?;
            progress.suspend(|| {
                eprintln!("\n=== RAW UNIPROT DATA ({accession}) ===");
                eprintln!("{pretty}");
                eprintln!("=== END RAW DATA ===\n");
            });
        }

        progress.step(2, "Extracting relevant fields");
        let record = ProteinRecord::from_document(&document)?;
        debug!(protein = %record.protein_name, genes = ?record.gene_names, organism = %record.organism, "Extracted fields");

        progress.step(3, "Building prompt");
        let prompt = self.template.render(&record, accession)?;

        progress.step(4, "Sending prompt to LLM");
        let reply = self.ollama.generate(&prompt).await?;
        debug!(reply_len = reply.len(), "LLM responded");

        progress.step(5, "Parsing JSON from LLM response");
        let summary = extract_json(&reply)?;

        info!("Summary ready");
        Ok(summary)
    }

    /// Summarize every accession in order, skipping the ones that fail
    pub async fn run_batch(&self, accessions: &[String]) -> ResultSet {
        let mut results = ResultSet::new();

        for accession in accessions {
            match self.summarize(accession).await {
                Ok(summary) => results.insert(accession.clone(), summary),
                Err(e) => {
                    error!(%accession, error = %e, "Summarization failed");
                    eprintln!("[{accession}] ERROR: {e}");
                }
            }
        }

        info!(
            requested = accessions.len(),
            succeeded = results.len(),
            "Batch finished"
        );
        results
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn entry(gene: &str) -> Value {
        json!({
            "proteinDescription": {"recommendedName": {"fullName": {"value": format!("{gene} protein")}}},
            "genes": [{"geneName": {"value": gene}}],
            "organism": {"scientificName": "Homo sapiens"},
            "comments": [{"commentType": "FUNCTION", "texts": [{"value": format!("{gene} function.")}]}]
        })
    }

    async fn mount_entry(server: &MockServer, accession: &str, gene: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/uniprotkb/{accession}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(entry(gene)))
            .mount(server)
            .await;
    }

    async fn mount_reply(server: &MockServer, reply: &str) {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": reply})))
            .mount(server)
            .await;
    }

    fn summarizer(uniprot: &MockServer, ollama: &MockServer) -> Summarizer {
        let config = Config::new(uniprot.uri(), ollama.uri(), "llama3");
        Summarizer::new(&config, PromptTemplate::builtin()).unwrap()
    }

    #[tokio::test]
    async fn test_summarize_end_to_end() {
        let uniprot = MockServer::start().await;
        let ollama = MockServer::start().await;
        mount_entry(&uniprot, "P04637", "TP53").await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(json!({"model": "llama3", "stream": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "Sure! {\"gene\": \"TP53\", \"key_functions\": []}"
            })))
            .expect(1)
            .mount(&ollama)
            .await;

        let summary = summarizer(&uniprot, &ollama).summarize("P04637").await.unwrap();
        assert_eq!(summary, json!({"gene": "TP53", "key_functions": []}));

        let requests = ollama.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.contains("Gene names: TP53"));
        assert!(prompt.contains("FUNCTION:\nTP53 function."));
    }

    #[tokio::test]
    async fn test_summarize_malformed_entry_skips_llm() {
        let uniprot = MockServer::start().await;
        let ollama = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/uniprotkb/P00000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"organism": {}})))
            .mount(&uniprot)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&ollama)
            .await;

        let err = summarizer(&uniprot, &ollama).summarize("P00000").await.unwrap_err();
        assert!(matches!(err, CliError::MalformedEntry(_)));
    }

    #[tokio::test]
    async fn test_summarize_empty_reply_fails() {
        let uniprot = MockServer::start().await;
        let ollama = MockServer::start().await;
        mount_entry(&uniprot, "P01308", "INS").await;
        mount_reply(&ollama, "   ").await;

        let err = summarizer(&uniprot, &ollama).summarize("P01308").await.unwrap_err();
        assert!(matches!(err, CliError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_run_batch_skips_failures_and_keeps_order() {
        let uniprot = MockServer::start().await;
        let ollama = MockServer::start().await;
        mount_entry(&uniprot, "Q9T0Q8", "GENE2").await;
        mount_entry(&uniprot, "P01308", "INS").await;
        Mock::given(method("GET"))
            .and(path("/uniprotkb/BROKEN"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&uniprot)
            .await;
        mount_reply(&ollama, "{\"ok\": true}").await;

        let accessions = vec![
            "Q9T0Q8".to_string(),
            "BROKEN".to_string(),
            "P01308".to_string(),
        ];
        let results = summarizer(&uniprot, &ollama).run_batch(&accessions).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results.accessions().collect::<Vec<_>>(), vec!["Q9T0Q8", "P01308"]);
        assert!(results.get("BROKEN").is_none());
    }
}
