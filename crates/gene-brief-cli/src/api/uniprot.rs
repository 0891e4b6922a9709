//! UniProt REST client

use crate::api::endpoints;
use crate::error::Result;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Fetches UniProtKB entries as JSON
pub struct UniProtClient {
    client: Client,
    base_url: String,
}

impl UniProtClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch one entry.
    ///
    /// The document is returned untyped so it can be echoed verbatim with
    /// `--raw`; see [`crate::record::ProteinRecord`] for field extraction.
    pub async fn fetch_entry(&self, accession: &str) -> Result<Value> {
        let url = endpoints::uniprot_entry_url(&self.base_url, accession);
        debug!(%url, "GET UniProt entry");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
