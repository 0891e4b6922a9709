//! Endpoint URL builders

/// Build the UniProtKB entry URL for an accession
pub fn uniprot_entry_url(base_url: &str, accession: &str) -> String {
    format!("{}/uniprotkb/{}", base_url, urlencoding::encode(accession))
}

/// Build the Ollama generate URL
pub fn ollama_generate_url(base_url: &str) -> String {
    format!("{}/api/generate", base_url)
}
