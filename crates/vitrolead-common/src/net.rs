use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

use crate::error::VitroleadError;

/// The only hosts the lead pipeline is allowed to call.
const ALLOWED_HOSTS: [&str; 2] = [
    "eutils.ncbi.nlm.nih.gov", // PubMed E-utilities
    "api.reporter.nih.gov",    // NIH RePORTER
];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the two public lead-data APIs. Requests to any other host
/// are refused before they leave the process.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Result<Self, VitroleadError> {
        let client = ClientBuilder::new().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Whether a URL targets one of the approved hosts (or a subdomain).
    pub fn is_allowed(url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        ALLOWED_HOSTS
            .iter()
            .any(|allowed| host == *allowed || host.ends_with(&format!(".{}", allowed)))
    }

    fn check(url: &str) -> Result<(), VitroleadError> {
        if Self::is_allowed(url) {
            Ok(())
        } else {
            Err(VitroleadError::Security(format!(
                "refusing request to non-approved host: {}",
                url
            )))
        }
    }

    /// GET request builder, gated on the approved-host list.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, VitroleadError> {
        Self::check(url)?;
        Ok(self.client.get(url))
    }

    /// POST request builder, gated on the approved-host list.
    pub fn post(&self, url: &str) -> Result<reqwest::RequestBuilder, VitroleadError> {
        Self::check(url)?;
        Ok(self.client.post(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved_hosts() {
        assert!(ApiClient::is_allowed(
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi"
        ));
        assert!(ApiClient::is_allowed("https://api.reporter.nih.gov/v2/projects/search"));
    }

    #[test]
    fn test_other_hosts_refused() {
        assert!(!ApiClient::is_allowed("https://example.com/leads"));
        assert!(!ApiClient::is_allowed("https://evil-eutils.ncbi.nlm.nih.gov.example.com/"));
        assert!(!ApiClient::is_allowed("not a url"));
    }

    #[test]
    fn test_request_builders_gate_on_host() {
        let client = ApiClient::new().unwrap();
        assert!(client.get("https://api.reporter.nih.gov/v2/projects/search").is_ok());
        let err = client.post("https://example.com/").unwrap_err();
        assert!(matches!(err, VitroleadError::Security(_)));
    }
}
