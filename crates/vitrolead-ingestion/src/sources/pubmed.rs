//! PubMed E-utilities client.
//!
//! Endpoints used:
//!   esearch:  https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi
//!   esummary: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi
//!
//! Each matching paper fans out into one row per listed author (capped at 5),
//! so the pipeline scores people, not publications.

use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, instrument};
use vitrolead_common::net::ApiClient;
use vitrolead_common::RawRecord;

use super::LeadSource;

const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
const ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

/// Authors listed beyond this count are rarely the contact-worthy ones.
const MAX_AUTHORS_PER_PAPER: usize = 5;

pub struct PubMedSource {
    client: ApiClient,
    query: String,
    max_results: usize,
    api_key: Option<String>,
}

impl PubMedSource {
    pub fn new(query: &str, max_results: usize, api_key: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: ApiClient::new()?,
            query: query.to_string(),
            max_results,
            api_key,
        })
    }

    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("retmode", "json".to_string())];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Search PubMed and return a list of PMIDs, newest first.
    #[instrument(skip(self))]
    async fn esearch(&self) -> anyhow::Result<Vec<String>> {
        let mut params = self.base_params();
        params.push(("db", "pubmed".to_string()));
        params.push(("term", self.query.clone()));
        params.push(("sort", "pub+date".to_string()));
        params.push(("retmax", self.max_results.to_string()));

        let resp: Value = self
            .client
            .get(ESEARCH_URL)?
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        let ids: Vec<String> = resp["esearchresult"]["idlist"]
            .as_array()
            .unwrap_or(&vec![])
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect();

        debug!(count = ids.len(), "PubMed esearch returned PMIDs");
        Ok(ids)
    }

    /// Fetch summaries for a list of PMIDs.
    #[instrument(skip(self, pmids))]
    async fn esummary(&self, pmids: &[String]) -> anyhow::Result<Value> {
        let mut params = self.base_params();
        params.push(("db", "pubmed".to_string()));
        params.push(("id", pmids.join(",")));

        let resp: Value = self
            .client
            .get(ESUMMARY_URL)?
            .query(&params)
            .send()
            .await?
            .json()
            .await?;
        Ok(resp)
    }
}

#[async_trait]
impl LeadSource for PubMedSource {
    fn name(&self) -> &'static str {
        "pubmed"
    }

    async fn fetch(&self) -> anyhow::Result<Vec<RawRecord>> {
        let pmids = self.esearch().await?;
        if pmids.is_empty() {
            return Ok(vec![]);
        }
        let summary = self.esummary(&pmids).await?;
        Ok(author_rows(&summary, &pmids))
    }
}

/// Build one raw row per author from an esummary response. Pure; tested on
/// canned JSON.
pub fn author_rows(summary: &Value, pmids: &[String]) -> Vec<RawRecord> {
    let year_re = Regex::new(r"(\d{4})").expect("static pattern must compile");
    let mut rows = Vec::new();

    for pmid in pmids {
        let rec = &summary["result"][pmid.as_str()];
        let title = rec["title"].as_str().unwrap_or_default();
        let pubdate = rec["pubdate"].as_str().unwrap_or_default();
        let year = year_re
            .captures(pubdate)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<i32>().ok())
            .unwrap_or(0);

        let authors = rec["authors"].as_array().cloned().unwrap_or_default();
        for author in authors.iter().take(MAX_AUTHORS_PER_PAPER) {
            let name = author["name"].as_str().unwrap_or_default().trim();
            if name.is_empty() {
                continue;
            }
            let mut row = RawRecord::new();
            row.insert("Name".into(), name.to_string());
            row.insert("Title".into(), "Author / Researcher".into());
            row.insert("Last paper title".into(), title.to_string());
            row.insert("Last paper year".into(), year.to_string());
            row.insert("Notes".into(), "PubMed author".into());
            row.insert("Action".into(), "Research outreach".into());
            rows.push(row);
        }
    }
    rows
}
