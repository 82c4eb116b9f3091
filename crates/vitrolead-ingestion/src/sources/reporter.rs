//! NIH RePORTER client.
//!
//! One POST to /v2/projects/search; each funded project becomes one lead row
//! for its first principal investigator. Grant holders signal academic budget.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, instrument};
use vitrolead_common::net::ApiClient;
use vitrolead_common::RawRecord;

use super::LeadSource;

const SEARCH_URL: &str = "https://api.reporter.nih.gov/v2/projects/search";

pub struct ReporterSource {
    client: ApiClient,
    keyword: String,
    max_results: usize,
}

impl ReporterSource {
    pub fn new(keyword: &str, max_results: usize) -> anyhow::Result<Self> {
        Ok(Self {
            client: ApiClient::new()?,
            keyword: keyword.to_string(),
            max_results,
        })
    }

    #[instrument(skip(self))]
    async fn search(&self) -> anyhow::Result<Value> {
        let body = json!({
            "criteria": { "term": self.keyword },
            "include_fields": [
                "project_title",
                "principal_investigators",
                "org_city",
                "org_state",
                "org_name",
                "project_start_date"
            ],
            "offset": 0,
            "limit": self.max_results,
        });

        let resp: Value = self
            .client
            .post(SEARCH_URL)?
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        Ok(resp)
    }
}

#[async_trait]
impl LeadSource for ReporterSource {
    fn name(&self) -> &'static str {
        "reporter"
    }

    async fn fetch(&self) -> anyhow::Result<Vec<RawRecord>> {
        let resp = self.search().await?;
        let rows = project_rows(&resp);
        debug!(count = rows.len(), "RePORTER search returned projects");
        Ok(rows)
    }
}

/// Build one raw row per project from a search response. Pure; tested on
/// canned JSON.
pub fn project_rows(resp: &Value) -> Vec<RawRecord> {
    let results = resp["results"].as_array().cloned().unwrap_or_default();
    let mut rows = Vec::new();

    for project in &results {
        let name = project["principal_investigators"]
            .as_array()
            .and_then(|pis| pis.first())
            .and_then(|pi| pi["full_name"].as_str())
            .unwrap_or_default();
        let city = project["org_city"].as_str().unwrap_or_default();
        let state = project["org_state"].as_str().unwrap_or_default();
        let location = format!("{}, {}", city, state);

        let mut row = RawRecord::new();
        row.insert("Name".into(), name.to_string());
        row.insert("Title".into(), "PI / Professor".into());
        row.insert(
            "Company".into(),
            project["org_name"].as_str().unwrap_or_default().to_string(),
        );
        row.insert("Person location".into(), location.clone());
        row.insert("Company HQ".into(), location);
        row.insert(
            "Last paper title".into(),
            project["project_title"].as_str().unwrap_or_default().to_string(),
        );
        row.insert("Funding round".into(), "Grant".into());
        row.insert("Notes".into(), "NIH grant holder".into());
        row.insert("Action".into(), "Grant-funded outreach".into());
        rows.push(row);
    }
    rows
}
