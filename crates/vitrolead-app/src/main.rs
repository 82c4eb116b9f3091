//! Vitrolead — 3D in-vitro lead generation pipeline.
//! Entry point: load a source, score and rank its leads, filter, export CSV.

use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vitrolead_common::{Hub, RawRecord};
use vitrolead_config::{Config, SourceKind};
use vitrolead_ingestion::sources::pubmed::PubMedSource;
use vitrolead_ingestion::sources::reporter::ReporterSource;
use vitrolead_ingestion::sources::seed::SeedSource;
use vitrolead_ingestion::sources::spreadsheet::SpreadsheetSource;
use vitrolead_ingestion::{export, DefaultFileCache, LeadSource};
use vitrolead_ranker::{FilterParams, RuleSet};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    info!(source = ?config.source.kind, "starting lead generation run");

    let rows = load_rows(&config).await;
    info!(count = rows.len(), "raw rows loaded");

    let params = filter_params(&config);
    let filtered = vitrolead_ranker::process(&rows, &RuleSet::default(), &params);

    // Every raw row is scored and ranked, so the global total is the row count.
    let top_score = filtered.iter().map(|l| l.score).max().unwrap_or(0);
    info!(
        total = rows.len(),
        filtered = filtered.len(),
        top_score,
        "scoring complete"
    );

    let export_path = Path::new(&config.export.path);
    export::export_to_path(&filtered, export_path)?;
    info!(path = %export_path.display(), "filtered leads exported");

    Ok(())
}

/// Fetch rows from the configured source. Adapter failures degrade to an
/// empty set; the engine never sees an error.
async fn load_rows(config: &Config) -> Vec<RawRecord> {
    let source: Box<dyn LeadSource> = match config.source.kind {
        SourceKind::DefaultFile => {
            let cache = DefaultFileCache::new(&config.source.default_file);
            return cache.load().as_ref().clone();
        }
        SourceKind::Spreadsheet => Box::new(SpreadsheetSource::new(&config.source.file)),
        SourceKind::Pubmed => {
            let api_key = config
                .pubmed
                .api_key
                .clone()
                .or_else(|| std::env::var("NCBI_API_KEY").ok());
            match PubMedSource::new(&config.pubmed.query, config.pubmed.max_results, api_key) {
                Ok(s) => Box::new(s),
                Err(e) => {
                    warn!(error = %e, "could not build PubMed client");
                    return Vec::new();
                }
            }
        }
        SourceKind::Reporter => {
            match ReporterSource::new(&config.reporter.keyword, config.reporter.max_results) {
                Ok(s) => Box::new(s),
                Err(e) => {
                    warn!(error = %e, "could not build RePORTER client");
                    return Vec::new();
                }
            }
        }
        SourceKind::Seed => Box::new(SeedSource),
    };

    match source.fetch().await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(source = source.name(), error = %e, "source fetch failed, continuing with empty set");
            Vec::new()
        }
    }
}

/// Build engine filter parameters from configuration, resolving hub names.
fn filter_params(config: &Config) -> FilterParams {
    let hubs: Vec<Hub> = config
        .filters
        .hubs
        .iter()
        .filter_map(|name| {
            let hub = Hub::parse(name);
            if hub.is_none() {
                warn!(hub = name.as_str(), "unknown hub name in config, ignoring");
            }
            hub
        })
        .collect();

    FilterParams {
        min_score: config.filters.min_score,
        keyword: config.filters.keyword.clone(),
        title_terms: config.filters.title_terms.clone(),
        hubs,
    }
}
