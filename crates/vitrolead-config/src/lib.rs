//! Configuration loading for Vitrolead.
//! Reads vitrolead.toml from the current directory or the path in the
//! VITROLEAD_CONFIG env var. A missing file yields the built-in defaults so
//! the pipeline always has a complete configuration to run with.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use vitrolead_common::{Result, VitroleadError};

pub const DEFAULT_CONFIG_PATH: &str = "vitrolead.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub pubmed: PubMedConfig,
    #[serde(default)]
    pub reporter: ReporterConfig,
    #[serde(default)]
    pub filters: FilterConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Which adapter supplies the raw rows for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// The configured default spreadsheet, loaded through the file cache.
    #[default]
    DefaultFile,
    /// An explicit spreadsheet path (Apollo/Clay export).
    Spreadsheet,
    /// PubMed authors for the configured query.
    Pubmed,
    /// NIH RePORTER grants for the configured keyword.
    Reporter,
    /// The built-in demo dataset.
    Seed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    /// Default spreadsheet path, resolved once and cached.
    #[serde(default = "default_source_file")]
    pub default_file: String,
    /// Explicit spreadsheet path for SourceKind::Spreadsheet.
    #[serde(default)]
    pub file: String,
}

fn default_source_file() -> String {
    "leads.csv".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            default_file: default_source_file(),
            file: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubMedConfig {
    #[serde(default = "default_pubmed_query")]
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Optional NCBI API key for higher rate limits.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_pubmed_query() -> String {
    "Drug-Induced Liver Injury[Title] AND 3D cell culture".to_string()
}

fn default_max_results() -> usize {
    50
}

impl Default for PubMedConfig {
    fn default() -> Self {
        Self {
            query: default_pubmed_query(),
            max_results: default_max_results(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterConfig {
    #[serde(default = "default_reporter_keyword")]
    pub keyword: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_reporter_keyword() -> String {
    "liver toxicity".to_string()
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            keyword: default_reporter_keyword(),
            max_results: default_max_results(),
        }
    }
}

/// Default filter values; hubs and title terms are display-name strings and
/// are resolved by the app when building engine parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_min_score")]
    pub min_score: u32,
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub title_terms: Vec<String>,
    #[serde(default)]
    pub hubs: Vec<String>,
}

fn default_min_score() -> u32 {
    20
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            keyword: String::new(),
            title_terms: Vec::new(),
            hubs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_path")]
    pub path: String,
}

fn default_export_path() -> String {
    "lead_generation_filtered.csv".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

impl Config {
    /// Load from VITROLEAD_CONFIG, or vitrolead.toml in the working directory.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var("VITROLEAD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| VitroleadError::Config(format!("{}: {}", path.display(), e)))
    }
}
