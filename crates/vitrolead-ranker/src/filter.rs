//! Filter engine: AND across filter categories, OR within a category.
//!
//! Filters are pure predicates over already-ranked leads; ranks are carried
//! through unchanged, so a filtered view shows global standing and its rank
//! column may be non-contiguous.

use serde::{Deserialize, Serialize};
use vitrolead_common::{Hub, ScoredLead};

use crate::hub::infer_hub;

/// User-selected filter parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterParams {
    /// Inclusive score floor.
    #[serde(default = "default_min_score")]
    pub min_score: u32,
    /// Case-insensitive substring searched across the record's source fields.
    /// Empty means inactive.
    #[serde(default)]
    pub keyword: String,
    /// Keep leads whose title contains any of these terms. Empty = inactive.
    #[serde(default)]
    pub title_terms: Vec<String>,
    /// Keep leads resolving to any of these hubs. Empty = inactive.
    #[serde(default)]
    pub hubs: Vec<Hub>,
}

fn default_min_score() -> u32 {
    20
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            keyword: String::new(),
            title_terms: Vec::new(),
            hubs: Vec::new(),
        }
    }
}

/// Apply all active filters. When the hub filter is active, each surviving
/// lead carries its inferred hub.
pub fn apply_filters(leads: &[ScoredLead], params: &FilterParams) -> Vec<ScoredLead> {
    let keyword = params.keyword.trim().to_lowercase();
    let title_terms: Vec<String> = params
        .title_terms
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    leads
        .iter()
        .filter(|lead| lead.score >= params.min_score)
        .filter(|lead| {
            keyword.is_empty() || lead.record.search_haystack().contains(&keyword)
        })
        .filter(|lead| {
            if title_terms.is_empty() {
                return true;
            }
            let title = lead.record.title.to_lowercase();
            title_terms.iter().any(|term| title.contains(term))
        })
        .filter_map(|lead| {
            if params.hubs.is_empty() {
                return Some(lead.clone());
            }
            let hub = infer_hub(&lead.record.location_text());
            match hub {
                Some(h) if params.hubs.contains(&h) => {
                    let mut kept = lead.clone();
                    kept.hub = Some(h);
                    Some(kept)
                }
                _ => None,
            }
        })
        .collect()
}
