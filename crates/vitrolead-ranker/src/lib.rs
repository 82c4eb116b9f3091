//! vitrolead-ranker — Lead scoring and filtering engine.
//!
//! The pipeline is: raw rows → [`normalise`] → [`scorer`] → [`rank`] →
//! [`filter`]. Every stage is a pure in-memory transformation; the engine has
//! no failure modes. Source adapters and presentation live in other crates and
//! only exchange data with this one through the shared schema.

pub mod filter;
pub mod hub;
pub mod normalise;
pub mod rank;
pub mod rules;
pub mod scorer;

pub use filter::{apply_filters, FilterParams};
pub use hub::infer_hub;
pub use normalise::normalise_records;
pub use rank::score_and_rank;
pub use rules::RuleSet;

use tracing::debug;
use vitrolead_common::{RawRecord, ScoredLead};

/// Full engine pass: normalise raw rows, score, assign global ranks, filter.
/// Ranks reflect standing across the whole input set, not the filtered view.
pub fn process(rows: &[RawRecord], rules: &RuleSet, params: &FilterParams) -> Vec<ScoredLead> {
    let records = normalise::normalise_records(rows);
    let ranked = rank::score_and_rank(records, rules);
    let filtered = filter::apply_filters(&ranked, params);
    debug!(
        total = ranked.len(),
        filtered = filtered.len(),
        "engine pass complete"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn raw(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let out = process(&[], &RuleSet::default(), &FilterParams::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_process_scores_ranks_and_filters() {
        let rows = vec![
            raw(&[("Name", "A"), ("Title", "Head of Safety Assessment")]),
            raw(&[("Name", "B"), ("Title", "Accountant")]),
        ];
        let params = FilterParams {
            min_score: 20,
            ..FilterParams::default()
        };
        let out = process(&rows, &RuleSet::default(), &params);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].record.name, "A");
        assert_eq!(out[0].rank, 1);
        assert_eq!(out[0].score, 30);
    }

    #[test]
    fn test_process_keeps_global_ranks_in_filtered_view() {
        let rows = vec![
            raw(&[("Name", "A"), ("Title", "Toxicology Director"), ("Funding round", "Series A")]),
            raw(&[("Name", "B"), ("Title", "Safety Lead")]),
            raw(&[("Name", "C"), ("Title", "Hepatic Scientist"), ("Person location", "Basel")]),
        ];
        let params = FilterParams {
            min_score: 35,
            ..FilterParams::default()
        };
        let out = process(&rows, &RuleSet::default(), &params);
        // B (score 30) drops out; A and C keep their global ranks 1 and 2.
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].record.name, "A");
        assert_eq!(out[0].rank, 1);
        assert_eq!(out[1].record.name, "C");
        assert_eq!(out[1].rank, 2);
    }
}
