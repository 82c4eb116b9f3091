//! Global ranking: stable descending sort by score, dense 1-based ranks.

use chrono::{Datelike, Utc};
use vitrolead_common::{LeadRecord, ScoredLead};

use crate::rules::RuleSet;
use crate::scorer;

/// Score every record and assign global ranks using the wall-clock year.
pub fn score_and_rank(records: Vec<LeadRecord>, rules: &RuleSet) -> Vec<ScoredLead> {
    score_and_rank_for_year(records, rules, Utc::now().year())
}

/// Deterministic variant with an injected current year.
///
/// The sort is stable: records with equal scores keep their input order, so
/// re-running on the same input always yields identical rank assignments.
pub fn score_and_rank_for_year(
    records: Vec<LeadRecord>,
    rules: &RuleSet,
    current_year: i32,
) -> Vec<ScoredLead> {
    let mut leads: Vec<ScoredLead> = records
        .into_iter()
        .map(|record| {
            let score = scorer::score_for_year(&record, rules, current_year);
            ScoredLead {
                record,
                score,
                probability: score,
                rank: 0,
                hub: None,
            }
        })
        .collect();

    leads.sort_by(|a, b| b.score.cmp(&a.score));
    for (position, lead) in leads.iter_mut().enumerate() {
        lead.rank = position as u32 + 1;
    }
    leads
}
