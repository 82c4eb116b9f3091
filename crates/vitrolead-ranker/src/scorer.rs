//! Additive rule evaluation: record → bounded relevance score.

use chrono::{Datelike, Utc};
use std::collections::HashSet;
use vitrolead_common::LeadRecord;

use crate::rules::RuleSet;

/// Scores are clamped to this ceiling.
pub const MAX_SCORE: u32 = 100;

/// Score a record against the rule table using the wall-clock year.
pub fn score(record: &LeadRecord, rules: &RuleSet) -> u32 {
    score_for_year(record, rules, Utc::now().year())
}

/// Score with an explicit current year. Pure and deterministic; every rule is
/// evaluated independently except within an exclusivity group, where the
/// first match claims the group.
pub fn score_for_year(record: &LeadRecord, rules: &RuleSet, current_year: i32) -> u32 {
    let mut total: u32 = 0;
    let mut claimed_groups: HashSet<&str> = HashSet::new();

    for rule in &rules.rules {
        if let Some(group) = rule.group {
            if claimed_groups.contains(group) {
                continue;
            }
        }
        if rule.applies(record, current_year) {
            total += rule.points;
            if let Some(group) = rule.group {
                claimed_groups.insert(group);
            }
        }
    }

    total.min(MAX_SCORE)
}
