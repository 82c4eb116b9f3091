//! The scoring rule table.
//!
//! Rules are held as an explicit ordered list of (signal, matcher, points,
//! exclusivity group) entries rather than inline conditionals, so each rule is
//! independently testable and group exclusivity is enforced structurally:
//! within a group, the first matching rule wins and the rest are skipped.

use regex::Regex;
use vitrolead_common::LeadRecord;

/// Hub keywords that earn the location bonus. Broader than the four named
/// display hubs; any of these substrings in the combined location text counts.
pub const HUB_KEYWORDS: [&str; 9] = [
    "boston",
    "cambridge",
    "bay area",
    "basel",
    "oxford",
    "cambridge uk",
    "uk golden triangle",
    "golden triangle",
    "san francisco",
];

/// Which projection of the record a rule inspects. All projections are
/// lower-cased before matching; the NAMs signal is also trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Title,
    FundingRound,
    NamsSignal,
    PaperTitle,
    /// Person location + " " + Company HQ.
    Location,
}

/// How a rule's condition is evaluated against the selected signal text.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Regex match anywhere in the text.
    Pattern(Regex),
    /// Exact equality with one of the listed values.
    OneOf(&'static [&'static str]),
    /// Substring containment of any listed value.
    ContainsAny(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Pattern(re) => re.is_match(text),
            Matcher::OneOf(values) => values.iter().any(|v| text == *v),
            Matcher::ContainsAny(values) => values.iter().any(|v| text.contains(v)),
        }
    }
}

/// A single additive scoring rule.
#[derive(Debug, Clone)]
pub struct ScoringRule {
    pub name: &'static str,
    pub signal: Signal,
    pub matcher: Matcher,
    pub points: u32,
    /// Rules sharing a group are mutually exclusive; earlier entries have
    /// higher priority.
    pub group: Option<&'static str>,
    /// Extra recency constraint: the paper year must be at least
    /// current_year − window for the rule to fire.
    pub recency_window_years: Option<i32>,
}

impl ScoringRule {
    fn select(&self, record: &LeadRecord) -> String {
        match self.signal {
            Signal::Title        => record.title.to_lowercase(),
            Signal::FundingRound => record.funding_round.to_lowercase(),
            Signal::NamsSignal   => record.nams_signal.trim().to_lowercase(),
            Signal::PaperTitle   => record.last_paper_title.to_lowercase(),
            Signal::Location     => record.location_text().to_lowercase(),
        }
    }

    /// Whether this rule fires for the record, given the current year.
    pub fn applies(&self, record: &LeadRecord, current_year: i32) -> bool {
        if let Some(window) = self.recency_window_years {
            if record.last_paper_year < current_year - window {
                return false;
            }
        }
        self.matcher.matches(&self.select(record))
    }
}

/// The ordered rule table. [`Default`] builds the production rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub rules: Vec<ScoringRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        let pattern = |p: &str| Regex::new(p).expect("static rule pattern must compile");
        Self {
            rules: vec![
                ScoringRule {
                    name: "role_fit",
                    signal: Signal::Title,
                    matcher: Matcher::Pattern(pattern("toxicolog|safety|hepatic|3d")),
                    points: 30,
                    group: None,
                    recency_window_years: None,
                },
                ScoringRule {
                    name: "funding_intent",
                    signal: Signal::FundingRound,
                    matcher: Matcher::Pattern(pattern("series a|series b")),
                    points: 20,
                    group: None,
                    recency_window_years: None,
                },
                ScoringRule {
                    name: "technographic_explicit",
                    signal: Signal::NamsSignal,
                    matcher: Matcher::OneOf(&["yes", "true", "y"]),
                    points: 15,
                    group: Some("technographic"),
                    recency_window_years: None,
                },
                ScoringRule {
                    name: "technographic_implied",
                    signal: Signal::PaperTitle,
                    matcher: Matcher::Pattern(pattern(
                        "nam|in vitro|organoid|organ-on-chip|3d cell|spheroid",
                    )),
                    points: 10,
                    group: Some("technographic"),
                    recency_window_years: None,
                },
                ScoringRule {
                    name: "location_hub",
                    signal: Signal::Location,
                    matcher: Matcher::ContainsAny(&HUB_KEYWORDS),
                    points: 10,
                    group: None,
                    recency_window_years: None,
                },
                ScoringRule {
                    name: "scientific_intent",
                    signal: Signal::PaperTitle,
                    matcher: Matcher::Pattern(pattern("drug-induced liver injury|dili")),
                    points: 40,
                    group: None,
                    recency_window_years: Some(2),
                },
            ],
        }
    }
}

impl RuleSet {
    /// Sanity check: every rule awards points and carries a distinct name.
    pub fn validate(&self) -> bool {
        let mut names = std::collections::HashSet::new();
        self.rules.iter().all(|r| r.points > 0 && names.insert(r.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ruleset_is_valid() {
        assert!(RuleSet::default().validate());
    }

    #[test]
    fn test_role_fit_matches_partial_word() {
        let rules = RuleSet::default();
        let record = LeadRecord {
            title: "Principal Toxicologist".to_string(),
            ..Default::default()
        };
        assert!(rules.rules[0].applies(&record, 2025));
    }

    #[test]
    fn test_nams_signal_requires_exact_value() {
        let rules = RuleSet::default();
        let explicit = &rules.rules[2];
        for yes in ["yes", "  YES ", "True", "y"] {
            let record = LeadRecord {
                nams_signal: yes.to_string(),
                ..Default::default()
            };
            assert!(explicit.applies(&record, 2025), "{:?} should count", yes);
        }
        let record = LeadRecord {
            nams_signal: "yes, definitely".to_string(),
            ..Default::default()
        };
        assert!(!explicit.applies(&record, 2025));
    }

    #[test]
    fn test_recency_window_gates_dili_rule() {
        let rules = RuleSet::default();
        let dili = &rules.rules[5];
        let mut record = LeadRecord {
            last_paper_title: "New DILI biomarkers".to_string(),
            last_paper_year: 2025,
            ..Default::default()
        };
        assert!(dili.applies(&record, 2025));
        assert!(dili.applies(&record, 2027)); // exactly at the window edge
        record.last_paper_year = 2022;
        assert!(!dili.applies(&record, 2025));
        record.last_paper_year = 0; // unknown year never counts as recent
        assert!(!dili.applies(&record, 2025));
    }

    #[test]
    fn test_hub_keywords_match_combined_location() {
        let rules = RuleSet::default();
        let record = LeadRecord {
            person_location: "Remote".to_string(),
            company_hq: "Basel, Switzerland".to_string(),
            ..Default::default()
        };
        assert!(rules.rules[4].applies(&record, 2025));
    }
}
