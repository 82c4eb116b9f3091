//! The lead record schema shared by every source adapter and the scoring core.
//!
//! Adapters produce [`RawRecord`] rows with whatever columns their upstream
//! happens to emit; the normaliser projects those onto [`LeadRecord`], which
//! always carries the full 14-field schema. [`ScoredLead`] adds the derived
//! attributes (score, probability, rank, hub).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A raw key-value row as delivered by a source adapter.
/// Keys are column headers; extra columns beyond the schema are allowed.
pub type RawRecord = BTreeMap<String, String>;

/// Canonical column headers, in display order.
pub const SCHEMA_FIELDS: [&str; 14] = [
    "Name",
    "Title",
    "Company",
    "Person location",
    "Company HQ",
    "Email",
    "LinkedIn",
    "Last paper title",
    "Last paper year",
    "Conference",
    "Funding round",
    "NAMs signal",
    "Notes",
    "Action",
];

/// A fully-populated lead record. Every field is present; empty string
/// (or year 0) means the source did not supply a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Company", default)]
    pub company: String,
    #[serde(rename = "Person location", default)]
    pub person_location: String,
    #[serde(rename = "Company HQ", default)]
    pub company_hq: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "LinkedIn", default)]
    pub linkedin: String,
    #[serde(rename = "Last paper title", default)]
    pub last_paper_title: String,
    /// 0 = unknown. Non-numeric source values normalise to 0.
    #[serde(rename = "Last paper year", default)]
    pub last_paper_year: i32,
    #[serde(rename = "Conference", default)]
    pub conference: String,
    #[serde(rename = "Funding round", default)]
    pub funding_round: String,
    #[serde(rename = "NAMs signal", default)]
    pub nams_signal: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,
    #[serde(rename = "Action", default)]
    pub action: String,
}

impl LeadRecord {
    /// Person location and company HQ joined for geography matching.
    pub fn location_text(&self) -> String {
        format!("{} {}", self.person_location, self.company_hq)
    }

    /// Lower-cased concatenation of the source fields, used by keyword search.
    /// Derived fields (score, rank) are deliberately not part of the haystack;
    /// year 0 is omitted so "0" does not match every unknown-year record.
    pub fn search_haystack(&self) -> String {
        let mut hay = String::new();
        for field in [
            &self.name,
            &self.title,
            &self.company,
            &self.person_location,
            &self.company_hq,
            &self.email,
            &self.linkedin,
            &self.last_paper_title,
            &self.conference,
            &self.funding_round,
            &self.nams_signal,
            &self.notes,
            &self.action,
        ] {
            hay.push_str(field);
            hay.push(' ');
        }
        if self.last_paper_year != 0 {
            hay.push_str(&self.last_paper_year.to_string());
        }
        hay.to_lowercase()
    }
}

/// One of the fixed geographic biotech clusters a record can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hub {
    BostonCambridge,
    BayArea,
    Basel,
    UkGoldenTriangle,
}

impl Hub {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hub::BostonCambridge  => "Boston/Cambridge",
            Hub::BayArea          => "Bay Area",
            Hub::Basel            => "Basel",
            Hub::UkGoldenTriangle => "UK Golden Triangle",
        }
    }

    /// Parse a hub from its display name (lenient on case).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "boston/cambridge"   => Some(Hub::BostonCambridge),
            "bay area"           => Some(Hub::BayArea),
            "basel"              => Some(Hub::Basel),
            "uk golden triangle" => Some(Hub::UkGoldenTriangle),
            _ => None,
        }
    }
}

impl std::fmt::Display for Hub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lead after scoring and ranking. Rank is global across the loaded set;
/// hub is attached only once hub filtering has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredLead {
    #[serde(flatten)]
    pub record: LeadRecord,
    pub score: u32,
    /// Mirrors score; there is no independent probability model.
    pub probability: u32,
    pub rank: u32,
    pub hub: Option<Hub>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_parse_roundtrip() {
        for hub in [
            Hub::BostonCambridge,
            Hub::BayArea,
            Hub::Basel,
            Hub::UkGoldenTriangle,
        ] {
            assert_eq!(Hub::parse(hub.as_str()), Some(hub));
        }
        assert_eq!(Hub::parse("Shanghai"), None);
    }

    #[test]
    fn test_haystack_excludes_zero_year() {
        let record = LeadRecord {
            name: "Jane Doe".to_string(),
            ..Default::default()
        };
        let hay = record.search_haystack();
        assert!(hay.contains("jane doe"));
        assert!(!hay.contains('0'));
    }

    #[test]
    fn test_haystack_is_lowercased() {
        let record = LeadRecord {
            title: "Director of Toxicology".to_string(),
            last_paper_year: 2024,
            ..Default::default()
        };
        let hay = record.search_haystack();
        assert!(hay.contains("director of toxicology"));
        assert!(hay.contains("2024"));
    }
}
