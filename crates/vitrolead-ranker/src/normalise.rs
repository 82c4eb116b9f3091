//! Record normalisation: raw adapter rows → schema-complete lead records.
//!
//! Guarantees the scorer always sees every field. Missing columns default to
//! empty string; a year that does not parse as an integer becomes 0 (unknown),
//! which structurally fails the recency rule rather than erroring.

use vitrolead_common::{LeadRecord, RawRecord};

/// Normalise a batch of raw rows. Never fails; empty in → empty out.
pub fn normalise_records(rows: &[RawRecord]) -> Vec<LeadRecord> {
    rows.iter().map(normalise_record).collect()
}

/// Project a single raw row onto the fixed schema.
pub fn normalise_record(row: &RawRecord) -> LeadRecord {
    let get = |key: &str| row.get(key).cloned().unwrap_or_default();

    LeadRecord {
        name: get("Name"),
        title: get("Title"),
        company: get("Company"),
        person_location: get("Person location"),
        company_hq: get("Company HQ"),
        email: get("Email"),
        linkedin: get("LinkedIn"),
        last_paper_title: get("Last paper title"),
        last_paper_year: parse_year(row.get("Last paper year")),
        conference: get("Conference"),
        funding_round: get("Funding round"),
        nams_signal: get("NAMs signal"),
        notes: get("Notes"),
        action: get("Action"),
    }
}

fn parse_year(value: Option<&String>) -> i32 {
    value
        .map(|v| v.trim())
        .and_then(|v| v.parse::<i32>().ok())
        .unwrap_or(0)
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
    fn test_missing_fields_default_to_empty() {
        let record = normalise_record(&raw(&[("Name", "Dr. Chen")]));
        assert_eq!(record.name, "Dr. Chen");
        assert_eq!(record.title, "");
        assert_eq!(record.company_hq, "");
        assert_eq!(record.last_paper_year, 0);
    }

    #[test]
    fn test_extra_columns_are_dropped() {
        let record = normalise_record(&raw(&[
            ("Name", "Dr. Chen"),
            ("Apollo ID", "12345"),
        ]));
        assert_eq!(record.name, "Dr. Chen");
        // no panic, extra column simply ignored
    }

    #[test]
    fn test_year_parses_with_whitespace() {
        let record = normalise_record(&raw(&[("Last paper year", " 2023 ")]));
        assert_eq!(record.last_paper_year, 2023);
    }

    #[test]
    fn test_non_numeric_year_becomes_zero() {
        for bad in ["n/a", "2023.0", "", "unknown"] {
            let record = normalise_record(&raw(&[("Last paper year", bad)]));
            assert_eq!(record.last_paper_year, 0, "year {:?} should normalise to 0", bad);
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(normalise_records(&[]).is_empty());
    }
}
