//! Built-in demo dataset. Deterministic, no file or network needed; useful
//! for trying the pipeline before wiring a real source.

use async_trait::async_trait;
use vitrolead_common::RawRecord;

use super::LeadSource;

pub const SEED_ROW_COUNT: usize = 100;

const NAMES: [&str; 10] = [
    "Asha Patel",
    "Lukas Meier",
    "Maria Gonzalez",
    "Wei Zhang",
    "Emma Clarke",
    "Daniel Osei",
    "Sofia Rossi",
    "James Whitfield",
    "Priya Nair",
    "Tomas Novak",
];

const TITLES: [&str; 8] = [
    "Director of Toxicology",
    "Head of Safety Assessment",
    "VP Preclinical Development",
    "Principal Scientist, Hepatic Models",
    "Senior Scientist",
    "3D Cell Culture Lead",
    "Research Associate",
    "Business Development Manager",
];

const COMPANIES: [&str; 6] = [
    "HepatoBio Therapeutics",
    "OrganoTech Labs",
    "Meridian Pharma",
    "CellAxis Biosciences",
    "NovaLiver Inc",
    "Crestline Analytics",
];

const LOCATIONS: [&str; 7] = [
    "Boston, MA",
    "Cambridge, MA",
    "San Francisco, CA",
    "Basel, Switzerland",
    "Oxford, UK",
    "Austin, TX",
    "Raleigh, NC",
];

const PAPERS: [&str; 6] = [
    "Drug-induced liver injury prediction using 3D spheroids",
    "Organ-on-chip models for hepatotoxicity screening",
    "In vitro NAMs for regulatory safety assessment",
    "Kinetic modelling of hepatocyte cultures",
    "Machine vision for colony counting",
    "",
];

const FUNDING: [&str; 5] = ["Series A", "Series B", "Seed", "Grant", ""];

const NAMS: [&str; 4] = ["yes", "no", "", "y"];

pub struct SeedSource;

#[async_trait]
impl LeadSource for SeedSource {
    fn name(&self) -> &'static str {
        "seed"
    }

    async fn fetch(&self) -> anyhow::Result<Vec<RawRecord>> {
        Ok(seed_rows())
    }
}

/// The demo rows. Co-prime cycle lengths keep the combinations varied.
pub fn seed_rows() -> Vec<RawRecord> {
    (0..SEED_ROW_COUNT)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            let company = COMPANIES[i % COMPANIES.len()];
            let paper = PAPERS[i % PAPERS.len()];
            let year = if paper.is_empty() {
                String::new()
            } else {
                (2020 + (i % 6) as i32).to_string()
            };

            let mut row = RawRecord::new();
            row.insert("Name".into(), format!("{} {}", name, i + 1));
            row.insert("Title".into(), TITLES[i % TITLES.len()].into());
            row.insert("Company".into(), company.into());
            row.insert("Person location".into(), LOCATIONS[i % LOCATIONS.len()].into());
            row.insert("Company HQ".into(), LOCATIONS[(i + 3) % LOCATIONS.len()].into());
            row.insert(
                "Email".into(),
                format!(
                    "{}@{}.example",
                    name.to_lowercase().replace(' ', "."),
                    company.to_lowercase().replace(' ', "-")
                ),
            );
            row.insert("Last paper title".into(), paper.into());
            row.insert("Last paper year".into(), year);
            row.insert("Funding round".into(), FUNDING[i % FUNDING.len()].into());
            row.insert("NAMs signal".into(), NAMS[i % NAMS.len()].into());
            row.insert("Notes".into(), "Seed demo".into());
            row.insert("Action".into(), "Review".into());
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_rows(), seed_rows());
        assert_eq!(seed_rows().len(), SEED_ROW_COUNT);
    }

    #[test]
    fn test_seed_rows_have_names() {
        for row in seed_rows() {
            assert!(!row["Name"].is_empty());
        }
    }
}
