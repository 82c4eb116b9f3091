//! CSV export of ranked, filtered leads.

use std::io::Write;
use std::path::Path;
use vitrolead_common::{Result, ScoredLead, SCHEMA_FIELDS};

/// Write leads as CSV: Rank, Score, Probability, the schema columns, and a
/// Hub column when at least one lead carries an inferred hub.
pub fn write_csv<W: Write>(leads: &[ScoredLead], writer: W) -> Result<()> {
    let with_hub = leads.iter().any(|l| l.hub.is_some());
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = vec!["Rank", "Score", "Probability"];
    header.extend(SCHEMA_FIELDS);
    if with_hub {
        header.push("Hub");
    }
    csv_writer.write_record(&header)?;

    for lead in leads {
        let r = &lead.record;
        let mut row: Vec<String> = vec![
            lead.rank.to_string(),
            lead.score.to_string(),
            lead.probability.to_string(),
            r.name.clone(),
            r.title.clone(),
            r.company.clone(),
            r.person_location.clone(),
            r.company_hq.clone(),
            r.email.clone(),
            r.linkedin.clone(),
            r.last_paper_title.clone(),
            r.last_paper_year.to_string(),
            r.conference.clone(),
            r.funding_round.clone(),
            r.nams_signal.clone(),
            r.notes.clone(),
            r.action.clone(),
        ];
        if with_hub {
            row.push(lead.hub.map(|h| h.as_str().to_string()).unwrap_or_default());
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write leads to a CSV file at `path`.
pub fn export_to_path(leads: &[ScoredLead], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(leads, file)
}
