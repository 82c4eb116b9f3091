//! Spreadsheet adapter: CSV exports from Apollo/Clay or any tool that keeps
//! the schema headers. Extra columns pass through untouched; the normaliser
//! projects onto the schema later.

use async_trait::async_trait;
use std::io::Read;
use std::path::{Path, PathBuf};
use vitrolead_common::RawRecord;

use super::LeadSource;

pub struct SpreadsheetSource {
    path: PathBuf,
}

impl SpreadsheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LeadSource for SpreadsheetSource {
    fn name(&self) -> &'static str {
        "spreadsheet"
    }

    async fn fetch(&self) -> anyhow::Result<Vec<RawRecord>> {
        read_csv_path(&self.path)
    }
}

/// Read a headered CSV file into raw rows.
pub fn read_csv_path(path: &Path) -> anyhow::Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

/// Read headered CSV from any reader.
pub fn read_csv<R: Read>(reader: R) -> anyhow::Result<Vec<RawRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = RawRecord::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), value.to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}
