//! Lead source adapters.

pub mod pubmed;
pub mod reporter;
pub mod seed;
pub mod spreadsheet;

use async_trait::async_trait;
use vitrolead_common::RawRecord;

/// Common interface for all lead source adapters. Parameters (query, path,
/// limits) are fixed at construction; `fetch` returns raw rows ready for the
/// normaliser.
#[async_trait]
pub trait LeadSource: Send + Sync {
    /// Short identifier for logging.
    fn name(&self) -> &'static str;

    /// Fetch all rows from this source.
    async fn fetch(&self) -> anyhow::Result<Vec<RawRecord>>;
}
