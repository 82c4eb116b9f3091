//! vitrolead-ingestion — Source adapters and serialization glue.
//!
//! Every adapter produces raw key-value rows in the shared schema; the
//! scoring engine neither knows nor cares which adapter a row came from.
//! Adapter failures are the caller's to degrade (empty row set), never the
//! engine's.

pub mod cache;
pub mod export;
pub mod sources;

pub use cache::DefaultFileCache;
pub use sources::LeadSource;
