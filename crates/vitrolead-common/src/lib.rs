//! vitrolead-common — Shared schema types, errors, and the capped HTTP client
//! used across all Vitrolead crates.

pub mod error;
pub mod net;
pub mod schema;

// Re-export commonly used types
pub use error::{Result, VitroleadError};
pub use schema::{Hub, LeadRecord, RawRecord, ScoredLead, SCHEMA_FIELDS};
