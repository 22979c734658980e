//! Data models for extracted document records.

pub mod config;
pub mod document;
pub mod identification;
pub mod party;
pub mod resolution;

pub use config::RutexConfig;
pub use document::{ParsedDocument, ResolutionDocument, RutDocument};
pub use identification::IdentificationBlock;
pub use party::{PartyRecord, PartyType, TaxLevel};
pub use resolution::ResolutionRecord;
