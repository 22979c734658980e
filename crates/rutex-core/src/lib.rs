//! Core library for scraping structured records out of Colombian tax
//! documents (DIAN).
//!
//! This crate provides:
//! - PDF page content-stream extraction (the raw text the distiller consumes)
//! - Token distillation (parenthesized fragments, order-preserved)
//! - Positional field extraction for RUT certificates and billing
//!   authorization resolutions
//! - Serde-ready record models

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;

pub use error::{ExtractError, PdfError, Result, RutexError};
pub use extract::{
    distill, extract_resolution, extract_rut, locate_identification, parse_text, DocumentKind,
};
pub use models::config::RutexConfig;
pub use models::document::{ParsedDocument, ResolutionDocument, RutDocument};
pub use models::identification::IdentificationBlock;
pub use models::party::{PartyRecord, PartyType, TaxLevel};
pub use models::resolution::ResolutionRecord;
pub use pdf::{ContentStreamProvider, PageTextProvider};
