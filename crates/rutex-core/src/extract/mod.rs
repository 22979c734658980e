//! Token distillation and positional field extraction.

pub mod identification;
pub mod patterns;
pub mod resolution;
pub mod rut;
pub mod tokens;

pub use identification::{locate_identification, POST_IDENTIFICATION_SKIP};
pub use resolution::extract_resolution;
pub use rut::extract_rut;
pub use tokens::{distill, Distillation};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ExtractError;
use crate::models::document::{ParsedDocument, ResolutionDocument, RutDocument};

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Which of the two modeled document layouts a token stream belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Tax-registration certificate (RUT).
    Rut,
    /// Billing-authorization resolution.
    Resolution,
}

impl DocumentKind {
    /// Guess the layout from token content: resolutions carry the invoice
    /// label and a date-time token, certificates carry neither.
    pub fn detect(tokens: &[String]) -> Self {
        let looks_like_resolution = tokens
            .iter()
            .any(|t| t == resolution::INVOICE_LABEL || patterns::DATE_TIME_12H.is_match(t));
        if looks_like_resolution {
            DocumentKind::Resolution
        } else {
            DocumentKind::Rut
        }
    }
}

/// Run the whole pipeline on decoded page text: distill, locate the
/// identification block, then extract the fields for the given kind
/// (auto-detected when `None`).
pub fn parse_text(text: &str, kind: Option<DocumentKind>) -> Result<ParsedDocument> {
    let distillation = distill(text);
    let kind = kind.unwrap_or_else(|| DocumentKind::detect(&distillation.tokens));

    info!(
        "Parsing {:?} document from {} tokens",
        kind, distillation.match_count
    );

    let (identification, remainder) = locate_identification(&distillation.tokens)?;

    match kind {
        DocumentKind::Rut => Ok(ParsedDocument::Rut(RutDocument {
            identification,
            party: extract_rut(remainder)?,
        })),
        DocumentKind::Resolution => Ok(ParsedDocument::Resolution(ResolutionDocument {
            identification,
            resolution: extract_resolution(remainder)?,
        })),
    }
}
