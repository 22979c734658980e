//! Parsed-document wrappers pairing the identification block with its record.

use serde::{Deserialize, Serialize};

use super::identification::IdentificationBlock;
use super::party::PartyRecord;
use super::resolution::ResolutionRecord;

/// A parsed RUT certificate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RutDocument {
    pub identification: IdentificationBlock,
    pub party: PartyRecord,
}

/// A parsed billing-authorization resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionDocument {
    pub identification: IdentificationBlock,
    pub resolution: ResolutionRecord,
}

/// Either of the two supported document parses, tagged for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedDocument {
    Rut(RutDocument),
    Resolution(ResolutionDocument),
}

impl ParsedDocument {
    pub fn identification(&self) -> &IdentificationBlock {
        match self {
            ParsedDocument::Rut(doc) => &doc.identification,
            ParsedDocument::Resolution(doc) => &doc.identification,
        }
    }
}
