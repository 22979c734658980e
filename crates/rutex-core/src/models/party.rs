//! Party record extracted from a RUT certificate.

use serde::{Deserialize, Serialize};

/// Kind of taxpayer declared on the certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyType {
    /// Natural person (persona natural o sucesión ilíquida).
    #[serde(rename = "PERSONA_NATURAL")]
    Natural,

    /// Legal entity (persona jurídica).
    #[serde(rename = "PERSONA_JURIDICA")]
    Juridica,

    /// Unrecognized layout: the raw token is kept verbatim.
    #[serde(untagged)]
    Other(String),
}

impl PartyType {
    /// Classify the party-type token by keyword.
    ///
    /// Tokens reach this point already decoded to UTF-8, so the accented
    /// spelling is the expected one; certificates without the accent exist,
    /// so both are accepted.
    pub fn from_token(token: &str) -> Self {
        let lower = token.to_lowercase();
        if lower.contains("natural") {
            PartyType::Natural
        } else if lower.contains("jurídica") || lower.contains("juridica") {
            PartyType::Juridica
        } else {
            PartyType::Other(token.to_string())
        }
    }

    pub fn is_natural_person(&self) -> bool {
        matches!(self, PartyType::Natural)
    }
}

/// Tax regime level, decided by the regime-responsibility code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxLevel {
    /// Régimen común (responsibility code 48, IVA collector).
    #[serde(rename = "COMUN")]
    Comun,

    /// Régimen simplificado (any other code).
    #[serde(rename = "SIMPLIFICADO")]
    Simplificado,
}

impl TaxLevel {
    /// Classify a regime-code line such as `"48 - Impuesto sobre las ventas"`.
    pub fn from_regime_code(line: &str) -> Self {
        if line.contains("48") {
            TaxLevel::Comun
        } else {
            TaxLevel::Simplificado
        }
    }
}

/// Structured fields recovered from a RUT certificate.
///
/// Every field except the party type is genuinely optional in the source
/// documents; `None` means the field was absent, not parsed as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartyRecord {
    /// Declared taxpayer kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_type: Option<PartyType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_surname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_surname: Option<String>,

    /// Company name; absent for natural persons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Department (first-level administrative division).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_level: Option<TaxLevel>,
}

impl PartyRecord {
    /// Full display name, surname-first as printed on the certificate.
    pub fn full_name(&self) -> String {
        [
            &self.first_surname,
            &self.second_surname,
            &self.first_name,
            &self.second_name,
        ]
        .iter()
        .filter_map(|part| part.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_type_natural() {
        let t = PartyType::from_token("Persona natural o sucesión ilíquida");
        assert_eq!(t, PartyType::Natural);
        assert!(t.is_natural_person());
    }

    #[test]
    fn test_party_type_juridica_accented_and_plain() {
        assert_eq!(
            PartyType::from_token("Persona jurídica"),
            PartyType::Juridica
        );
        assert_eq!(
            PartyType::from_token("PERSONA JURIDICA"),
            PartyType::Juridica
        );
    }

    #[test]
    fn test_party_type_fallback_keeps_raw_token() {
        assert_eq!(
            PartyType::from_token("Gran contribuyente"),
            PartyType::Other("Gran contribuyente".to_string())
        );
    }

    #[test]
    fn test_tax_level_from_regime_code() {
        assert_eq!(TaxLevel::from_regime_code("48 - COMUN REGIME"), TaxLevel::Comun);
        assert_eq!(
            TaxLevel::from_regime_code("99 - OTHER"),
            TaxLevel::Simplificado
        );
    }

    #[test]
    fn test_full_name() {
        let record = PartyRecord {
            first_surname: Some("GARCIA".to_string()),
            second_surname: Some("MARQUEZ".to_string()),
            first_name: Some("GABRIEL".to_string()),
            second_name: None,
            ..Default::default()
        };
        assert_eq!(record.full_name(), "GARCIA MARQUEZ GABRIEL");
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&PartyType::Natural).unwrap();
        assert_eq!(json, "\"PERSONA_NATURAL\"");
        let json = serde_json::to_string(&TaxLevel::Simplificado).unwrap();
        assert_eq!(json, "\"SIMPLIFICADO\"");
    }
}
