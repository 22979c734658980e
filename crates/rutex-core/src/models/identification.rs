//! National tax identification number (NIT) with its check digit.

use serde::{Deserialize, Serialize};

/// A tax identification number recovered from the document header.
///
/// The number is wrapped across several digit-only fragments in the source
/// layout; the final fragment is always the verification digit (DV).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationBlock {
    /// Identification number, fragments concatenated in page order.
    pub number: String,

    /// Trailing verification digit.
    pub check_digit: String,
}

impl IdentificationBlock {
    /// Format as the conventional `number-DV` string.
    pub fn formatted(&self) -> String {
        format!("{}-{}", self.number, self.check_digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted() {
        let id = IdentificationBlock {
            number: "900123456".to_string(),
            check_digit: "7".to_string(),
        };
        assert_eq!(id.formatted(), "900123456-7");
    }
}
