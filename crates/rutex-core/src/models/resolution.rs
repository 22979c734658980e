//! Billing-authorization resolution record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Structured fields recovered from a billing-authorization resolution.
///
/// The backward-scan fields (prefix, invoice window, life months) are `None`
/// when the invoice label never appears; the forward-scan fields are
/// mandatory and their absence aborts the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    /// Invoice numbering prefix authorized by the resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// The resolution's own identifying number.
    pub number: i64,

    /// Validity duration in calendar months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_months: Option<i32>,

    /// Start of the authorization window.
    pub start_date: NaiveDateTime,

    /// End of the authorization window: start date plus life months.
    pub end_date: NaiveDateTime,

    /// First authorized invoice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<i32>,

    /// Last authorized invoice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<i32>,
}

impl ResolutionRecord {
    /// Whether the given moment falls inside the authorization window.
    pub fn covers(&self, at: NaiveDateTime) -> bool {
        at >= self.start_date && at <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> ResolutionRecord {
        let start = NaiveDate::from_ymd_opt(2021, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        ResolutionRecord {
            prefix: Some("FE".to_string()),
            number: 18764003688414,
            life_months: Some(12),
            start_date: start,
            end_date: start + chrono::Months::new(12),
            invoice_number: Some(1),
            invoice_limit: Some(5000),
        }
    }

    #[test]
    fn test_covers_window() {
        let r = record();
        let inside = NaiveDate::from_ymd_opt(2021, 9, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let after = NaiveDate::from_ymd_opt(2022, 3, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(r.covers(inside));
        assert!(!r.covers(after));
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let mut r = record();
        r.prefix = None;
        r.invoice_number = None;
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("prefix"));
        assert!(!json.contains("invoice_number"));
        assert!(json.contains("start_date"));
    }
}
