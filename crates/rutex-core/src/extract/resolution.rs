//! Positional field extraction for billing-authorization resolutions.
//!
//! Two independent scans over the remainder: a forward scan anchored on the
//! date-and-time token (start date, resolution number) and a backward scan
//! anchored on the invoice label literal (prefix, invoice window, life
//! months). The end date derives from calendar-month addition.

use chrono::{Months, NaiveDateTime};
use tracing::debug;

use super::patterns::{DATE_TIME_12H, LEADING_INT};
use super::Result;
use crate::error::ExtractError;
use crate::models::resolution::ResolutionRecord;

/// Literal section label the backward scan anchors on.
pub const INVOICE_LABEL: &str = "FACTURA ELECTRÓNICA DE VENTA";

/// Offsets relative to the invoice label.
const PREFIX_OFFSET: usize = 2;
const INVOICE_NUMBER_OFFSET: usize = 3;
const INVOICE_LIMIT_OFFSET: usize = 4;
const LIFE_MONTHS_OFFSET: usize = 7;

/// chrono format for the `2021-03-15 / 02:30:00 PM` date-time tokens.
const START_DATE_FORMAT: &str = "%Y-%m-%d / %I:%M:%S %p";

fn is_invoice_label(token: &str) -> bool {
    token == INVOICE_LABEL
}

/// Extract the resolution record from the tokens following the
/// identification block.
pub fn extract_resolution(remainder: &[String]) -> Result<ResolutionRecord> {
    let (start_date, number) = forward_scan(remainder)?;
    let backward = backward_scan(remainder);

    let end_date = match backward.life_months {
        Some(months) if months > 0 => start_date
            .checked_add_months(Months::new(months as u32))
            .unwrap_or(start_date),
        _ => start_date,
    };

    debug!(
        "Extracted resolution {} valid {} -> {}",
        number, start_date, end_date
    );

    Ok(ResolutionRecord {
        prefix: backward.prefix,
        number,
        life_months: backward.life_months,
        start_date,
        end_date,
        invoice_number: backward.invoice_number,
        invoice_limit: backward.invoice_limit,
    })
}

/// Find the date-time anchor and parse it plus the following resolution
/// number. Both are mandatory; failure aborts the parse.
fn forward_scan(tokens: &[String]) -> Result<(NaiveDateTime, i64)> {
    let anchor = tokens
        .iter()
        .position(|t| DATE_TIME_12H.is_match(t))
        .ok_or(ExtractError::StructuralMismatch {
            stage: "start date anchor",
            needed: 1,
            available: 0,
        })?;

    // The token may carry surrounding text; parse only the matched span.
    let date_str = DATE_TIME_12H
        .find(&tokens[anchor])
        .map(|m| m.as_str())
        .unwrap_or(&tokens[anchor]);
    let start_date = NaiveDateTime::parse_from_str(date_str, START_DATE_FORMAT).map_err(|_| {
        ExtractError::DateParse {
            value: tokens[anchor].clone(),
        }
    })?;

    let number_token =
        tokens
            .get(anchor + 1)
            .ok_or(ExtractError::StructuralMismatch {
                stage: "resolution number",
                needed: anchor + 2,
                available: tokens.len(),
            })?;
    let number: i64 = number_token
        .parse()
        .map_err(|_| ExtractError::NumberParse {
            field: "resolution number",
            value: number_token.clone(),
        })?;

    Ok((start_date, number))
}

#[derive(Default)]
struct BackwardFields {
    prefix: Option<String>,
    invoice_number: Option<i32>,
    invoice_limit: Option<i32>,
    life_months: Option<i32>,
}

/// Find the last invoice-label occurrence and read its relative fields.
/// Every miss here is non-fatal; the fields stay absent.
fn backward_scan(tokens: &[String]) -> BackwardFields {
    let Some(label) = tokens.iter().rposition(|t| is_invoice_label(t)) else {
        debug!("Invoice label not found; backward-scan fields left empty");
        return BackwardFields::default();
    };

    BackwardFields {
        prefix: tokens.get(label + PREFIX_OFFSET).cloned(),
        invoice_number: tokens
            .get(label + INVOICE_NUMBER_OFFSET)
            .and_then(|t| t.parse().ok()),
        invoice_limit: tokens
            .get(label + INVOICE_LIMIT_OFFSET)
            .and_then(|t| t.parse().ok()),
        life_months: tokens
            .get(label + LIFE_MONTHS_OFFSET)
            .and_then(|t| leading_int(t)),
    }
}

/// Lenient numeric parse: accept a leading integer and ignore the rest,
/// so `"12 Meses"` reads as 12.
fn leading_int(token: &str) -> Option<i32> {
    LEADING_INT
        .captures(token)
        .and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn toks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn synthetic_remainder() -> Vec<String> {
        toks(&[
            "Resolución de facturación",
            "2021-03-15 / 02:30:00 PM",
            "18764003688414",
            "Vigencia",
            "FACTURA ELECTRÓNICA DE VENTA",
            "Prefijo",
            "FE",
            "1",
            "5000",
            "Desde",
            "Hasta",
            "12 Meses",
        ])
    }

    #[test]
    fn test_extract_full_record() {
        let record = extract_resolution(&synthetic_remainder()).unwrap();

        assert_eq!(record.number, 18764003688414);
        assert_eq!(record.prefix, Some("FE".to_string()));
        assert_eq!(record.invoice_number, Some(1));
        assert_eq!(record.invoice_limit, Some(5000));
        assert_eq!(record.life_months, Some(12));
        assert_eq!(record.start_date, dt(2021, 3, 15, 14, 30));
        assert_eq!(record.end_date, dt(2022, 3, 15, 14, 30));
    }

    #[test]
    fn test_missing_invoice_label_degrades() {
        let tokens = toks(&["2021-03-15 / 02:30:00 PM", "42"]);
        let record = extract_resolution(&tokens).unwrap();

        assert_eq!(record.number, 42);
        assert_eq!(record.prefix, None);
        assert_eq!(record.invoice_number, None);
        assert_eq!(record.invoice_limit, None);
        assert_eq!(record.life_months, None);
        assert_eq!(record.end_date, record.start_date);
    }

    #[test]
    fn test_missing_date_anchor_is_fatal() {
        let tokens = toks(&["no", "date", "here"]);
        let err = extract_resolution(&tokens).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::StructuralMismatch { stage: "start date anchor", .. }
        ));
    }

    #[test]
    fn test_unparseable_number_is_fatal() {
        let tokens = toks(&["2021-03-15 / 02:30:00 PM", "not-a-number"]);
        let err = extract_resolution(&tokens).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::NumberParse { field: "resolution number", .. }
        ));
    }

    #[test]
    fn test_end_date_month_clamping() {
        // Jan 31 + 1 month clamps to Feb 28.
        let tokens = toks(&[
            "2021-01-31 / 11:59:59 PM",
            "7",
            "FACTURA ELECTRÓNICA DE VENTA",
            "x",
            "P",
            "1",
            "2",
            "a",
            "b",
            "1",
        ]);
        let record = extract_resolution(&tokens).unwrap();
        assert_eq!(record.life_months, Some(1));
        let expected = NaiveDate::from_ymd_opt(2021, 2, 28)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(record.end_date, expected);
    }

    #[test]
    fn test_leading_int_is_lenient() {
        assert_eq!(leading_int("12 Meses"), Some(12));
        assert_eq!(leading_int("  6"), Some(6));
        assert_eq!(leading_int("Meses 12"), None);
    }
}
