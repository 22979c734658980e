//! Common regex patterns for the extraction pipeline.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A parenthesized content fragment in a page content stream.
    pub static ref PAREN_TOKEN: Regex = Regex::new(
        r"\(([^)]*)\)"
    ).unwrap();

    /// Identification anchor: a national tax ID is always 10 or more digits.
    pub static ref LONG_DIGIT_RUN: Regex = Regex::new(
        r"^\d{10,}$"
    ).unwrap();

    /// Tax regime code line: digits, a hyphen, then the regime description.
    pub static ref REGIME_CODE: Regex = Regex::new(
        r"^\d+\s*-\s*.*$"
    ).unwrap();

    /// Localized date and 12-hour time, e.g. `2021-03-15 / 02:30:00 PM`.
    pub static ref DATE_TIME_12H: Regex = Regex::new(
        r"(19|20)\d{2}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01]) / (0[1-9]|1[0-2]):([0-5][0-9]):([0-5][0-9]) [AP]M"
    ).unwrap();

    /// Birthdate-shaped trailer after the phone digits: a 4-digit form code
    /// followed by yyyymmdd.
    pub static ref BIRTHDATE_TRAILER: Regex = Regex::new(
        r"\d{4}(19[0-9]{2}|20[0-9]{2})(0[1-9]|1[0-2])(0[1-9]|[12][0-9]|3[01])"
    ).unwrap();

    /// Leading integer, for lenient numeric fields like `"12 Meses"`.
    pub static ref LEADING_INT: Regex = Regex::new(
        r"^\s*(\d+)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_digit_run_is_anchored() {
        assert!(LONG_DIGIT_RUN.is_match("9001234567"));
        assert!(!LONG_DIGIT_RUN.is_match("900123456"));
        assert!(!LONG_DIGIT_RUN.is_match("9001234567x"));
    }

    #[test]
    fn test_date_time_12h() {
        assert!(DATE_TIME_12H.is_match("2021-03-15 / 02:30:00 PM"));
        assert!(!DATE_TIME_12H.is_match("2021-03-15 / 14:30:00 PM"));
        assert!(!DATE_TIME_12H.is_match("2021-13-15 / 02:30:00 PM"));
    }

    #[test]
    fn test_birthdate_trailer_position() {
        let blob = "3105550123532119760315";
        let m = BIRTHDATE_TRAILER.find(blob).unwrap();
        assert_eq!(m.start(), 10);
    }

    #[test]
    fn test_regime_code() {
        assert!(REGIME_CODE.is_match("48 - Impuesto sobre las ventas"));
        assert!(REGIME_CODE.is_match("99-Otro"));
        assert!(!REGIME_CODE.is_match("Impuesto 48"));
    }
}
