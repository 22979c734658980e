//! Identification block location.
//!
//! Both document layouts open with the same structure: a long form number,
//! then the taxpayer's identification wrapped across several digit-only
//! fragments, the last of which is the verification digit, then the first
//! labeled section.

use tracing::debug;

use super::patterns::LONG_DIGIT_RUN;
use super::tokens::has_alphabetic;
use super::Result;
use crate::error::ExtractError;
use crate::models::identification::IdentificationBlock;

/// Number of structural filler tokens between the identification block and
/// the first field section. Constant across both document layouts.
pub const POST_IDENTIFICATION_SKIP: usize = 3;

/// Locate the identification block and return it together with the
/// remainder of the token sequence that the field extractors consume.
pub fn locate_identification(tokens: &[String]) -> Result<(IdentificationBlock, &[String])> {
    if tokens.is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    // Forward scan for the long-number anchor.
    let anchor = tokens
        .iter()
        .position(|t| LONG_DIGIT_RUN.is_match(t))
        .ok_or(ExtractError::NoIdentificationAnchor)?;

    // The block runs from after the anchor to the next letter-bearing token.
    let block_start = anchor + 1;
    let block_end = tokens[block_start..]
        .iter()
        .position(|t| has_alphabetic(t))
        .map(|offset| block_start + offset)
        .unwrap_or(tokens.len());

    let block = &tokens[block_start..block_end];
    if block.len() < 2 {
        return Err(ExtractError::MalformedIdentificationBlock { found: block.len() });
    }

    let check_digit = block[block.len() - 1].clone();
    let number: String = block[..block.len() - 1].concat();

    debug!(
        "Identification {}-{} located at tokens {}..{}",
        number, check_digit, block_start, block_end
    );

    // A remainder shorter than the skip means the field sections are gone;
    // the next stage reports the mismatch with its own stage name.
    let remainder_start = block_end + POST_IDENTIFICATION_SKIP;
    let remainder = tokens.get(remainder_start..).unwrap_or(&[]);

    Ok((
        IdentificationBlock {
            number,
            check_digit,
        },
        remainder,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn toks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_block_split_and_remainder_slicing() {
        let tokens = toks(&[
            "9999999999", "1", "2", "9", "ABC", "p", "q", "rest1", "rest2",
        ]);
        let (id, remainder) = locate_identification(&tokens).unwrap();

        assert_eq!(id.number, "12");
        assert_eq!(id.check_digit, "9");
        assert_eq!(remainder, &["rest1".to_string(), "rest2".to_string()][..]);
    }

    #[test]
    fn test_anchor_not_at_start() {
        let tokens = toks(&["Formulario", "14531465063", "900", "123456", "7", "Fecha", "x", "y", "tail"]);
        let (id, remainder) = locate_identification(&tokens).unwrap();

        assert_eq!(id.number, "900123456");
        assert_eq!(id.check_digit, "7");
        assert_eq!(remainder, &["tail".to_string()][..]);
    }

    #[test]
    fn test_no_anchor() {
        let tokens = toks(&["abc", "123", "999999999"]);
        let err = locate_identification(&tokens).unwrap_err();
        assert!(matches!(err, ExtractError::NoIdentificationAnchor));
    }

    #[test]
    fn test_block_too_short() {
        let tokens = toks(&["9999999999", "7", "ABC"]);
        let err = locate_identification(&tokens).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MalformedIdentificationBlock { found: 1 }
        ));
    }

    #[test]
    fn test_empty_sequence() {
        let err = locate_identification(&[]).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyDocument));
    }

    #[test]
    fn test_block_runs_to_end_without_letter_token() {
        let tokens = toks(&["1234567890", "11", "22", "3"]);
        let (id, remainder) = locate_identification(&tokens).unwrap();
        assert_eq!(id.number, "1122");
        assert_eq!(id.check_digit, "3");
        assert!(remainder.is_empty());
    }
}
