//! Positional field extraction for RUT certificates.
//!
//! The certificate has no delimiters between logical fields; boundaries are
//! recovered by counting letter-bearing tokens, matching literal anchors and
//! applying fixed offsets that encode the two known layout templates. Each
//! stage consumes a prefix of the token sequence and hands the rest to the
//! next stage.

use tracing::debug;

use super::patterns::{BIRTHDATE_TRAILER, REGIME_CODE};
use super::tokens::has_alphabetic;
use super::Result;
use crate::error::ExtractError;
use crate::models::party::{PartyRecord, PartyType, TaxLevel};

/// The name quartet begins at the 6th letter-bearing token of the remainder;
/// the two letter tokens right before it are section labels, not fields.
const NAME_CURSOR_LETTER_COUNT: usize = 6;

/// Offset from the name cursor to the country-or-company token.
const COMPANY_OFFSET: usize = 4;

/// Tokens between the name cursor and the location section when the
/// country token is domestic (natural person, no company name).
const NATURAL_PERSON_SKIP: usize = 8;

/// Same skip when a company name occupies the country slot's position.
const COMPANY_SKIP: usize = 9;

/// Location-section offsets; the labels between them are skipped implicitly.
const DEPT_OFFSET: usize = 0;
const CITY_OFFSET: usize = 3;
const ADDRESS_OFFSET: usize = 7;
const EMAIL_OFFSET: usize = 8;

/// Tokens between the email field and the layout-version marker.
const ZIP_BLOCK_SKIP: usize = 9;

/// Extra tokens present when the layout has no zip-code field.
const NO_ZIP_EXTRA_SKIP: usize = 6;

/// Colombian mobile numbers start with a prefix in this range.
const MOBILE_PREFIX_MIN: u32 = 300;
const MOBILE_PREFIX_MAX: u32 = 324;

/// Country literal marking a natural person with no company name.
fn is_domestic_country(token: &str) -> bool {
    token == "COLOMBIA"
}

/// Layout-version discriminator: `"3"` means the zip-code field is present.
fn is_zip_layout_marker(token: &str) -> bool {
    token == "3"
}

fn need(stage: &'static str, tokens: &[String], needed: usize) -> Result<()> {
    if tokens.len() < needed {
        return Err(ExtractError::StructuralMismatch {
            stage,
            needed,
            available: tokens.len(),
        });
    }
    Ok(())
}

/// Extract the party record from the tokens following the identification
/// block.
pub fn extract_rut(remainder: &[String]) -> Result<PartyRecord> {
    let party_type = read_party_type(remainder)?;
    let (names, rest) = seek_name_block(remainder)?;
    let (company_name, rest) = read_company_name(rest)?;
    let (location, rest) = read_location_block(rest)?;
    let (tax_level, phone_tokens) = read_tax_level(rest);
    let (phone1, phone2) = read_phones(phone_tokens);

    debug!(
        "Extracted party {:?} ({} phones)",
        party_type,
        phone1.iter().chain(phone2.iter()).count()
    );

    Ok(PartyRecord {
        party_type: Some(party_type),
        first_name: Some(names.first_name),
        second_name: Some(names.second_name),
        first_surname: Some(names.first_surname),
        second_surname: Some(names.second_surname),
        company_name,
        dept: Some(location.dept),
        city: Some(location.city),
        address: Some(location.address),
        email: Some(location.email),
        phone1,
        phone2,
        tax_level,
    })
}

/// Classify the first remainder token. The token is not consumed; the name
/// scan counts it too.
fn read_party_type(tokens: &[String]) -> Result<PartyType> {
    need("party type", tokens, 1)?;
    Ok(PartyType::from_token(&tokens[0]))
}

struct NameQuartet {
    first_surname: String,
    second_surname: String,
    first_name: String,
    second_name: String,
}

/// Advance to the 6th letter-bearing token and read the four name fields.
///
/// Returns the rest of the sequence starting at the cursor: the later stages
/// address their fields relative to the same cursor, not past the names.
fn seek_name_block(tokens: &[String]) -> Result<(NameQuartet, &[String])> {
    let mut counter = 0;
    let mut cursor = None;

    for (i, token) in tokens.iter().enumerate() {
        if has_alphabetic(token) {
            counter += 1;
            if counter == NAME_CURSOR_LETTER_COUNT {
                cursor = Some(i);
                break;
            }
        }
    }

    let cursor = cursor.ok_or(ExtractError::StructuralMismatch {
        stage: "name cursor scan",
        needed: NAME_CURSOR_LETTER_COUNT,
        available: counter,
    })?;

    let rest = &tokens[cursor..];
    need("name quartet", rest, 4)?;

    let names = NameQuartet {
        first_surname: rest[0].clone(),
        second_surname: rest[1].clone(),
        first_name: rest[2].clone(),
        second_name: rest[3].clone(),
    };

    Ok((names, rest))
}

/// Read the optional company name and skip to the location section.
///
/// This branch is the only place company-name presence is decided: a
/// domestic country literal in the slot means a natural person.
fn read_company_name(tokens: &[String]) -> Result<(Option<String>, &[String])> {
    need("company name", tokens, COMPANY_OFFSET + 1)?;

    let (company, skip) = if is_domestic_country(&tokens[COMPANY_OFFSET]) {
        (None, NATURAL_PERSON_SKIP)
    } else {
        (Some(tokens[COMPANY_OFFSET].clone()), COMPANY_SKIP)
    };

    need("post-company skip", tokens, skip)?;
    Ok((company, &tokens[skip..]))
}

struct LocationBlock {
    dept: String,
    city: String,
    address: String,
    email: String,
}

/// Read department/city/address/email at fixed offsets, then discard the
/// zip block, branching on the layout-version marker.
fn read_location_block(tokens: &[String]) -> Result<(LocationBlock, &[String])> {
    need("location block", tokens, EMAIL_OFFSET + 1)?;

    let location = LocationBlock {
        dept: tokens[DEPT_OFFSET].clone(),
        city: tokens[CITY_OFFSET].clone(),
        address: tokens[ADDRESS_OFFSET].clone(),
        email: tokens[EMAIL_OFFSET].clone(),
    };

    let rest = &tokens[ZIP_BLOCK_SKIP..];
    need("zip layout marker", rest, 1)?;

    let rest = if is_zip_layout_marker(&rest[0]) {
        rest
    } else {
        need("zip-less layout skip", rest, NO_ZIP_EXTRA_SKIP)?;
        &rest[NO_ZIP_EXTRA_SKIP..]
    };

    Ok((location, rest))
}

/// Scan forward for the regime-code anchor. Tokens strictly before it hold
/// the phone digits; a missing anchor leaves both the level and the phones
/// absent.
fn read_tax_level(tokens: &[String]) -> (Option<TaxLevel>, &[String]) {
    match tokens.iter().position(|t| REGIME_CODE.is_match(t)) {
        Some(i) => (Some(TaxLevel::from_regime_code(&tokens[i])), &tokens[..i]),
        None => (None, &[]),
    }
}

/// Join the phone tokens, drop the birthdate-shaped trailer and classify
/// the remaining digit string by length.
fn read_phones(tokens: &[String]) -> (Option<String>, Option<String>) {
    let blob = tokens.concat();
    let digits = match BIRTHDATE_TRAILER.find(&blob) {
        Some(m) => &blob[..m.start()],
        None => blob.as_str(),
    };
    split_phones(digits)
}

fn split_phones(digits: &str) -> (Option<String>, Option<String>) {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return (None, None);
    }

    let at = |i: usize| (Some(digits[..i].to_string()), Some(digits[i..].to_string()));

    match digits.len() {
        7 | 10 => (Some(digits.to_string()), None),
        20 => at(10),
        14 => at(7),
        17 => {
            // One 10-digit mobile plus one 7-digit landline, order unknown.
            // A mobile prefix up front and no mobile lead-in at position 10
            // means the mobile comes first.
            let prefix: u32 = digits[..3].parse().unwrap_or(0);
            let mobile_first = (MOBILE_PREFIX_MIN..=MOBILE_PREFIX_MAX).contains(&prefix)
                && digits.as_bytes()[10] != b'3';
            if mobile_first { at(10) } else { at(7) }
        }
        _ => (None, None),
    }
}
