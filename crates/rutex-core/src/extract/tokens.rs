//! Token distillation from raw page content text.

use tracing::debug;

use super::patterns::PAREN_TOKEN;

/// Result of distilling a raw text blob into content tokens.
#[derive(Debug, Clone, Default)]
pub struct Distillation {
    /// Retained tokens, in document order.
    pub tokens: Vec<String>,
    /// Number of tokens retained after filtering. Diagnostic signal of
    /// extraction confidence.
    pub match_count: usize,
}

/// Extract every parenthesized substring from the decoded page text,
/// dropping empty and single-space matches.
///
/// Zero tokens is not an error here; downstream stages report it.
pub fn distill(raw_text: &str) -> Distillation {
    let tokens: Vec<String> = PAREN_TOKEN
        .captures_iter(raw_text)
        .map(|caps| caps[1].to_string())
        .filter(|m| !m.is_empty() && m != " ")
        .collect();

    let match_count = tokens.len();
    debug!("Distilled {} tokens from {} chars", match_count, raw_text.len());

    Distillation { tokens, match_count }
}

/// Whether a token carries at least one alphabetic character.
///
/// Unicode-aware: accented Spanish labels count as letter-bearing.
pub fn has_alphabetic(token: &str) -> bool {
    token.chars().any(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distill_filters_blank_matches() {
        let result = distill("(A)(B)( )()  (C)");
        assert_eq!(result.tokens, vec!["A", "B", "C"]);
        assert_eq!(result.match_count, 3);
    }

    #[test]
    fn test_distill_preserves_order_and_duplicates() {
        let result = distill("BT (uno) Tj (dos) Tj (uno) Tj ET");
        assert_eq!(result.tokens, vec!["uno", "dos", "uno"]);
    }

    #[test]
    fn test_distill_no_tokens() {
        let result = distill("no parentheses here");
        assert!(result.tokens.is_empty());
        assert_eq!(result.match_count, 0);
    }

    #[test]
    fn test_has_alphabetic() {
        assert!(has_alphabetic("ABC"));
        assert!(has_alphabetic("123a"));
        assert!(has_alphabetic("sucesión"));
        assert!(!has_alphabetic("12345"));
        assert!(!has_alphabetic("- / -"));
    }
}
