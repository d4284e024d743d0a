//! Trailing punctuation policies for URLs found in tweet text.
//!
//! A URL candidate is matched greedily up to the next whitespace, so sentence
//! punctuation that follows a link ends up inside the candidate. A policy
//! decides which trailing characters belong to the link and which are emitted
//! as plain text after it.

use std::fmt;

/// Punctuation that ends a sentence rather than a URL.
const SENTENCE_PUNCTUATION: &str = ".,!?;:'\"";

/// Characters stripped by [`ExcludedChars::default`].
const DEFAULT_EXCLUDED: &str = ")]}>'\".,!?;:";

/// Splits a raw URL candidate into `(link, trailing)`.
///
/// Implementations must return two slices that concatenate back to `raw`.
pub trait TrailingPunctuation: fmt::Debug + Send + Sync {
    fn split<'a>(&self, raw: &'a str) -> (&'a str, &'a str);
}

/// Strips sentence punctuation and any closing bracket that has no matching
/// opener inside the link.
///
/// `https://example.com/w/Film_(2005).` keeps `(2005)` in the link and drops
/// the final period, while `(see https://example.com/a)` drops the `)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BalancedParens;

impl TrailingPunctuation for BalancedParens {
    fn split<'a>(&self, raw: &'a str) -> (&'a str, &'a str) {
        let mut end = raw.len();

        while let Some(ch) = raw[..end].chars().next_back() {
            let strip = if SENTENCE_PUNCTUATION.contains(ch) {
                true
            } else if let Some(open) = opener_for(ch) {
                let core = &raw[..end];
                core.matches(open).count() < core.matches(ch).count()
            } else {
                false
            };

            if !strip {
                break;
            }
            end -= ch.len_utf8();
        }

        raw.split_at(end)
    }
}

fn opener_for(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Strips every trailing character found in a fixed set, without looking at
/// brackets inside the link.
#[derive(Debug, Clone)]
pub struct ExcludedChars {
    chars: String,
}

impl ExcludedChars {
    pub fn new(chars: impl Into<String>) -> Self {
        Self {
            chars: chars.into(),
        }
    }
}

impl Default for ExcludedChars {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED)
    }
}

impl TrailingPunctuation for ExcludedChars {
    fn split<'a>(&self, raw: &'a str) -> (&'a str, &'a str) {
        let core = raw.trim_end_matches(|c: char| self.chars.contains(c));
        raw.split_at(core.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_parens_keeps_matched_group() {
        assert_eq!(
            BalancedParens.split("https://example.com/w/Film_(2005)."),
            ("https://example.com/w/Film_(2005)", ".")
        );
    }

    #[test]
    fn test_balanced_parens_drops_unmatched_closer() {
        assert_eq!(
            BalancedParens.split("https://example.com/a)."),
            ("https://example.com/a", ").")
        );
        assert_eq!(
            BalancedParens.split("https://example.com/a]"),
            ("https://example.com/a", "]")
        );
    }

    #[test]
    fn test_balanced_parens_stacked_punctuation() {
        assert_eq!(
            BalancedParens.split("https://example.com/?!\""),
            ("https://example.com/", "?!\"")
        );
        assert_eq!(
            BalancedParens.split("https://example.com"),
            ("https://example.com", "")
        );
    }

    #[test]
    fn test_excluded_chars_ignores_balance() {
        assert_eq!(
            ExcludedChars::default().split("https://example.com/w/Film_(2005)."),
            ("https://example.com/w/Film_(2005", ").")
        );
        assert_eq!(
            ExcludedChars::new(".").split("https://example.com/a)."),
            ("https://example.com/a)", ".")
        );
    }
}
