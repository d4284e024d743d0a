//! Tokenization of raw tweet text.
//!
//! The tokenizer makes a single left-to-right pass and yields typed spans:
//! literal text, URLs, hashtags, mentions and blank-line breaks. Tokens never
//! nest, so a `#` inside a URL stays part of the URL.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use url::Url;

use super::punctuation::{BalancedParens, TrailingPunctuation};

/// Alternatives are tried in priority order at each position: blank-line runs,
/// URLs, hashtags, then mentions.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<breaks>\r?\n(?:[\s&&[^\n]]*\n)+)|(?P<url>(?i:https?)://\S+)|#(?P<hashtag>[\p{L}\p{M}\p{N}_]+)|@(?P<mention>[A-Za-z0-9_]+)",
    )
    .expect("token regex pattern is valid")
});

/// A typed span of tweet text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text passed through as-is.
    Text(&'a str),
    /// An absolute `http`/`https` URL with trailing punctuation removed.
    Url(&'a str),
    /// A hashtag name, without the leading `#`.
    Hashtag(&'a str),
    /// A username, without the leading `@`.
    Mention(&'a str),
    /// A whitespace run containing at least one blank line, newlines
    /// included.
    LineBreaks(&'a str),
}

/// Iterator over the [`Token`]s of a piece of text.
///
/// Created by [`tokenize`] or [`tokenize_with`].
#[derive(Debug)]
pub struct Tokens<'a> {
    text: &'a str,
    cursor: usize,
    punctuation: &'a dyn TrailingPunctuation,
    pending: Option<(Token<'a>, usize)>,
}

/// Tokenizes `text` with the default [`BalancedParens`] punctuation policy.
pub fn tokenize(text: &str) -> Tokens<'_> {
    tokenize_with(text, &BalancedParens)
}

/// Tokenizes `text`, trimming URLs with the given punctuation policy.
pub fn tokenize_with<'a>(text: &'a str, punctuation: &'a dyn TrailingPunctuation) -> Tokens<'a> {
    Tokens {
        text,
        cursor: 0,
        punctuation,
        pending: None,
    }
}

impl<'a> Tokens<'a> {
    /// Finds the next accepted token at or after the cursor, returning it with
    /// its start and end offsets.
    fn find_token(&self) -> Option<(Token<'a>, usize, usize)> {
        let mut search = self.cursor;

        while search < self.text.len() {
            let caps = TOKEN_RE.captures_at(self.text, search)?;
            let whole = caps.get(0)?;

            if let Some((token, end)) = self.classify(&caps) {
                return Some((token, whole.start(), end));
            }

            // Rejected candidates are skipped whole so nothing inside them is
            // picked up as a smaller token.
            search = whole.end();
        }

        None
    }

    fn classify(&self, caps: &Captures<'a>) -> Option<(Token<'a>, usize)> {
        if let Some(m) = caps.name("breaks") {
            return Some((Token::LineBreaks(m.as_str()), m.end()));
        }

        if let Some(m) = caps.name("url") {
            let (link, _) = self.punctuation.split(m.as_str());
            // `xhttps://...` is one word, not a link.
            if self.follows_word(m.start()) || !is_absolute_url(link) {
                return None;
            }
            return Some((Token::Url(link), m.start() + link.len()));
        }

        if let Some(m) = caps.name("hashtag") {
            let sigil = m.start() - 1;
            // `&#39;` is an entity, and `#2024` alone is not a tag.
            if self.follows_word(sigil)
                || self.text[..sigil].ends_with('&')
                || m.as_str().chars().all(char::is_numeric)
            {
                return None;
            }
            return Some((Token::Hashtag(m.as_str()), m.end()));
        }

        if let Some(m) = caps.name("mention") {
            // Skips e-mail addresses and names running into non-ASCII letters.
            if self.follows_word(m.start() - 1) || self.precedes_word(m.end()) {
                return None;
            }
            return Some((Token::Mention(m.as_str()), m.end()));
        }

        None
    }

    fn follows_word(&self, offset: usize) -> bool {
        self.text[..offset]
            .chars()
            .next_back()
            .is_some_and(is_word_char)
    }

    fn precedes_word(&self, offset: usize) -> bool {
        self.text[offset..].chars().next().is_some_and(is_word_char)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some((token, end)) = self.pending.take() {
            self.cursor = end;
            return Some(token);
        }

        if self.cursor >= self.text.len() {
            return None;
        }

        match self.find_token() {
            Some((token, start, end)) if start > self.cursor => {
                let literal = &self.text[self.cursor..start];
                self.cursor = start;
                self.pending = Some((token, end));
                Some(Token::Text(literal))
            }
            Some((token, _, end)) => {
                self.cursor = end;
                Some(token)
            }
            None => {
                let rest = &self.text[self.cursor..];
                self.cursor = self.text.len();
                Some(Token::Text(rest))
            }
        }
    }
}

fn is_absolute_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tweet::punctuation::ExcludedChars;

    fn collect(text: &str) -> Vec<Token<'_>> {
        tokenize(text).collect()
    }

    #[test]
    fn test_plain_text_is_single_token() {
        assert_eq!(collect("just some words"), vec![Token::Text("just some words")]);
        assert_eq!(collect("line one\nline two"), vec![Token::Text("line one\nline two")]);
    }

    #[test]
    fn test_crlf_blank_line() {
        assert_eq!(
            collect("a\r\n\r\nb"),
            vec![Token::Text("a"), Token::LineBreaks("\r\n\r\n"), Token::Text("b")]
        );
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn test_mixed_tokens_in_order() {
        assert_eq!(
            collect("hi @brandur, see https://example.com/a #mix11!"),
            vec![
                Token::Text("hi "),
                Token::Mention("brandur"),
                Token::Text(", see "),
                Token::Url("https://example.com/a"),
                Token::Text(" "),
                Token::Hashtag("mix11"),
                Token::Text("!"),
            ]
        );
    }

    #[test]
    fn test_blank_lines_count_newlines() {
        assert_eq!(
            collect("a\n\nb\n \t\n\nc"),
            vec![
                Token::Text("a"),
                Token::LineBreaks("\n\n"),
                Token::Text("b"),
                Token::LineBreaks("\n \t\n\n"),
                Token::Text("c"),
            ]
        );
    }

    #[test]
    fn test_url_trailing_punctuation_becomes_text() {
        assert_eq!(
            collect("https://example.com/w/Film_(2005)."),
            vec![Token::Url("https://example.com/w/Film_(2005)"), Token::Text(".")]
        );
        assert_eq!(
            collect("(https://example.com/a)"),
            vec![
                Token::Text("("),
                Token::Url("https://example.com/a"),
                Token::Text(")"),
            ]
        );
    }

    #[test]
    fn test_url_glued_to_word_is_text() {
        assert_eq!(
            collect("xhttps://example.com #tag"),
            vec![
                Token::Text("xhttps://example.com "),
                Token::Hashtag("tag"),
            ]
        );
        assert_eq!(
            collect("(https://example.com)"),
            vec![
                Token::Text("("),
                Token::Url("https://example.com"),
                Token::Text(")"),
            ]
        );
    }

    #[test]
    fn test_hash_inside_url_is_not_a_tag() {
        assert_eq!(
            collect("https://example.com/page#section"),
            vec![Token::Url("https://example.com/page#section")]
        );
    }

    #[test]
    fn test_malformed_url_is_text() {
        assert_eq!(collect("https://#tag"), vec![Token::Text("https://#tag")]);
        assert_eq!(collect("http://"), vec![Token::Text("http://")]);
    }

    #[test]
    fn test_sigils_inside_words_are_text() {
        assert_eq!(collect("me@example.com"), vec![Token::Text("me@example.com")]);
        assert_eq!(collect("it&#39;s"), vec![Token::Text("it&#39;s")]);
        assert_eq!(collect("issue #2024"), vec![Token::Text("issue #2024")]);
        assert_eq!(collect("a # b @"), vec![Token::Text("a # b @")]);
    }

    #[test]
    fn test_custom_punctuation_policy() {
        let policy = ExcludedChars::default();
        let tokens: Vec<_> = tokenize_with("https://example.com/w/Film_(2005).", &policy).collect();
        assert_eq!(
            tokens,
            vec![Token::Url("https://example.com/w/Film_(2005"), Token::Text(").")]
        );
    }

    #[test]
    fn test_unicode_text_around_tokens() {
        assert_eq!(
            collect("héllo #día @über @abcé"),
            vec![
                Token::Text("héllo "),
                Token::Hashtag("día"),
                Token::Text(" @über @abcé"),
            ]
        );
    }
}
