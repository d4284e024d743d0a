//! HTML rendering of tokenized tweet text.

use log::debug;

use super::punctuation::{BalancedParens, TrailingPunctuation};
use super::tokens::{tokenize_with, Token};
use crate::sanitize::sanitize_for_logging;

/// Markup emitted once per newline of a blank-line run.
pub const LINE_BREAK_MARKER: &str = r#"<div class="tweet-linebreak">"#;

/// Links longer than this many characters are shown truncated.
pub const DEFAULT_LINK_THRESHOLD: usize = 60;

/// Number of characters of a truncated link shown before the ellipsis.
pub const DEFAULT_LINK_DISPLAY_LENGTH: usize = 50;

const HASHTAG_SEARCH_URL: &str = "https://search.twitter.com/search?q=";
const PROFILE_URL: &str = "https://www.twitter.com/";

/// Settings for [`render_tweet_content_with`].
#[derive(Debug)]
pub struct RenderOptions {
    /// Maximum number of characters a link may have before its visible text
    /// is truncated.
    pub link_threshold: usize,
    /// Visible prefix length of a truncated link.
    pub link_display_length: usize,
    /// Decides which characters at the end of a URL candidate stay outside
    /// the link.
    pub punctuation: Box<dyn TrailingPunctuation>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            link_threshold: DEFAULT_LINK_THRESHOLD,
            link_display_length: DEFAULT_LINK_DISPLAY_LENGTH,
            punctuation: Box::new(BalancedParens),
        }
    }
}

/// Renders raw tweet text as an HTML fragment using the default options.
///
/// URLs, hashtags and mentions are wrapped in `rel="nofollow"` anchors, and
/// each newline of a blank-line run becomes a [`LINE_BREAK_MARKER`]. All other
/// text is passed through unchanged; the input is assumed to be HTML-safe.
///
/// # Example
///
/// ```rust
/// use stemplate::render_tweet_content;
///
/// assert_eq!(
///     render_tweet_content("@brandur"),
///     r#"<a href="https://www.twitter.com/brandur" rel="nofollow">@brandur</a>"#
/// );
/// ```
pub fn render_tweet_content(text: &str) -> String {
    render_tweet_content_with(text, &RenderOptions::default())
}

/// Renders raw tweet text as an HTML fragment.
///
/// Never fails: empty input renders to an empty string.
pub fn render_tweet_content_with(text: &str, options: &RenderOptions) -> String {
    let mut html = String::with_capacity(text.len() * 2);
    let mut links = 0usize;

    for token in tokenize_with(text, &*options.punctuation) {
        match token {
            Token::Text(literal) => html.push_str(literal),
            Token::LineBreaks(run) => {
                // Markers replace newlines only; other whitespace is kept.
                for c in run.chars() {
                    match c {
                        '\n' => html.push_str(LINE_BREAK_MARKER),
                        c => html.push(c),
                    }
                }
            }
            Token::Url(url) => {
                links += 1;
                push_anchor(&mut html, url, &display_url(url, options));
            }
            Token::Hashtag(name) => {
                links += 1;
                let href = format!("{}{}", HASHTAG_SEARCH_URL, urlencoding::encode(name));
                push_anchor(&mut html, &href, &format!("#{}", name));
            }
            Token::Mention(name) => {
                links += 1;
                let href = format!("{}{}", PROFILE_URL, name);
                push_anchor(&mut html, &href, &format!("@{}", name));
            }
        }
    }

    debug!(
        "Rendered tweet with {} links: {}",
        links,
        sanitize_for_logging(text, 80)
    );
    html
}

fn push_anchor(html: &mut String, href: &str, display: &str) {
    html.push_str(r#"<a href=""#);
    html.push_str(href);
    html.push_str(r#"" rel="nofollow">"#);
    html.push_str(display);
    html.push_str("</a>");
}

/// Shortens the visible text of long links. The `href` is never shortened,
/// and the visible text never ends up longer than it.
fn display_url(url: &str, options: &RenderOptions) -> String {
    let length = url.chars().count();
    if length <= options.link_threshold || length <= options.link_display_length {
        return url.to_string();
    }

    let prefix: String = url.chars().take(options.link_display_length).collect();
    format!("{}&hellip;", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tweet::punctuation::ExcludedChars;

    #[test]
    fn test_render_short_link() {
        assert_eq!(
            render_tweet_content("https://example.com"),
            r#"<a href="https://example.com" rel="nofollow">https://example.com</a>"#
        );
    }

    #[test]
    fn test_render_link_with_blank_lines() {
        assert_eq!(
            render_tweet_content("content\n\nhttps://example.com\n\nend"),
            concat!(
                "content",
                r#"<div class="tweet-linebreak"><div class="tweet-linebreak">"#,
                r#"<a href="https://example.com" rel="nofollow">https://example.com</a>"#,
                r#"<div class="tweet-linebreak"><div class="tweet-linebreak">"#,
                "end",
            )
        );
    }

    #[test]
    fn test_render_long_link() {
        assert_eq!(
            render_tweet_content(
                "https://example.com/path/to/more/great/stuff/and/this/is/even/longer/now"
            ),
            concat!(
                r#"<a href="https://example.com/path/to/more/great/stuff/and/this/is/even/longer/now" rel="nofollow">"#,
                "https://example.com/path/to/more/great/stuff/and/t&hellip;</a>",
            )
        );
    }

    #[test]
    fn test_render_link_at_threshold_is_not_truncated() {
        let url = format!("https://example.com/{}", "a".repeat(60 - 20));
        assert_eq!(url.chars().count(), 60);
        assert_eq!(
            render_tweet_content(&url),
            format!(r#"<a href="{0}" rel="nofollow">{0}</a>"#, url)
        );
    }

    #[test]
    fn test_render_link_with_parentheses() {
        assert_eq!(
            render_tweet_content("https://example.com/w/Film_(2005)."),
            r#"<a href="https://example.com/w/Film_(2005)" rel="nofollow">https://example.com/w/Film_(2005)</a>."#
        );
    }

    #[test]
    fn test_render_hashtag() {
        assert_eq!(
            render_tweet_content("#mix11"),
            r#"<a href="https://search.twitter.com/search?q=mix11" rel="nofollow">#mix11</a>"#
        );
    }

    #[test]
    fn test_render_unicode_hashtag_escapes_href() {
        assert_eq!(
            render_tweet_content("#día"),
            r#"<a href="https://search.twitter.com/search?q=d%C3%ADa" rel="nofollow">#día</a>"#
        );
    }

    #[test]
    fn test_render_mention() {
        assert_eq!(
            render_tweet_content("@brandur"),
            r#"<a href="https://www.twitter.com/brandur" rel="nofollow">@brandur</a>"#
        );
    }

    #[test]
    fn test_render_passes_plain_text_through() {
        for text in ["", "   ", "\n", "no tokens here", "one\ntwo", "50% off & more"] {
            assert_eq!(render_tweet_content(text), text);
        }
    }

    #[test]
    fn test_render_output_never_shorter_than_input() {
        let inputs = [
            "a\n  \nb",
            "\n\n\n\n",
            "see https://example.com/path/to/more/great/stuff/and/this/is/even/longer/now.",
            "@a #b https://c.io",
            "a\n\t \r\n \nb",
        ];
        let padded = format!("a\n{}\nb", " ".repeat(100));
        assert!(render_tweet_content(&padded).len() >= padded.len());

        for text in inputs {
            assert!(render_tweet_content(text).len() >= text.len(), "{:?}", text);
        }
    }

    #[test]
    fn test_render_blank_line_keeps_inner_whitespace() {
        assert_eq!(
            render_tweet_content("a\n  \nb"),
            format!("a{0}  {0}b", LINE_BREAK_MARKER)
        );
    }

    #[test]
    fn test_render_display_length_beyond_url_is_not_truncated() {
        let options = RenderOptions {
            link_threshold: 5,
            link_display_length: 100,
            ..RenderOptions::default()
        };
        assert_eq!(
            render_tweet_content_with("https://ex.com", &options),
            r#"<a href="https://ex.com" rel="nofollow">https://ex.com</a>"#
        );
    }

    #[test]
    fn test_render_with_custom_options() {
        let options = RenderOptions {
            link_threshold: 10,
            link_display_length: 8,
            punctuation: Box::new(ExcludedChars::new(".")),
        };
        assert_eq!(
            render_tweet_content_with("https://example.com.", &options),
            r#"<a href="https://example.com" rel="nofollow">https://&hellip;</a>."#
        );
    }
}
