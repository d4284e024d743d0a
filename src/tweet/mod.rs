//! Tweet text rendering.
//!
//! This module turns raw tweet text into an HTML fragment: URLs, hashtags and
//! mentions become `rel="nofollow"` links and blank lines become line-break
//! markers.

mod punctuation;
mod render;
mod tokens;

// Re-export public API
pub use punctuation::{BalancedParens, ExcludedChars, TrailingPunctuation};
pub use render::{
    render_tweet_content, render_tweet_content_with, RenderOptions, DEFAULT_LINK_DISPLAY_LENGTH,
    DEFAULT_LINK_THRESHOLD, LINE_BREAK_MARKER,
};
pub use tokens::{tokenize, tokenize_with, Token, Tokens};
