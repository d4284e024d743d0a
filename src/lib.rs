//! # Stemplate Library
//!
//! Template helper functions that produce HTML fragments for a static site.
//!
//! ## Features
//!
//! - Tweet rendering: URLs, hashtags and mentions become links, blank lines
//!   become line-break markers, and long links are shortened for display
//! - Date humanization (`about 3 hours`) and date formatting
//! - Number formatting: thousands delimiters, rounding, running pace
//! - Retina and lazily loaded `<img>` markup
//! - A named helper registry for template engines
//! - An HTTP preview service
//!
//! ## Configuration
//!
//! - `PORT`: Preview server port (defaults to 3000)
//! - `TWEET_LINK_THRESHOLD`: Links longer than this are truncated (defaults to 60)
//! - `TWEET_LINK_DISPLAY_LENGTH`: Visible prefix of truncated links (defaults to 50)

pub mod config;
pub mod handlers;
pub mod helpers;
pub mod registry;
mod sanitize;
pub mod tweet;

// Re-export commonly used types and functions
pub use config::{get_server_port, render_options_from_env};
pub use registry::{HelperError, HelperRegistry};
pub use tweet::{render_tweet_content, render_tweet_content_with, RenderOptions};
