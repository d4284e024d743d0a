//! Configuration module for the stemplate service.
//!
//! This module reads settings from environment variables: the preview server
//! port and the link truncation settings used when rendering tweets.

use log::{debug, warn};
use std::env;

use crate::tweet::{RenderOptions, DEFAULT_LINK_DISPLAY_LENGTH, DEFAULT_LINK_THRESHOLD};

/// Environment variable overriding [`RenderOptions::link_threshold`].
pub const LINK_THRESHOLD_VAR: &str = "TWEET_LINK_THRESHOLD";

/// Environment variable overriding [`RenderOptions::link_display_length`].
pub const LINK_DISPLAY_LENGTH_VAR: &str = "TWEET_LINK_DISPLAY_LENGTH";

/// Builds tweet render options from environment variables.
///
/// # Environment Variables
///
/// - `TWEET_LINK_THRESHOLD`: Links longer than this many characters are truncated (default 60)
/// - `TWEET_LINK_DISPLAY_LENGTH`: Characters of a truncated link shown before the ellipsis (default 50)
///
/// Unset variables use the defaults. Values that are not valid non-negative
/// integers are logged and ignored.
pub fn render_options_from_env() -> RenderOptions {
    let link_threshold = usize_from_env(LINK_THRESHOLD_VAR, DEFAULT_LINK_THRESHOLD);
    let link_display_length = usize_from_env(LINK_DISPLAY_LENGTH_VAR, DEFAULT_LINK_DISPLAY_LENGTH);

    if link_display_length > link_threshold {
        warn!(
            "{} ({}) is larger than {} ({}); truncated links will be longer than untruncated ones",
            LINK_DISPLAY_LENGTH_VAR, link_display_length, LINK_THRESHOLD_VAR, link_threshold
        );
    }

    RenderOptions {
        link_threshold,
        link_display_length,
        ..RenderOptions::default()
    }
}

fn usize_from_env(name: &str, default: usize) -> usize {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => {
                debug!("Using {}={}", name, value);
                value
            }
            Err(e) => {
                warn!(
                    "Ignoring invalid {} value '{}': {}; using default {}",
                    name, raw, e, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

/// Gets the server port from environment variables.
///
/// This function reads the `PORT` environment variable and parses it as a u16.
/// If the environment variable is not set, it defaults to port 3000.
///
/// # Returns
///
/// The port number as a u16.
///
/// # Panics
///
/// This function will panic if the `PORT` environment variable is set to a value
/// that cannot be parsed as a valid port number.
///
/// # Example
///
/// ```rust
/// use stemplate::get_server_port;
///
/// // With no PORT set
/// let port = get_server_port(); // Returns 3000
/// ```
pub fn get_server_port() -> u16 {
    env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a valid number")
}
