//! Tweet Rendering Utility
//!
//! This script reads raw tweet text from stdin and prints the rendered HTML
//! fragment. Link truncation honours TWEET_LINK_THRESHOLD and
//! TWEET_LINK_DISPLAY_LENGTH.

use std::io::{self, Read};

// Re-use the renderer from the main crate
use stemplate::{render_options_from_env, render_tweet_content_with};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    if text.trim().is_empty() {
        eprintln!("❌ Error: no tweet text on stdin");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  echo 'hello @brandur #mix11' | cargo run --bin render_tweet");
        std::process::exit(1);
    }

    let options = render_options_from_env();
    println!("{}", render_tweet_content_with(text.trim_end(), &options));

    Ok(())
}
