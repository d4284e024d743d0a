//! Encoding helpers: JSON and URL query components.

use serde::Serialize;

/// Serializes any value to compact JSON.
///
/// # Returns
///
/// - `Ok(String)`: The JSON text
/// - `Err`: If the value cannot be represented as JSON (e.g. a map with non-string keys)
pub fn marshal_json<T: Serialize + ?Sized>(
    value: &T,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    Ok(serde_json::to_string(value)?)
}

/// Escapes a string for use as a URL query component.
///
/// Spaces become `+` and every other reserved character is percent-encoded,
/// so `a+b` becomes `a%2Bb`.
pub fn query_escape(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}
