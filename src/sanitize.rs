//! Text sanitizing for logs and HTML attributes.

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_chars`: Maximum number of characters before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub(crate) fn sanitize_for_logging(text: &str, max_chars: usize) -> String {
    let mut sanitized = String::with_capacity(text.len().min(max_chars * 4));
    let mut truncated = false;

    for (i, c) in text.chars().enumerate() {
        if i == max_chars {
            truncated = true;
            break;
        }
        sanitized.push(match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        });
    }

    if truncated {
        format!("{}... [truncated, {} total bytes]", sanitized, text.len())
    } else {
        sanitized
    }
}

/// Escapes HTML special characters for use inside a quoted attribute value.
pub(crate) fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_for_logging_replaces_control_chars() {
        assert_eq!(sanitize_for_logging("a\nb\tc\u{7}", 80), "a b c?");
    }

    #[test]
    fn test_sanitize_for_logging_truncates_on_char_boundary() {
        assert_eq!(
            sanitize_for_logging("ééééé", 2),
            "éé... [truncated, 10 total bytes]"
        );
        assert_eq!(sanitize_for_logging("short", 5), "short");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            escape_attr(r#"<"Tom" & 'Jerry'>"#),
            "&lt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&gt;"
        );
    }
}
