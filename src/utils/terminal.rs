//! Terminal output sanitization
//!
//! History entries are read back from a file anyone can edit, and place names
//! come from a remote geocoder. Both are printed verbatim by the CLI, so they go
//! through [`sanitize_line`] first to drop ANSI escape sequences and control
//! characters that could clear the screen or move the cursor.

/// Strips ANSI CSI sequences and control characters, folding line breaks and
/// tabs into single spaces so the result stays on one line
///
/// # Examples
///
/// ```
/// use isochrone_viewer::utils::terminal::sanitize_line;
///
/// assert_eq!(sanitize_line("\x1b[31mParis\x1b[0m"), "Paris");
/// assert_eq!(sanitize_line("Rue de\nRivoli"), "Rue de Rivoli");
/// ```
pub fn sanitize_line(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI: ESC [ params final-letter
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(&next_ch) = chars.peek() {
                    chars.next();
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if matches!(ch, '\n' | '\r' | '\t') {
            if !result.ends_with(' ') {
                result.push(' ');
            }
            continue;
        }

        if ch.is_control() {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Shortens `text` to at most `max_chars` characters, marking the cut with "..."
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
