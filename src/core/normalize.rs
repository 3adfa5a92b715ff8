//! Word normalization.
//!
//! Turns a raw whitespace-delimited token into a canonical indexable
//! word, or rejects it outright. The rules are deliberately narrow:
//! after lowercasing and trimming non-letters from both ends, a word
//! may contain only ASCII `a`-`z` and apostrophes. Anything else
//! anywhere in the interior rejects the *whole* token — an interior
//! hyphen does not produce a truncated word, it produces no word.
//!
//! # Example
//!
//! ```
//! use folio::core::normalize::normalize;
//!
//! assert_eq!(normalize("Hello,"), Some("hello".to_string()));
//! assert_eq!(normalize("don't"), Some("don't".to_string()));
//! assert_eq!(normalize("Co-op"), None);
//! assert_eq!(normalize("123"), None);
//! ```

/// Typographic apostrophe, kept alongside ASCII `'`
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Normalize a raw token into a canonical word.
///
/// Returns `None` when the token carries nothing indexable. Rejection
/// is the common case (punctuation runs, numbers, symbols) and is not
/// an error.
///
/// Idempotent: feeding an already-canonical word back in returns it
/// unchanged.
pub fn normalize(raw: &str) -> Option<String> {
    let lowered = raw.to_lowercase();

    // Trim anything that is not a Unicode letter from both ends.
    let trimmed = lowered.trim_matches(|c: char| !c.is_alphabetic());
    if trimmed.is_empty() {
        return None;
    }

    // Interior scan: only a-z and the two apostrophe variants survive.
    // One bad character rejects the entire token, not just the tail.
    for ch in trimmed.chars() {
        if !ch.is_ascii_lowercase() && ch != '\'' && ch != RIGHT_SINGLE_QUOTE {
            return None;
        }
    }

    Some(trimmed.to_string())
}
