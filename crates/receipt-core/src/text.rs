//! # Text Measurement
//!
//! Trimming and length as receipt clients measure them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "  🍕ab  "  ── trim_whitespace ──►  "🍕ab"  ── text_length ──►  4       │
//! │                                                                         │
//! │  Length is counted in UTF-16 code units: a character outside the       │
//! │  Basic Multilingual Plane (emoji, many CJK extensions) counts as 2.    │
//! │                                                                         │
//! │  Whitespace is the ECMAScript set: Unicode White_Space plus U+FEFF     │
//! │  (byte order mark), minus U+0085 (next line).                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Byte order mark; trimmed even though Unicode does not class it as space.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Next line; Unicode whitespace that is left in place.
const NEXT_LINE: char = '\u{0085}';

/// True for characters removed by [`trim_whitespace`].
pub fn is_trimmable(c: char) -> bool {
    c == BYTE_ORDER_MARK || (c.is_whitespace() && c != NEXT_LINE)
}

/// Strips leading and trailing whitespace.
pub fn trim_whitespace(text: &str) -> &str {
    text.trim_matches(is_trimmable)
}

/// Length in UTF-16 code units.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}
