//! # Amount Module
//!
//! Lenient parsing of the decimal text found in receipt totals and prices.
//!
//! ## Why Not `str::parse::<f64>`?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LENIENT PREFIX PARSING                                                 │
//! │                                                                         │
//! │  Receipts arrive from many clients. Amount text is scored, never        │
//! │  rejected, so the parser reads the longest numeric prefix:              │
//! │                                                                         │
//! │    "35.35"      →  35.35                                                │
//! │    "  12.00"    →  12.0      (leading whitespace skipped)               │
//! │    "12.00 USD"  →  12.0      (trailing garbage ignored)                 │
//! │    ".5"         →  0.5                                                  │
//! │    "abc", ""    →  NaN       (every comparison on NaN is false)         │
//! │                                                                         │
//! │  `str::parse` would reject the middle cases outright.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::amount::Amount;
//!
//! let total = Amount::parse("9.00");
//! assert!(total.is_whole());
//! assert!(total.is_multiple_of_cents(25));
//!
//! let bogus = Amount::parse("n/a");
//! assert!(bogus.is_nan());
//! assert!(!bogus.is_whole());
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest numeric prefix accepted by [`parse_amount`].
static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

/// Parses the longest numeric prefix of `text`, or NaN if there is none.
pub fn parse_amount(text: &str) -> f64 {
    let text = text.trim_start();

    let Some(prefix) = NUMERIC_PREFIX.find(text) else {
        return f64::NAN;
    };
    let prefix = prefix.as_str();

    if prefix.ends_with("Infinity") {
        return if prefix.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    prefix.parse().unwrap_or(f64::NAN)
}

/// Rounds to the nearest integer, halves toward positive infinity.
///
/// `f64::round` sends -2.5 to -3; receipts expect -2.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// =============================================================================
// Amount Type
// =============================================================================

/// A leniently parsed decimal amount.
///
/// ## Design Decisions
/// - **f64, not integer cents**: the scoring rules are defined on the
///   parsed float (`ceil(price * 0.2)`), so integer cents would change
///   results at the edges.
/// - **NaN is a valid state**: unreadable text is carried through and every
///   predicate on it answers `false`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Parses amount text leniently. See [`parse_amount`].
    pub fn parse(text: &str) -> Self {
        Amount(parse_amount(text))
    }

    /// Parses optional amount text; `None` becomes NaN.
    pub fn parse_opt(text: Option<&str>) -> Self {
        text.map(Amount::parse).unwrap_or(Amount(f64::NAN))
    }

    /// Wraps a raw value.
    #[inline]
    pub const fn from_f64(value: f64) -> Self {
        Amount(value)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// True when the text could not be read as a number.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// True when the value has no fractional part.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::amount::Amount;
    ///
    /// assert!(Amount::parse("100.00").is_whole());
    /// assert!(!Amount::parse("100.01").is_whole());
    /// ```
    pub fn is_whole(&self) -> bool {
        self.0 == self.0.floor()
    }

    /// Value in cents, rounded half-up. NaN and infinities pass through.
    pub fn rounded_cents(&self) -> f64 {
        round_half_up(self.0 * 100.0)
    }

    /// True when the rounded cent value is a multiple of `cents`.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::amount::Amount;
    ///
    /// assert!(Amount::parse("9.75").is_multiple_of_cents(25));
    /// assert!(!Amount::parse("9.80").is_multiple_of_cents(25));
    /// ```
    pub fn is_multiple_of_cents(&self, cents: i64) -> bool {
        if cents == 0 {
            return false;
        }
        self.rounded_cents() % cents as f64 == 0.0
    }

    /// Scales the amount and rounds up to whole points.
    ///
    /// Non-finite results score zero.
    pub fn ceil_points(&self, multiplier: f64) -> i64 {
        let scaled = (self.0 * multiplier).ceil();
        if scaled.is_finite() {
            scaled as i64
        } else {
            0
        }
    }
}

/// Debug-friendly rendering. Finite values show as dollars.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() {
            let sign = if self.0 < 0.0 { "-" } else { "" };
            write!(f, "{}${:.2}", sign, self.0.abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
