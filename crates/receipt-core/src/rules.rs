//! # Points Rules
//!
//! The rule engine: seven independent rules, each scoring one aspect of a
//! receipt, summed into the receipt's points.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                      Field          Points                        │
//! │  ───────────────────────   ────────────   ──────────────────────────    │
//! │  retailer_name             retailer       1 per [a-zA-Z0-9]             │
//! │  round_dollar_total        total          50 if no cents                │
//! │  quarter_multiple_total    total          25 if multiple of 0.25        │
//! │  item_pairs                items          5 per two items               │
//! │  item_descriptions         items          ceil(price × 0.2) when        │
//! │                                           trimmed len % 3 == 0          │
//! │  odd_purchase_day          purchaseDate   6 if day is odd               │
//! │  afternoon_purchase        purchaseTime   10 if 14:00 < t < 16:00       │
//! │                                                                         │
//! │  Rules never fail. A field that cannot be read scores 0 for its rule.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::rules::{calculate_points, score_receipt};
//! use receipt_core::types::{Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![
//!         Item::new("Mountain Dew 12PK", "6.49"),
//!         Item::new("Emils Cheese Pizza", "12.25"),
//!         Item::new("Knorr Creamy Chicken", "1.26"),
//!         Item::new("Doritos Nacho Cheese", "3.35"),
//!         Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
//!     ],
//!     total: "35.35".to_string(),
//! };
//!
//! assert_eq!(calculate_points(&receipt), 28);
//! assert_eq!(score_receipt(&receipt).item_descriptions, 6);
//! ```

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::amount::Amount;
use crate::text::{text_length, trim_whitespace};
use crate::types::{Item, PointsBreakdown, Receipt};
use crate::{
    AFTERNOON_END_MINUTES, AFTERNOON_POINTS, AFTERNOON_START_MINUTES,
    DESCRIPTION_PRICE_MULTIPLIER, ODD_DAY_POINTS, POINTS_PER_ITEM_PAIR,
    POINTS_PER_RETAILER_CHAR, QUARTER_CENTS, QUARTER_TOTAL_POINTS, ROUND_TOTAL_POINTS,
};

/// `YYYY-MM-DD`, ASCII digits only.
static PURCHASE_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("purchase date pattern is valid")
});

/// `H:MM` or `HH:MM`, 24-hour clock.
static PURCHASE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").expect("purchase time pattern is valid")
});

// =============================================================================
// Rule Engine
// =============================================================================

/// Scores every rule for a receipt.
pub fn score_receipt(receipt: &Receipt) -> PointsBreakdown {
    let total = Amount::parse(&receipt.total);

    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar_total: round_dollar_points(total),
        quarter_multiple_total: quarter_multiple_points(total),
        item_pairs: item_pair_points(&receipt.items),
        item_descriptions: item_description_points(&receipt.items),
        odd_purchase_day: odd_day_points(&receipt.purchase_date),
        afternoon_purchase: afternoon_points(&receipt.purchase_time),
    }
}

/// Total points for a receipt.
///
/// Deterministic: the same receipt always scores the same.
pub fn calculate_points(receipt: &Receipt) -> i64 {
    score_receipt(receipt).total()
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point per ASCII letter or digit in the retailer name.
pub fn retailer_name_points(retailer: &str) -> i64 {
    let count = retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count();
    (count as i64).saturating_mul(POINTS_PER_RETAILER_CHAR)
}

/// 50 points if the total is a whole dollar amount.
pub fn round_dollar_points(total: Amount) -> i64 {
    if total.is_whole() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// 25 points if the total is a multiple of 0.25.
///
/// Stacks with [`round_dollar_points`]: "9.00" earns both.
pub fn quarter_multiple_points(total: Amount) -> i64 {
    if total.is_multiple_of_cents(QUARTER_CENTS) {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

/// 5 points for every two items.
pub fn item_pair_points(items: &[Item]) -> i64 {
    ((items.len() / 2) as i64).saturating_mul(POINTS_PER_ITEM_PAIR)
}

/// Sum of [`item_description_points_for`] over all items.
pub fn item_description_points(items: &[Item]) -> i64 {
    items
        .iter()
        .map(item_description_points_for)
        .fold(0i64, i64::saturating_add)
}

/// `ceil(price * 0.2)` if the trimmed description length is a multiple of 3.
///
/// Length is in UTF-16 code units, see [`crate::text`].
///
/// An empty description (length 0) qualifies. An item without a
/// description scores 0; an unreadable price scores 0.
pub fn item_description_points_for(item: &Item) -> i64 {
    let Some(description) = item.short_description.as_deref() else {
        return 0;
    };

    if text_length(trim_whitespace(description)) % 3 != 0 {
        return 0;
    }

    Amount::parse_opt(item.price.as_deref()).ceil_points(DESCRIPTION_PRICE_MULTIPLIER)
}

/// 6 points if the purchase day of month is odd.
///
/// The date must be exactly `YYYY-MM-DD` and a real calendar day;
/// anything else scores 0.
pub fn odd_day_points(purchase_date: &str) -> i64 {
    if !PURCHASE_DATE.is_match(purchase_date) {
        return 0;
    }

    match NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// 10 points if the purchase time is after 14:00 and before 16:00.
///
/// Both ends are exclusive. Malformed times score 0.
pub fn afternoon_points(purchase_time: &str) -> i64 {
    match minutes_since_midnight(purchase_time) {
        Some(minutes) if minutes > AFTERNOON_START_MINUTES && minutes < AFTERNOON_END_MINUTES => {
            AFTERNOON_POINTS
        }
        _ => 0,
    }
}

/// Parses `H:MM`/`HH:MM` into minutes since midnight.
pub fn minutes_since_midnight(purchase_time: &str) -> Option<u32> {
    let captures = PURCHASE_TIME.captures(purchase_time)?;
    let hours: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = captures.get(2)?.as_str().parse().ok()?;
    Some(hours * 60 + minutes)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(retailer: &str, date: &str, time: &str, items: Vec<Item>, total: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items,
            total: total.to_string(),
        }
    }

    fn target_receipt() -> Receipt {
        receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        )
    }

    fn corner_market_receipt() -> Receipt {
        receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            vec![Item::new("Gatorade", "2.25"); 4],
            "9.00",
        )
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let receipt = target_receipt();
        let breakdown = score_receipt(&receipt);

        assert_eq!(breakdown.retailer_name, 6);
        assert_eq!(breakdown.round_dollar_total, 0);
        assert_eq!(breakdown.quarter_multiple_total, 0);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.item_descriptions, 6);
        assert_eq!(breakdown.odd_purchase_day, 6);
        assert_eq!(breakdown.afternoon_purchase, 0);
        assert_eq!(calculate_points(&receipt), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let receipt = corner_market_receipt();
        let breakdown = score_receipt(&receipt);

        assert_eq!(breakdown.retailer_name, 14);
        assert_eq!(breakdown.round_dollar_total, 50);
        assert_eq!(breakdown.quarter_multiple_total, 25);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.item_descriptions, 0);
        assert_eq!(breakdown.odd_purchase_day, 0);
        assert_eq!(breakdown.afternoon_purchase, 10);
        assert_eq!(calculate_points(&receipt), 109);
    }

    #[test]
    fn test_round_total_beats_one_cent_over() {
        let mut round = target_receipt();
        round.total = "100.00".to_string();
        let mut off = target_receipt();
        off.total = "100.01".to_string();

        let round_breakdown = score_receipt(&round);
        assert!(round_breakdown.round_dollar_total + round_breakdown.quarter_multiple_total >= 75);
        assert!(calculate_points(&off) < calculate_points(&round));
    }

    #[test]
    fn test_retailer_name_points() {
        assert_eq!(retailer_name_points("Target"), 6);
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
        assert_eq!(retailer_name_points("7-Eleven"), 7);
        assert_eq!(retailer_name_points("   "), 0);
        assert_eq!(retailer_name_points("Café"), 3);
    }

    #[test]
    fn test_total_rules_on_garbage() {
        let total = Amount::parse("abc");
        assert_eq!(round_dollar_points(total), 0);
        assert_eq!(quarter_multiple_points(total), 0);
    }

    #[test]
    fn test_total_rules_are_additive() {
        let total = Amount::parse("9.00");
        assert_eq!(round_dollar_points(total) + quarter_multiple_points(total), 75);

        let total = Amount::parse("9.25");
        assert_eq!(round_dollar_points(total), 0);
        assert_eq!(quarter_multiple_points(total), 25);
    }

    #[test]
    fn test_item_pair_points() {
        assert_eq!(item_pair_points(&[]), 0);
        assert_eq!(item_pair_points(&vec![Item::default(); 1]), 0);
        assert_eq!(item_pair_points(&vec![Item::default(); 2]), 5);
        assert_eq!(item_pair_points(&vec![Item::default(); 5]), 10);
        assert_eq!(item_pair_points(&vec![Item::default(); 100]), 250);
    }

    #[test]
    fn test_item_description_points() {
        // "Emils Cheese Pizza" is 18 chars: ceil(12.25 * 0.2) = 3
        assert_eq!(item_description_points_for(&Item::new("Emils Cheese Pizza", "12.25")), 3);
        // Trimmed to 24 chars
        assert_eq!(
            item_description_points_for(&Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")),
            3
        );
        assert_eq!(item_description_points_for(&Item::new("Gatorade", "2.25")), 0);
        assert_eq!(item_description_points_for(&Item::new("ABC", "5.00")), 1);
    }

    #[test]
    fn test_item_description_tolerates_malformed_items() {
        let no_description = Item {
            short_description: None,
            price: Some("10.00".to_string()),
        };
        assert_eq!(item_description_points_for(&no_description), 0);

        let no_price = Item {
            short_description: Some("ABC".to_string()),
            price: None,
        };
        assert_eq!(item_description_points_for(&no_price), 0);

        assert_eq!(item_description_points_for(&Item::new("ABC", "free")), 0);
        assert_eq!(item_description_points_for(&Item::default()), 0);
    }

    #[test]
    fn test_blank_description_has_length_zero() {
        assert_eq!(item_description_points_for(&Item::new("", "10.00")), 2);
        assert_eq!(item_description_points_for(&Item::new("    ", "10.00")), 2);
    }

    #[test]
    fn test_odd_day_points() {
        assert_eq!(odd_day_points("2022-01-01"), 6);
        assert_eq!(odd_day_points("2022-03-20"), 0);
        assert_eq!(odd_day_points("2024-02-29"), 6);
    }

    #[test]
    fn test_odd_day_rejects_bad_dates() {
        assert_eq!(odd_day_points("2023-02-29"), 0);
        assert_eq!(odd_day_points("2022-13-01"), 0);
        assert_eq!(odd_day_points("2022-1-1"), 0);
        assert_eq!(odd_day_points("01/01/2022"), 0);
        assert_eq!(odd_day_points(" 2022-01-01"), 0);
        assert_eq!(odd_day_points("not-a-date"), 0);
        assert_eq!(odd_day_points(""), 0);
    }

    #[test]
    fn test_afternoon_points() {
        assert_eq!(afternoon_points("14:33"), 10);
        assert_eq!(afternoon_points("14:01"), 10);
        assert_eq!(afternoon_points("15:59"), 10);
        assert_eq!(afternoon_points("14:00"), 0);
        assert_eq!(afternoon_points("16:00"), 0);
        assert_eq!(afternoon_points("13:01"), 0);
    }

    #[test]
    fn test_afternoon_rejects_bad_times() {
        assert_eq!(afternoon_points("24:00"), 0);
        assert_eq!(afternoon_points("14:60"), 0);
        assert_eq!(afternoon_points("2:30 PM"), 0);
        assert_eq!(afternoon_points("1430"), 0);
        assert_eq!(afternoon_points(""), 0);
    }

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(minutes_since_midnight("00:00"), Some(0));
        assert_eq!(minutes_since_midnight("9:05"), Some(545));
        assert_eq!(minutes_since_midnight("23:59"), Some(1439));
        assert_eq!(minutes_since_midnight("7"), None);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let receipt = target_receipt();
        assert_eq!(score_receipt(&receipt), score_receipt(&receipt));
    }

    #[test]
    fn test_large_receipt() {
        let items = (0..100)
            .map(|i| Item::new(format!("Item {i}"), "1.00"))
            .collect();
        let receipt = receipt("Mega Store", "2022-01-01", "13:01", items, "100.00");
        assert!(calculate_points(&receipt) > 0);
    }

    #[test]
    fn test_extreme_values() {
        let receipt = receipt(
            &"X".repeat(1000),
            "2022-01-01",
            "13:01",
            vec![Item::new("X".repeat(1000), "999999.99")],
            "999999.99",
        );
        // 1000 retailer chars + odd day; 1000 % 3 != 0, total has cents
        assert_eq!(calculate_points(&receipt), 1006);
    }

    #[test]
    fn test_description_length_counts_utf16_units() {
        // "🍕ab" is 4 UTF-16 units, not 3 characters
        assert_eq!(item_description_points_for(&Item::new("🍕ab", "10.00")), 0);
        assert_eq!(item_description_points_for(&Item::new("🍕a", "10.00")), 2);
    }

    #[test]
    fn test_description_trims_byte_order_mark() {
        assert_eq!(item_description_points_for(&Item::new("\u{FEFF}abc", "10.00")), 2);
        assert_eq!(item_description_points_for(&Item::new("\u{0085}abc", "10.00")), 0);
    }
}
