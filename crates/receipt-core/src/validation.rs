//! # Validation Module
//!
//! Required-field checks for submitted receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Submission Checks (in order)                       │
//! │                                                                         │
//! │  1. payload present        ──► MissingReceipt                          │
//! │  2. retailer non-blank     ──► InvalidRetailer                         │
//! │  3. purchaseDate present   ──► InvalidPurchaseDate                     │
//! │  4. purchaseTime present   ──► InvalidPurchaseTime                     │
//! │  5. items non-empty array  ──► InvalidItems                            │
//! │  6. total present          ──► InvalidTotal                            │
//! │                                                                         │
//! │  First failure wins. Formats are NOT checked here: a bad date or       │
//! │  time is accepted and simply earns zero from its scoring rule.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Presence
//! A field is present unless it is missing or falsy: `null`, `false`, `0`,
//! `-0` or `""`. Any other value passes, including `true`, `[]` and `{}`.
//! Strings are kept as sent, numbers as their decimal text, and every
//! other present value as empty text, which scores zero.
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::validate_receipt;
//! use receipt_core::ValidationError;
//! use serde_json::json;
//!
//! let payload = json!({ "retailer": "Target" });
//! let err = validate_receipt(Some(&payload)).unwrap_err();
//! assert_eq!(err, ValidationError::InvalidPurchaseDate);
//! ```

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::text::trim_whitespace;
use crate::types::{Item, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a submitted payload and converts it into a [`Receipt`].
///
/// `None` and JSON `null` mean no receipt was sent. A payload that is not
/// a JSON object has no fields, so it fails on the retailer check.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  POST /receipts/process                                                 │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_receipt(body) ← THIS FUNCTION                                │
/// │       │                                                                 │
/// │       ├── Err(kind) → 400 with kind's message, nothing stored          │
/// │       │                                                                 │
/// │       └── Ok(receipt) → stored under a fresh id, unscored              │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_receipt(payload: Option<&Value>) -> ValidationResult<Receipt> {
    let payload = match payload {
        None | Some(Value::Null) => return Err(ValidationError::MissingReceipt),
        Some(value) => value,
    };

    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);

    let retailer = validate_retailer(fields.get("retailer"))?;
    let purchase_date = present_text(fields.get("purchaseDate"))
        .ok_or(ValidationError::InvalidPurchaseDate)?;
    let purchase_time = present_text(fields.get("purchaseTime"))
        .ok_or(ValidationError::InvalidPurchaseTime)?;
    let items = validate_items(fields.get("items"))?;
    let total = present_text(fields.get("total")).ok_or(ValidationError::InvalidTotal)?;

    Ok(Receipt {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the retailer name.
///
/// ## Rules
/// - Must be a string
/// - Must have at least 1 character after trimming
///
/// The untrimmed name is kept; whitespace never scores anyway.
pub fn validate_retailer(value: Option<&Value>) -> ValidationResult<String> {
    match value {
        Some(Value::String(name)) if !trim_whitespace(name).is_empty() => Ok(name.clone()),
        _ => Err(ValidationError::InvalidRetailer),
    }
}

/// Validates the item list and converts each entry leniently.
///
/// ## Rules
/// - Must be an array
/// - Must contain at least one entry
///
/// Entry shape is not checked. See [`item_from_value`].
pub fn validate_items(value: Option<&Value>) -> ValidationResult<Vec<Item>> {
    match value {
        Some(Value::Array(entries)) if !entries.is_empty() => {
            Ok(entries.iter().map(item_from_value).collect())
        }
        _ => Err(ValidationError::InvalidItems),
    }
}

/// Converts one item entry, dropping fields of the wrong type.
///
/// - `shortDescription` is kept when it is a string
/// - `price` is kept when it is a string or a number
/// - anything that is not an object becomes an item with no fields
pub fn item_from_value(value: &Value) -> Item {
    let Some(fields) = value.as_object() else {
        return Item::default();
    };

    let short_description = fields
        .get("shortDescription")
        .and_then(Value::as_str)
        .map(str::to_string);

    let price = match fields.get("price") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    };

    Item {
        short_description,
        price,
    }
}

/// Returns the field as text when it is present.
///
/// See the module docs for what counts as present.
pub fn present_text(value: Option<&Value>) -> Option<String> {
    let value = value?;
    if is_falsy(value) {
        return None;
    }
    Some(value_text(value))
}

/// `null`, `false`, `0`, `-0` and `""`.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Scoring text for a field: strings as sent, numbers as decimal text,
/// anything else empty.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{ "shortDescription": "Item", "price": "5.00" }],
            "total": "5.00"
        })
    }

    fn without(field: &str) -> Value {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove(field);
        payload
    }

    fn with(field: &str, value: Value) -> Value {
        let mut payload = valid_payload();
        payload[field] = value;
        payload
    }

    #[test]
    fn test_valid_receipt() {
        let receipt = validate_receipt(Some(&valid_payload())).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items, vec![Item::new("Item", "5.00")]);
        assert_eq!(receipt.total, "5.00");
    }

    #[test]
    fn test_missing_receipt() {
        assert_eq!(validate_receipt(None), Err(ValidationError::MissingReceipt));
        assert_eq!(
            validate_receipt(Some(&Value::Null)),
            Err(ValidationError::MissingReceipt)
        );
    }

    #[test]
    fn test_each_missing_field_reports_its_own_error() {
        let cases = [
            ("retailer", ValidationError::InvalidRetailer),
            ("purchaseDate", ValidationError::InvalidPurchaseDate),
            ("purchaseTime", ValidationError::InvalidPurchaseTime),
            ("items", ValidationError::InvalidItems),
            ("total", ValidationError::InvalidTotal),
        ];

        for (field, expected) in cases {
            assert_eq!(
                validate_receipt(Some(&without(field))),
                Err(expected),
                "missing {field}"
            );
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let payload = json!({ "purchaseTime": "13:01" });
        assert_eq!(
            validate_receipt(Some(&payload)),
            Err(ValidationError::InvalidRetailer)
        );

        let payload = json!({ "retailer": "Target", "total": "" });
        assert_eq!(
            validate_receipt(Some(&payload)),
            Err(ValidationError::InvalidPurchaseDate)
        );
    }

    #[test]
    fn test_non_object_payload_has_no_fields() {
        assert_eq!(
            validate_receipt(Some(&json!("receipt"))),
            Err(ValidationError::InvalidRetailer)
        );
        assert_eq!(
            validate_receipt(Some(&json!([1, 2, 3]))),
            Err(ValidationError::InvalidRetailer)
        );
    }

    #[test]
    fn test_blank_retailer() {
        for retailer in [json!(""), json!("   "), json!("\t\n"), json!(42), json!(null)] {
            assert_eq!(
                validate_receipt(Some(&with("retailer", retailer.clone()))),
                Err(ValidationError::InvalidRetailer),
                "retailer {retailer}"
            );
        }
    }

    #[test]
    fn test_date_and_time_format_not_checked() {
        let payload = with("purchaseDate", json!("not-a-date"));
        let receipt = validate_receipt(Some(&payload)).unwrap();
        assert_eq!(receipt.purchase_date, "not-a-date");

        let payload = with("purchaseTime", json!("25:99"));
        assert!(validate_receipt(Some(&payload)).is_ok());
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        assert_eq!(
            validate_receipt(Some(&with("purchaseDate", json!("")))),
            Err(ValidationError::InvalidPurchaseDate)
        );
        assert_eq!(
            validate_receipt(Some(&with("purchaseTime", json!("")))),
            Err(ValidationError::InvalidPurchaseTime)
        );
        assert_eq!(
            validate_receipt(Some(&with("total", json!("")))),
            Err(ValidationError::InvalidTotal)
        );
    }

    #[test]
    fn test_numeric_total() {
        let receipt = validate_receipt(Some(&with("total", json!(9.5)))).unwrap();
        assert_eq!(receipt.total, "9.5");

        assert_eq!(
            validate_receipt(Some(&with("total", json!(0)))),
            Err(ValidationError::InvalidTotal)
        );
        assert_eq!(
            validate_receipt(Some(&with("total", json!(-0.0)))),
            Err(ValidationError::InvalidTotal)
        );
    }

    #[test]
    fn test_false_counts_as_absent() {
        assert_eq!(
            validate_receipt(Some(&with("total", json!(false)))),
            Err(ValidationError::InvalidTotal)
        );
        assert_eq!(
            validate_receipt(Some(&with("purchaseTime", json!(null)))),
            Err(ValidationError::InvalidPurchaseTime)
        );
    }

    #[test]
    fn test_truthy_non_text_values_are_accepted() {
        let receipt = validate_receipt(Some(&with("total", json!(true)))).unwrap();
        assert_eq!(receipt.total, "");

        let receipt = validate_receipt(Some(&with("purchaseDate", json!({})))).unwrap();
        assert_eq!(receipt.purchase_date, "");

        let receipt = validate_receipt(Some(&with("purchaseTime", json!([])))).unwrap();
        assert_eq!(receipt.purchase_time, "");

        let receipt = validate_receipt(Some(&with("total", json!([9])))).unwrap();
        assert_eq!(receipt.total, "");
    }

    #[test]
    fn test_byte_order_mark_retailer_is_blank() {
        assert_eq!(
            validate_receipt(Some(&with("retailer", json!("\u{FEFF} ")))),
            Err(ValidationError::InvalidRetailer)
        );
    }

    #[test]
    fn test_non_numeric_total_string_is_accepted() {
        let receipt = validate_receipt(Some(&with("total", json!("abc")))).unwrap();
        assert_eq!(receipt.total, "abc");
    }

    #[test]
    fn test_items_must_be_non_empty_array() {
        for items in [json!([]), json!("items"), json!({ "price": "1.00" }), json!(null)] {
            assert_eq!(
                validate_receipt(Some(&with("items", items.clone()))),
                Err(ValidationError::InvalidItems),
                "items {items}"
            );
        }
    }

    #[test]
    fn test_malformed_items_are_accepted() {
        let items = json!([
            { "price": "3.00" },
            { "shortDescription": 12, "price": 4.5 },
            "loose text",
            null
        ]);
        let receipt = validate_receipt(Some(&with("items", items))).unwrap();

        assert_eq!(receipt.items.len(), 4);
        assert_eq!(receipt.items[0].short_description, None);
        assert_eq!(receipt.items[0].price.as_deref(), Some("3.00"));
        assert_eq!(receipt.items[1].short_description, None);
        assert_eq!(receipt.items[1].price.as_deref(), Some("4.5"));
        assert_eq!(receipt.items[2], Item::default());
        assert_eq!(receipt.items[3], Item::default());
    }
}
