//! Product and category records.
//!
//! [`RawProduct`] is the untyped request body exactly as the client sent it;
//! [`Product`] is the canonical record produced by
//! [`crate::normalize::validate_product`] and handed to the store.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Canonical records
// ---------------------------------------------------------------------------

/// A fully validated, sanitized product.
///
/// `id == 0` means the product has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: DbId,
    pub category_id: DbId,
    pub product_name: String,
    pub product_description: String,
    pub product_stock: i32,
    pub product_price: Decimal,
}

impl Product {
    /// Whether this record selects the create path.
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

/// A product category. Read-only from the API's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub category_name: String,
}

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// A single field of a request body before validation.
///
/// Clients send numbers either as JSON numbers or as text, so both are
/// accepted here and coerced to text for the field checks. Anything else
/// (booleans, arrays, objects) is kept so the validator can reject it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl RawValue {
    /// Text form used by the numeric and currency checks.
    pub fn coerce_text(&self) -> Option<Cow<'_, str>> {
        match self {
            RawValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            RawValue::Number(n) => Some(Cow::Owned(number_text(n))),
            RawValue::Other(_) => None,
        }
    }

    /// The value if it arrived as JSON text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Largest integer an f64 represents exactly.
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_991.0;

/// Render a JSON number the way a client would print it: whole-valued
/// floats such as `5.0` lose their fraction, so they read as `"5"`.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_F64_INT => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value.into())
    }
}

/// A product submission as received from the client.
///
/// Every field is optional; a missing `id` means "create".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawProduct {
    pub id: Option<RawValue>,
    pub category_id: Option<RawValue>,
    pub product_name: Option<RawValue>,
    pub product_description: Option<RawValue>,
    pub product_stock: Option<RawValue>,
    pub product_price: Option<RawValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_text_and_numbers() {
        let raw: RawProduct = serde_json::from_value(serde_json::json!({
            "category_id": 1,
            "product_name": "Pen",
            "product_description": "Blue pen",
            "product_stock": "10",
            "product_price": "1.50"
        }))
        .unwrap();

        assert_eq!(raw.id, None);
        assert_eq!(raw.category_id, Some(RawValue::from(1)));
        assert_eq!(raw.product_stock, Some(RawValue::from("10")));
    }

    #[test]
    fn null_field_is_absent() {
        let raw: RawProduct =
            serde_json::from_value(serde_json::json!({ "id": null })).unwrap();
        assert_eq!(raw.id, None);
    }

    #[test]
    fn booleans_are_kept_as_other() {
        let raw: RawProduct =
            serde_json::from_value(serde_json::json!({ "product_stock": true })).unwrap();
        let stock = raw.product_stock.unwrap();
        assert!(matches!(stock, RawValue::Other(_)));
        assert_eq!(stock.coerce_text(), None);
    }

    #[test]
    fn numbers_coerce_to_canonical_text() {
        assert_eq!(RawValue::from(10).coerce_text().as_deref(), Some("10"));
        let decimal = RawValue::Number(serde_json::Number::from_f64(1.5).unwrap());
        assert_eq!(decimal.coerce_text().as_deref(), Some("1.5"));
    }

    #[test]
    fn whole_floats_coerce_without_fraction() {
        let five = RawValue::Number(serde_json::Number::from_f64(5.0).unwrap());
        assert_eq!(five.coerce_text().as_deref(), Some("5"));
        let negative = RawValue::Number(serde_json::Number::from_f64(-2.0).unwrap());
        assert_eq!(negative.coerce_text().as_deref(), Some("-2"));
        let huge = RawValue::Number(serde_json::Number::from_f64(1e300).unwrap());
        assert!(huge.coerce_text().unwrap().contains('e'));
    }

    #[test]
    fn only_text_is_text() {
        assert_eq!(RawValue::from("abc").as_text(), Some("abc"));
        assert_eq!(RawValue::from(3).as_text(), None);
    }
}
