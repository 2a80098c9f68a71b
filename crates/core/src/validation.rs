//! Field checks for product submissions.
//!
//! The predicates here never mutate input and never fail loudly: every
//! problem is collected into a [`ValidationErrors`] keyed by the wire field
//! name, so callers decide what "invalid" means downstream.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

use crate::normalize::MAX_PRICE;
use crate::product::{RawProduct, RawValue};
use crate::types::DbId;

/* --------------------------------------------------------------------------
Patterns
-------------------------------------------------------------------------- */

/// Digits only: no sign, no decimal point, no whitespace.
static UNSIGNED_INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

/// Currency amount without symbols or sign.
///
/// Whole part is `0`, plain digits, or comma-grouped thousands; the optional
/// fraction has exactly two digits. Either part may be omitted, so the
/// "contains a digit" check in [`is_currency`] rejects the empty match.
static CURRENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*|[1-9][0-9]{0,2}(,[0-9]{3})*)?(\.[0-9]{2})?$")
        .expect("valid regex")
});

/// Wire names of the product fields, used as error keys.
pub const FIELD_ID: &str = "id";
pub const FIELD_CATEGORY_ID: &str = "category_id";
pub const FIELD_NAME: &str = "product_name";
pub const FIELD_DESCRIPTION: &str = "product_description";
pub const FIELD_STOCK: &str = "product_stock";
pub const FIELD_PRICE: &str = "product_price";

/* --------------------------------------------------------------------------
Predicates
-------------------------------------------------------------------------- */

/// `true` if `value` is a non-negative integer written with digits only.
pub fn is_unsigned_integer(value: &str) -> bool {
    UNSIGNED_INT_RE.is_match(value)
}

/// `true` if `value` is a non-negative currency amount without symbols.
pub fn is_currency(value: &str) -> bool {
    value.bytes().any(|b| b.is_ascii_digit()) && CURRENCY_RE.is_match(value)
}

/// `true` if `value` is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate an identifier taken from a path segment.
///
/// Returns `None` for anything that is not a plain non-negative integer
/// (`"-1"`, `"abc"`, `"1.0"`, `""`) or that overflows [`DbId`].
pub fn validate_id(value: &str) -> Option<DbId> {
    if !is_unsigned_integer(value) {
        return None;
    }
    value.parse().ok()
}

/* --------------------------------------------------------------------------
Product check
-------------------------------------------------------------------------- */

/// Field values of a submission that passed every check, already parsed.
///
/// Text fields are still raw here; escaping happens in
/// [`crate::normalize::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedProduct<'a> {
    pub id: DbId,
    pub category_id: DbId,
    pub product_name: &'a str,
    pub product_description: &'a str,
    pub product_stock: i32,
    pub product_price: Decimal,
}

/// Run every field check on `raw`.
///
/// All fields are checked even after the first failure so the returned
/// errors describe the whole submission.
pub fn check_product(raw: &RawProduct) -> Result<CheckedProduct<'_>, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let id = match &raw.id {
        None => Some(0),
        Some(value) => record(&mut errors, FIELD_ID, unsigned::<DbId>(value)),
    };
    let category_id = record(
        &mut errors,
        FIELD_CATEGORY_ID,
        required(&raw.category_id).and_then(unsigned::<DbId>).and_then(|id| {
            if id > 0 {
                Ok(id)
            } else {
                Err("not_positive")
            }
        }),
    );
    let product_name = record(
        &mut errors,
        FIELD_NAME,
        required(&raw.product_name).and_then(non_blank_text),
    );
    let product_description = record(
        &mut errors,
        FIELD_DESCRIPTION,
        required(&raw.product_description).and_then(non_blank_text),
    );
    let product_stock = record(
        &mut errors,
        FIELD_STOCK,
        required(&raw.product_stock).and_then(unsigned::<i32>),
    );
    let product_price = record(
        &mut errors,
        FIELD_PRICE,
        required(&raw.product_price).and_then(currency),
    );

    match (
        id,
        category_id,
        product_name,
        product_description,
        product_stock,
        product_price,
    ) {
        (
            Some(id),
            Some(category_id),
            Some(product_name),
            Some(product_description),
            Some(product_stock),
            Some(product_price),
        ) => Ok(CheckedProduct {
            id,
            category_id,
            product_name,
            product_description,
            product_stock,
            product_price,
        }),
        _ => Err(errors),
    }
}

/// Store a failed check under `field` and turn the result into an `Option`.
fn record<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    result: Result<T, &'static str>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(code) => {
            errors.add(field, ValidationError::new(code));
            None
        }
    }
}

fn required(value: &Option<RawValue>) -> Result<&RawValue, &'static str> {
    value.as_ref().ok_or("required")
}

fn coerced(value: &RawValue) -> Result<Cow<'_, str>, &'static str> {
    value.coerce_text().ok_or("wrong_type")
}

fn unsigned<T: std::str::FromStr>(value: &RawValue) -> Result<T, &'static str> {
    let text = coerced(value)?;
    if !is_unsigned_integer(&text) {
        return Err("not_unsigned_integer");
    }
    text.parse().map_err(|_| "out_of_range")
}

fn non_blank_text(value: &RawValue) -> Result<&str, &'static str> {
    let text = value.as_text().ok_or("wrong_type")?;
    if is_blank(text) {
        return Err("blank");
    }
    Ok(text)
}

fn currency(value: &RawValue) -> Result<Decimal, &'static str> {
    let text = coerced(value)?;
    if !is_currency(&text) {
        return Err("not_currency");
    }
    let plain = text.replace(',', "");
    let plain = if plain.starts_with('.') {
        format!("0{plain}")
    } else {
        plain
    };
    let price = plain.parse::<Decimal>().map_err(|_| "out_of_range")?;
    if price > MAX_PRICE {
        return Err("out_of_range");
    }
    Ok(price)
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
