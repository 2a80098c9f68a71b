//! Turns checked submissions into canonical [`Product`] records.

use rust_decimal::Decimal;
use validator::ValidationErrors;

use crate::product::{Product, RawProduct};
use crate::validation::{check_product, CheckedProduct};

/// Scale every stored price carries.
pub const PRICE_SCALE: u32 = 2;

/// Largest price the `product_price NUMERIC(10, 2)` column holds.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, PRICE_SCALE);

/// Escape characters that would let stored text be rendered as markup.
///
/// Covers `& < > " ' / \` and the backtick. Text without any of those is
/// returned unchanged.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            other => out.push(other),
        }
    }
    out
}

/// Build the canonical record from a submission that already passed
/// [`check_product`]. Performs no re-validation.
pub fn normalize(checked: CheckedProduct<'_>) -> Product {
    let mut product_price = checked.product_price;
    product_price.rescale(PRICE_SCALE);

    Product {
        id: checked.id,
        category_id: checked.category_id,
        product_name: escape_html(checked.product_name),
        product_description: escape_html(checked.product_description),
        product_stock: checked.product_stock,
        product_price,
    }
}

/// Validate `raw` and, if every field passes, return the sanitized record.
pub fn validate_product(raw: &RawProduct) -> Result<Product, ValidationErrors> {
    check_product(raw).map(normalize)
}
