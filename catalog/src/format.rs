//! Display formatting for the list and detail pages.
//!
//! Prices are shown the way a Vietnamese locale shows them: `.` groups
//! thousands, `,` separates decimals, and the đồng sign trails the amount.

use crate::types::Product;

/// Fraction digits kept when rendering a price
const MAX_FRACTION_DIGITS: usize = 3;

/// Render `amount` as Vietnamese đồng.
///
/// ```
/// use product_catalog::format::format_currency;
///
/// assert_eq!(format_currency(25_000_000.0), "25.000.000 ₫");
/// assert_eq!(format_currency(12.5), "12,5 ₫");
/// ```
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("{} ₫", format_number(amount))
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞".to_string() } else { "∞".to_string() };
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part.bytes().any(|b| b != b'0') || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

impl Product {
    /// The card line shown under the product name
    ///
    /// ```
    /// let iphone = &product_catalog::seed::sample_products()[0];
    /// assert_eq!(iphone.summary(), "Điện tử • 25.000.000 ₫ • SL: 10");
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} • {} • SL: {}",
            self.category,
            format_currency(self.price),
            self.quantity
        )
    }
}
