//! Defensive price-string handling.
//!
//! Seller-entered prices arrive as display strings like `"₹25,005"`. Parsing
//! must never fail a render, so malformed input degrades to zero instead of
//! erroring.

/// Parse a comma-grouped price string into a numeric amount.
///
/// Strips separators and currency noise, keeping digits and the decimal
/// point. An empty or malformed string parses to `0.0`.
pub fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();

    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Format an amount back into the comma-grouped display form, rounding to
/// whole rupees: `25005.0` becomes `"25,005"`.
pub fn format_price(amount: f64) -> String {
    let rounded = amount.max(0.0).round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
