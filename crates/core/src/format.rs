//! Display helpers for budget amounts.
//!
//! Amounts are shown rounded to whole units with thousands grouped by commas.
//! The currency symbol is never part of the number; [`display_amount`] adds it
//! as a separate prefix.

/// Format an amount as a whole number with comma thousands separators.
///
/// `1234567.6` → `"1,234,568"`, `999.4` → `"999"`.
#[must_use]
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Symbol-prefixed amount, e.g. `display_amount("$", 1200.0)` → `"$1,200"`.
#[must_use]
pub fn display_amount(symbol: &str, value: f64) -> String {
    format!("{symbol}{}", format_amount(value))
}
