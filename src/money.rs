//! Brazilian Real formatting for prices and totals.
//!
//! Produces strings like `R$ 1.234,56`: dot-grouped thousands and a comma
//! decimal separator, always two decimal places.

/// Format a price in BRL.
///
/// The value is rounded to the nearest cent before formatting.
pub fn format_price(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, frac)
}
