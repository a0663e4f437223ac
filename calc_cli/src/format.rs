//! Display formatting for calculation figures.
//!
//! Money is always shown as US dollars with two decimals and comma thousands
//! separators (`$8,350.00`). Unit counts get separators but no decimals.

/// Format a dollar amount, e.g. `8350.0` -> `$8,350.00`, `-1250.5` -> `-$1,250.50`.
///
/// Non-finite values render as `N/A`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // Amounts that round to zero never show a sign
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

const NOT_AVAILABLE: &str = "N/A";

/// Format a whole unit count, e.g. `1234567` -> `1,234,567`.
pub fn format_units(units: u64) -> String {
    group_thousands(&units.to_string())
}

/// Format a signed unit difference, e.g. `-234` -> `-234`, `1500` -> `+1,500`.
pub fn format_unit_delta(delta: i64) -> String {
    let grouped = group_thousands(&delta.unsigned_abs().to_string());
    match delta.signum() {
        -1 => format!("-{}", grouped),
        1 => format!("+{}", grouped),
        _ => grouped,
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
