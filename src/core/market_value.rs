//! Market value parsing.
//!
//! Market values arrive as display strings such as `€12.50m`, `€500k` or a bare
//! number of euros. Range filters compare them in millions.

/// Parse a market value display string into millions.
///
/// - `€12.50m` and `12,50m` give `12.5`
/// - `500k` gives `0.5`
/// - `1000000` gives `1.0`
/// - empty or unparseable input gives `0.0`
///
/// The numeric part is read as its longest leading number, so trailing noise
/// after the digits is ignored.
///
/// # Examples
///
/// ```rust
/// use player_scout::core::parse_market_value;
///
/// assert_eq!(parse_market_value("€12.50m"), 12.5);
/// assert_eq!(parse_market_value("500k"), 0.5);
/// assert_eq!(parse_market_value(""), 0.0);
/// ```
pub fn parse_market_value(raw: &str) -> f64 {
    let stripped = raw.replacen('€', "", 1);
    let value = stripped.trim();
    if value.is_empty() {
        return 0.0;
    }

    if value.contains('m') {
        leading_number(&value.replacen('m', "", 1).replacen(',', ".", 1))
    } else if value.contains('k') {
        leading_number(&value.replacen('k', "", 1).replacen(',', ".", 1)) / 1000.0
    } else {
        leading_number(value) / 1_000_000.0
    }
}

/// Longest leading decimal number of `s`, or 0 when there is none.
fn leading_number(s: &str) -> f64 {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return 0.0;
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
