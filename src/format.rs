//! String and number formatting.
//!
//! Free-form numeric parsing, thousands grouping, magnitude-unit
//! abbreviation, and capitalization. All functions are pure; degenerate
//! input (empty strings, non-finite numbers) yields a documented default
//! instead of an error.

/// Magnitude units in base-1000 progression, up to 1000^14.
const UNITS: [&str; 15] = [
    "", "k", "m", "b", "f", "e", "ae", "be", "ce", "de", "ee", "fe", "ge", "he", "ie",
];

/// Extracts a number from a free-form string.
///
/// Trims the input, drops every character that is not an ASCII digit or
/// `.`, and parses the remaining leading run as a decimal. A second `.`
/// terminates the run, so `"12.34.56"` parses as `12.34`.
///
/// # Returns
/// `0.0` for empty input or when no parsable digits remain.
///
/// # Examples
/// ```
/// use kitbag::format::parse_numeric;
/// assert_eq!(parse_numeric("¥1,234.56"), 1234.56);
/// assert_eq!(parse_numeric("  42 items"), 42.0);
/// assert_eq!(parse_numeric(""), 0.0);
/// assert_eq!(parse_numeric("n/a"), 0.0);
/// ```
pub fn parse_numeric(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let mut run = String::new();
    let mut seen_dot = false;
    for c in trimmed.chars().filter(|c| c.is_ascii_digit() || *c == '.') {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        run.push(c);
    }
    run.parse().unwrap_or(0.0)
}

/// Inserts a comma every three digits in the integer portion of a number.
///
/// Only the leading integer run is grouped; a fractional tail passes
/// through untouched and the sign is preserved outside the grouping.
///
/// # Returns
/// `"0"` for non-finite input.
///
/// # Examples
/// ```
/// use kitbag::format::group_thousands;
/// assert_eq!(group_thousands(10000.0), "10,000");
/// assert_eq!(group_thousands(-1234567.0), "-1,234,567");
/// assert_eq!(group_thousands(1234.56), "1,234.56");
/// assert_eq!(group_thousands(f64::NAN), "0");
/// ```
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    let rendered = value.to_string();
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (int_part, tail) = rest.split_at(digits_end);
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}{tail}")
}

/// Compact display of a large number with a magnitude-unit suffix.
///
/// The value is floored to an integer, the unit is chosen by
/// `floor(ln(v) / ln(1000))`, and the scaled value is formatted to three
/// decimals then **truncated** (not rounded) to one. A trailing `.0` is
/// dropped, so round thousands come out bare: `1000 → "1k"`.
///
/// Truncation is deliberate: `1999` must read `"1.9k"`, never `"2.0k"`.
///
/// # Returns
/// `"0"` for zero or non-finite input; negative values are floored and
/// rendered raw (no unit applies).
///
/// # Examples
/// ```
/// use kitbag::format::abbreviate;
/// assert_eq!(abbreviate(1999.0), "1.9k");
/// assert_eq!(abbreviate(1000.0), "1k");
/// assert_eq!(abbreviate(999.0), "999");
/// assert_eq!(abbreviate(2_500_000.0), "2.5m");
/// ```
pub fn abbreviate(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let value = value.floor();
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return value.to_string();
    }
    let mut index = ((value.ln() / 1000f64.ln()).floor() as i32).clamp(0, UNITS.len() as i32 - 1);
    // The log ratio can land an ulp off an exact power of 1000; snap to
    // the bracket the value actually falls in.
    if index < UNITS.len() as i32 - 1 && value >= 1000f64.powi(index + 1) {
        index += 1;
    }
    if index > 0 && value < 1000f64.powi(index) {
        index -= 1;
    }
    let index = index as usize;
    let scaled = value / 1000f64.powi(index as i32);
    if index == 0 {
        return scaled.to_string();
    }
    let fixed = format!("{scaled:.3}");
    let dot = fixed.find('.').expect("three-decimal format has a dot");
    let mut truncated = fixed[..dot + 2].to_string();
    if truncated.ends_with(".0") {
        truncated.truncate(dot);
    }
    format!("{truncated}{}", UNITS[index])
}

/// Uppercases the first character, leaving the rest untouched.
///
/// # Examples
/// ```
/// use kitbag::format::capitalize_first;
/// assert_eq!(capitalize_first("hello world"), "Hello world");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_numeric ---

    #[test]
    fn test_parse_numeric_plain() {
        assert_eq!(parse_numeric("123"), 123.0);
        assert_eq!(parse_numeric("12.5"), 12.5);
    }

    #[test]
    fn test_parse_numeric_strips_noise() {
        assert_eq!(parse_numeric("$ 1,250.75 USD"), 1250.75);
        assert_eq!(parse_numeric("約12個"), 12.0);
    }

    #[test]
    fn test_parse_numeric_second_dot_terminates() {
        assert_eq!(parse_numeric("12.34.56"), 12.34);
        assert_eq!(parse_numeric("1.2.3.4"), 1.2);
    }

    #[test]
    fn test_parse_numeric_leading_dot() {
        assert_eq!(parse_numeric(".5"), 0.5);
    }

    #[test]
    fn test_parse_numeric_degenerate() {
        assert_eq!(parse_numeric(""), 0.0);
        assert_eq!(parse_numeric("   "), 0.0);
        assert_eq!(parse_numeric("no digits"), 0.0);
        assert_eq!(parse_numeric("."), 0.0);
    }

    // --- group_thousands ---

    #[test]
    fn test_group_thousands_known() {
        assert_eq!(group_thousands(10000.0), "10,000");
        assert_eq!(group_thousands(-1234567.0), "-1,234,567");
    }

    #[test]
    fn test_group_thousands_small_values_untouched() {
        assert_eq!(group_thousands(1.0), "1");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(-12.0), "-12");
    }

    #[test]
    fn test_group_thousands_boundary() {
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(999999.0), "999,999");
        assert_eq!(group_thousands(1000000.0), "1,000,000");
    }

    #[test]
    fn test_group_thousands_fraction_passthrough() {
        assert_eq!(group_thousands(1234.56), "1,234.56");
        assert_eq!(group_thousands(0.5), "0.5");
    }

    #[test]
    fn test_group_thousands_non_finite() {
        assert_eq!(group_thousands(f64::NAN), "0");
        assert_eq!(group_thousands(f64::INFINITY), "0");
    }

    // --- abbreviate ---

    #[test]
    fn test_abbreviate_truncates_not_rounds() {
        // Rounding to one decimal would say "2.0k"; truncation must not.
        assert_eq!(abbreviate(1999.0), "1.9k");
        assert_eq!(abbreviate(1_980_000.0), "1.9m");
    }

    #[test]
    fn test_abbreviate_round_thousands_bare() {
        assert_eq!(abbreviate(1000.0), "1k");
        assert_eq!(abbreviate(2000.0), "2k");
        assert_eq!(abbreviate(1000000.0), "1m");
    }

    #[test]
    fn test_abbreviate_below_first_unit() {
        assert_eq!(abbreviate(0.0), "0");
        assert_eq!(abbreviate(1.0), "1");
        assert_eq!(abbreviate(999.0), "999");
        assert_eq!(abbreviate(999.9), "999");
    }

    #[test]
    fn test_abbreviate_keeps_nonzero_decimal() {
        assert_eq!(abbreviate(1500.0), "1.5k");
        assert_eq!(abbreviate(1250000000.0), "1.2b");
    }

    #[test]
    fn test_abbreviate_floors_input() {
        assert_eq!(abbreviate(1999.99), "1.9k");
    }

    #[test]
    fn test_abbreviate_ladder_progression() {
        assert_eq!(abbreviate(1e9), "1b");
        assert_eq!(abbreviate(1e12), "1f");
        assert_eq!(abbreviate(5e12), "5f");
        assert_eq!(abbreviate(1e15), "1e");
        assert_eq!(abbreviate(3e18), "3ae");
    }

    // --- capitalize_first ---

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("rust"), "Rust");
        assert_eq!(capitalize_first("Rust"), "Rust");
        assert_eq!(capitalize_first("über"), "Über");
        assert_eq!(capitalize_first("1st"), "1st");
    }
}
