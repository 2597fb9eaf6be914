//! Display formatting for phone numbers, prices and addresses.
//!
//! None of these functions fail. Malformed input degrades to a visible
//! fallback: phone numbers pass through unchanged and prices collapse to
//! `"$0"`, so a content typo shows up on the page instead of aborting a build.

use crate::content::Address;

/// Format a phone number as `(AAA) BBB-CCCC`.
///
/// All non-digit characters are stripped first. If exactly ten digits
/// remain they are regrouped; any other count returns `raw` unchanged.
///
/// ```
/// use freight_site::format::format_phone;
/// assert_eq!(format_phone("407-978-5088"), "(407) 978-5088");
/// assert_eq!(format_phone("123"), "123");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        raw.to_string()
    }
}

/// Input accepted by [`format_currency`]: a number, or a string that
/// should parse as one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for Amount<'_> {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<u32> for Amount<'_> {
    fn from(value: u32) -> Self {
        Amount::Number(f64::from(value))
    }
}

impl From<i32> for Amount<'_> {
    fn from(value: i32) -> Self {
        Amount::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for Amount<'a> {
    fn from(value: &'a str) -> Self {
        Amount::Text(value)
    }
}

impl Amount<'_> {
    /// Numeric value. Text contributes its leading number (`"1250.00 USD"`
    /// is 1250); text with no leading number becomes NaN.
    fn value(self) -> f64 {
        match self {
            Amount::Number(n) => n,
            Amount::Text(s) => leading_number(s).unwrap_or(f64::NAN),
        }
    }
}

/// Longest prefix of `text` (after leading whitespace) that parses as a
/// decimal number.
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let candidate_len = text
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(text.len());
    (1..=candidate_len)
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
}

/// Format an amount as whole-dollar US currency: `$1,250`.
///
/// Strings are read up to the end of their leading number, so trailing
/// units are ignored. Negative, non-finite or unparsable amounts render as
/// `"$0"`. Fractions round to the nearest dollar, halves away from zero.
/// There is no upper bound: every integer digit is kept.
pub fn format_currency<'a>(amount: impl Into<Amount<'a>>) -> String {
    let value = amount.into().value();
    if !value.is_finite() || value <= 0.0 {
        return "$0".to_string();
    }
    let dollars = format!("{:.0}", value.round());
    format!("${}", group_thousands(&dollars))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Single-line address: `"{street}, {city}, {state} {zip}"`.
///
/// No validation. An empty street still leaves its separator, so the
/// result starts with `", "`.
pub fn format_address(address: &Address) -> String {
    format!(
        "{}, {}, {} {}",
        address.street, address.city, address.state, address.zip
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orlando(street: &str) -> Address {
        Address {
            street: street.to_string(),
            city: "Orlando".to_string(),
            state: "Florida".to_string(),
            zip: "32812".to_string(),
        }
    }

    #[test]
    fn phone_with_dashes_is_regrouped() {
        assert_eq!(format_phone("407-978-5088"), "(407) 978-5088");
    }

    #[test]
    fn phone_with_mixed_punctuation_is_regrouped() {
        assert_eq!(format_phone("(407) 978.5088"), "(407) 978-5088");
        assert_eq!(format_phone("4079785088"), "(407) 978-5088");
    }

    #[test]
    fn phone_with_wrong_digit_count_passes_through() {
        assert_eq!(format_phone("123"), "123");
        assert_eq!(format_phone("+1 407-978-5088"), "+1 407-978-5088");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn currency_whole_dollars() {
        assert_eq!(format_currency(950), "$950");
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(1100.0), "$1,100");
    }

    #[test]
    fn currency_from_string() {
        assert_eq!(format_currency("1250"), "$1,250");
        assert_eq!(format_currency(" 700 "), "$700");
    }

    #[test]
    fn currency_fallbacks() {
        assert_eq!(format_currency(-5), "$0");
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_currency(f64::INFINITY), "$0");
        assert_eq!(format_currency(-0.0), "$0");
        assert_eq!(format_currency("call for quote"), "$0");
    }

    #[test]
    fn currency_reads_leading_number_of_text() {
        assert_eq!(format_currency("1250.00 USD"), "$1,250");
        assert_eq!(format_currency("  85/stop"), "$85");
        assert_eq!(format_currency("2e3 flat"), "$2,000");
        assert_eq!(format_currency("-40 credit"), "$0");
        assert_eq!(format_currency("USD 1250"), "$0");
        assert_eq!(format_currency("inf"), "$0");
    }

    #[test]
    fn currency_keeps_every_digit_of_large_amounts() {
        assert_eq!(format_currency(1e20), "$100,000,000,000,000,000,000");
        assert_eq!(
            format_currency(18_446_744_073_709_551_616.0 * 10.0),
            "$184,467,440,737,095,516,160"
        );
    }

    #[test]
    fn currency_rounds_to_whole_dollars() {
        assert_eq!(format_currency(949.5), "$950");
        assert_eq!(format_currency(949.49), "$949");
    }

    #[test]
    fn currency_is_stable_on_its_own_digits() {
        let once = format_currency(1_234_567);
        let digits: String = once.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(format_currency(digits.as_str()), once);
        assert_eq!(once, "$1,234,567");
    }

    #[test]
    fn address_keeps_empty_street_separator() {
        assert_eq!(format_address(&orlando("")), ", Orlando, Florida 32812");
    }

    #[test]
    fn address_with_street() {
        assert_eq!(
            format_address(&orlando("100 Main St")),
            "100 Main St, Orlando, Florida 32812"
        );
    }
}
