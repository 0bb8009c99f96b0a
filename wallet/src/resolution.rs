//! Power-of-10 resolution arithmetic.
//!
//! Converts between integer micro-unit amounts and human decimal strings
//! without ever touching floating point. [`to_resolution`] and
//! [`to_number_string`] are mutual inverses for any power-of-10 resolution
//! and any value representable within that resolution's fractional digit
//! count.

use crate::Error;

/// Returns whether `resolution` is a power of 10 (1, 10, 100, ...).
pub fn is_power_of_10(resolution: u128) -> bool {
    if resolution == 0 {
        return false;
    }
    let mut r = resolution;
    while r % 10 == 0 {
        r /= 10;
    }
    r == 1
}

/// Number of fractional digits a power-of-10 resolution supports.
///
/// Callers must validate the resolution first; for a non-power-of-10 input
/// this returns the floor of log10.
fn fraction_digits(resolution: u128) -> u32 {
    let mut digits = 0;
    let mut r = resolution;
    while r >= 10 {
        r /= 10;
        digits += 1;
    }
    digits
}

fn checked_resolution(resolution: u128) -> Result<u32, Error> {
    if !is_power_of_10(resolution) {
        return Err(Error::InvalidResolution(resolution));
    }
    Ok(fraction_digits(resolution))
}

/// Parses a decimal string into an integer amount at the given resolution.
///
/// The string may carry a single leading `-` and at most one decimal point;
/// the fractional part is right-padded with zeros to the resolution's digit
/// count, then both parts combine as `whole * resolution + fraction`.
pub fn to_resolution(resolution: u128, input: &str) -> Result<i128, Error> {
    let digits = checked_resolution(resolution)?;

    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let (whole_str, fraction_str) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    if whole_str.is_empty() && fraction_str.is_empty() {
        return Err(Error::Format("decimal", "empty input"));
    }
    if fraction_str.len() > digits as usize {
        return Err(Error::Format(
            "decimal",
            "more fractional digits than the resolution allows",
        ));
    }
    if !whole_str.bytes().all(|b| b.is_ascii_digit())
        || !fraction_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(Error::Format("decimal", "non-digit character"));
    }

    let whole: i128 = if whole_str.is_empty() {
        0
    } else {
        whole_str
            .parse()
            .map_err(|_| Error::Range("decimal whole part"))?
    };
    // Right-pad the fraction to the resolution's digit count.
    let mut fraction: i128 = 0;
    for b in fraction_str.bytes() {
        fraction = fraction * 10 + i128::from(b - b'0');
    }
    for _ in fraction_str.len()..digits as usize {
        fraction = fraction
            .checked_mul(10)
            .ok_or(Error::Range("decimal fraction"))?;
    }

    let resolution = i128::try_from(resolution).map_err(|_| Error::Range("resolution"))?;
    let magnitude = whole
        .checked_mul(resolution)
        .and_then(|w| w.checked_add(fraction))
        .ok_or(Error::Range("decimal"))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Formats an integer amount at the given resolution as a decimal string.
///
/// If the fractional part is zero no decimal point is emitted; otherwise the
/// fractional digits are zero-left-padded to the resolution's digit count and
/// trailing zeros are stripped. Negative amounts carry a single leading `-`.
pub fn to_number_string(resolution: u128, amount: i128) -> Result<String, Error> {
    let digits = checked_resolution(resolution)?;
    Ok(format_with_digits(resolution, digits, amount))
}

// Infallible once the resolution is known to be a power of 10.
pub(crate) fn format_with_digits(resolution: u128, digits: u32, amount: i128) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();
    let whole = magnitude / resolution;
    let fraction = magnitude % resolution;
    if fraction == 0 {
        return format!("{sign}{whole}");
    }
    let padded = format!("{fraction:0width$}", width = digits as usize);
    let trimmed = padded.trim_end_matches('0');
    format!("{sign}{whole}.{trimmed}")
}

/// Validates a candidate decimal string against a resolution and sign policy.
///
/// Rejects the empty string, leading zeros, more fractional digits than the
/// resolution allows, and (optionally) negative values. Used for form-input
/// gating and to fail fast before serialization.
pub fn is_valid_resolution_string(resolution: u128, allow_negative: bool, input: &str) -> bool {
    if !is_power_of_10(resolution) {
        return false;
    }
    let digits = fraction_digits(resolution);

    let unsigned = match input.strip_prefix('-') {
        Some(rest) if allow_negative => rest,
        Some(_) => return false,
        None => input,
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    if whole.is_empty() {
        return false;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return false;
    }
    // "0" is fine; "007" and "01.5" are not.
    if whole.len() > 1 && whole.starts_with('0') {
        return false;
    }
    // A bare trailing point ("5.") is rejected alongside excess digits.
    if unsigned.contains('.') && fraction.is_empty() {
        return false;
    }
    fraction.len() <= digits as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_is_power_of_10() {
        assert!(is_power_of_10(1));
        assert!(is_power_of_10(10));
        assert!(is_power_of_10(1_000_000));
        assert!(!is_power_of_10(0));
        assert!(!is_power_of_10(2));
        assert!(!is_power_of_10(500_000));
    }

    #[test]
    fn test_invalid_resolution_fails() {
        assert!(matches!(
            to_resolution(7, "1"),
            Err(Error::InvalidResolution(7))
        ));
        assert!(matches!(
            to_number_string(20, 1),
            Err(Error::InvalidResolution(20))
        ));
    }

    #[test_case("1", 1_000_000 ; "whole")]
    #[test_case("0.000001", 1 ; "smallest fraction")]
    #[test_case("1.5", 1_500_000 ; "half")]
    #[test_case("0.100000", 100_000 ; "explicit trailing zeros")]
    #[test_case("-2.25", -2_250_000 ; "negative")]
    #[test_case(".5", 500_000 ; "bare fraction")]
    fn test_to_resolution(input: &str, expected: i128) {
        assert_eq!(to_resolution(1_000_000, input).unwrap(), expected);
    }

    #[test]
    fn test_to_resolution_rejects() {
        assert!(to_resolution(1_000_000, "").is_err());
        assert!(to_resolution(1_000_000, "-").is_err());
        assert!(to_resolution(1_000_000, "1.2345678").is_err());
        assert!(to_resolution(1_000_000, "1,5").is_err());
        assert!(to_resolution(100, "0.001").is_err());
    }

    #[test_case(1_000_000, "1" ; "whole")]
    #[test_case(1, "0.000001" ; "smallest fraction")]
    #[test_case(1_500_000, "1.5" ; "trailing zeros stripped")]
    #[test_case(100_000, "0.1" ; "left padded")]
    #[test_case(-2_250_000, "-2.25" ; "negative")]
    #[test_case(0, "0" ; "zero")]
    fn test_to_number_string(amount: i128, expected: &str) {
        assert_eq!(to_number_string(1_000_000, amount).unwrap(), expected);
    }

    #[test]
    fn test_roundtrip() {
        // to_resolution . to_number_string is the identity for every value
        // representable at the resolution.
        for resolution in [1u128, 10, 1_000, 1_000_000] {
            for value in [0i128, 1, 7, 999, 1_000_001, 123_456_789, -42] {
                let formatted = to_number_string(resolution, value).unwrap();
                assert_eq!(to_resolution(resolution, &formatted).unwrap(), value);
            }
        }
    }

    #[test_case("0", true)]
    #[test_case("10.5", true)]
    #[test_case("0.123456", true)]
    #[test_case("", false)]
    #[test_case("007", false)]
    #[test_case("01.5", false)]
    #[test_case(".5", false ; "leading dot")]
    #[test_case("5.", false ; "trailing dot")]
    #[test_case("0.1234567", false)]
    #[test_case("1e6", false)]
    fn test_is_valid_resolution_string(input: &str, valid: bool) {
        assert_eq!(is_valid_resolution_string(1_000_000, false, input), valid);
    }

    #[test]
    fn test_sign_policy() {
        assert!(is_valid_resolution_string(1_000_000, true, "-1.5"));
        assert!(!is_valid_resolution_string(1_000_000, false, "-1.5"));
    }
}
