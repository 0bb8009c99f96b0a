//! Hex and hashing helpers shared across the wallet core.

pub mod sha256;

/// Converts bytes to a hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

/// Converts a hexadecimal string to bytes.
///
/// Returns `None` for odd-length input or any non-hex digit: malformed hex is
/// rejected at the boundary where external strings enter the codec, never
/// silently coerced.
pub fn from_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok())
        .collect()
}

/// Converts a hexadecimal string to bytes, stripping whitespace and/or a `0x`
/// prefix. Commonly used in testing to encode external test vectors without
/// modification.
pub fn from_hex_formatted(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.replace(['\t', '\n', '\r', ' '], "");
    let res = hex.strip_prefix("0x").unwrap_or(&hex);
    from_hex(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let bytes = [0x00u8, 0x01, 0xAB, 0xFF];
        let encoded = hex(&bytes);
        assert_eq!(encoded, "0001abff");
        assert_eq!(from_hex(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(from_hex("abc").is_none()); // odd length
        assert!(from_hex("zz").is_none()); // non-hex digit
        assert_eq!(from_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_from_hex_formatted() {
        assert_eq!(from_hex_formatted("0xab cd").unwrap(), vec![0xAB, 0xCD]);
        assert_eq!(from_hex_formatted("ab\ncd").unwrap(), vec![0xAB, 0xCD]);
    }
}
