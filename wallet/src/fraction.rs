//! Exact rational values.
//!
//! Exchange rates and commissions are carried as integer fractions and stay
//! exact until final display formatting; nothing here converts through
//! floating point.

use crate::Error;
use bytes::{Buf, BufMut};
use ledgerkit_codec::{Error as CodecError, FixedSize, Read, ReadExt, Write};
use std::{cmp::Ordering, fmt::Display};

/// An exact rational with a non-zero denominator.
///
/// Equality is by value, not by representation, so `Hash` is deliberately
/// not implemented.
#[derive(Clone, Copy, Debug)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    /// Creates a fraction, rejecting a zero denominator.
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, Error> {
        if denominator == 0 {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }
}

// Comparison by cross-multiplication in u128: exact, and indifferent to
// whether the fraction is in lowest terms.
impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        u128::from(self.numerator) * u128::from(other.denominator)
            == u128::from(other.numerator) * u128::from(self.denominator)
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.numerator) * u128::from(other.denominator);
        let rhs = u128::from(other.numerator) * u128::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Write for Fraction {
    fn write(&self, buf: &mut impl BufMut) {
        self.numerator.write(buf);
        self.denominator.write(buf);
    }
}

impl Read for Fraction {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        let numerator = u64::read(buf)?;
        let denominator = u64::read(buf)?;
        if denominator == 0 {
            return Err(CodecError::Invalid("Fraction", "zero denominator"));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }
}

impl FixedSize for Fraction {
    const SIZE: usize = u64::SIZE + u64::SIZE;
}

/// Maximum value of a [`RewardFraction`]: the whole, in parts per hundred
/// thousand.
pub const REWARD_FRACTION_WHOLE: u32 = 100_000;

/// A commission or reward share, in parts per hundred thousand.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct RewardFraction(u32);

impl RewardFraction {
    /// Creates a reward fraction, rejecting values above 100%.
    pub fn new(parts_per_hundred_thousand: u32) -> Result<Self, Error> {
        if parts_per_hundred_thousand > REWARD_FRACTION_WHOLE {
            return Err(Error::Range("reward fraction"));
        }
        Ok(Self(parts_per_hundred_thousand))
    }

    pub fn parts_per_hundred_thousand(&self) -> u32 {
        self.0
    }
}

impl Write for RewardFraction {
    fn write(&self, buf: &mut impl BufMut) {
        self.0.write(buf);
    }
}

impl Read for RewardFraction {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        let raw = u32::read(buf)?;
        if raw > REWARD_FRACTION_WHOLE {
            return Err(CodecError::Invalid("RewardFraction", "above the whole"));
        }
        Ok(Self(raw))
    }
}

impl FixedSize for RewardFraction {
    const SIZE: usize = u32::SIZE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerkit_codec::{DecodeExt, Encode};

    #[test]
    fn test_zero_denominator() {
        assert!(matches!(Fraction::new(1, 0), Err(Error::ZeroDenominator)));
        // 16 bytes: 1/0 on the wire.
        let mut bytes = vec![0u8; 16];
        bytes[7] = 1;
        assert!(Fraction::decode(&bytes[..]).is_err());
    }

    #[test]
    fn test_exact_comparison() {
        let half = Fraction::new(1, 2).unwrap();
        let scaled = Fraction::new(500_000, 1_000_000).unwrap();
        assert_eq!(half, scaled);

        // Values whose cross products overflow u64 still compare exactly.
        let a = Fraction::new(u64::MAX, u64::MAX - 1).unwrap();
        let b = Fraction::new(u64::MAX - 1, u64::MAX).unwrap();
        assert!(a > b);
    }

    #[test]
    fn test_codec() {
        let rate = Fraction::new(1, 50_000).unwrap();
        let encoded = rate.encode();
        assert_eq!(encoded.len(), Fraction::SIZE);
        assert_eq!(Fraction::decode(encoded).unwrap(), rate);
    }

    #[test]
    fn test_reward_fraction_bounds() {
        assert!(RewardFraction::new(100_000).is_ok());
        assert!(RewardFraction::new(100_001).is_err());
        assert!(RewardFraction::decode(&100_001u32.encode()[..]).is_err());
    }
}
