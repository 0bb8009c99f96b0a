//! Micro-unit amounts.

use crate::{resolution, Error};
use bytes::{Buf, BufMut};
use ledgerkit_codec::{Error as CodecError, FixedSize, Read, ReadExt, Write};
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

/// Micro-units per display unit.
pub const MICRO_PER_UNIT: u64 = 1_000_000;

const MICRO_DIGITS: u32 = 6;

/// An amount of funds, denominated in micro-units.
///
/// Amounts are carried as integers end to end; they never pass through
/// floating point, even transiently. The only decimal conversion happens in
/// [`Display`]/[`FromStr`], via the exact resolution codec.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a raw micro-unit count.
    pub const fn from_micro(micro: u64) -> Self {
        Self(micro)
    }

    /// Returns the raw micro-unit count.
    pub const fn micro(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted = resolution::format_with_digits(
            u128::from(MICRO_PER_UNIT),
            MICRO_DIGITS,
            i128::from(self.0),
        );
        write!(f, "{formatted}")
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !resolution::is_valid_resolution_string(u128::from(MICRO_PER_UNIT), false, s) {
            return Err(Error::Format("amount", "not a valid decimal string"));
        }
        let micro = resolution::to_resolution(u128::from(MICRO_PER_UNIT), s)?;
        let micro = u64::try_from(micro).map_err(|_| Error::Range("amount"))?;
        Ok(Self(micro))
    }
}

impl Write for Amount {
    fn write(&self, buf: &mut impl BufMut) {
        self.0.write(buf);
    }
}

impl Read for Amount {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        Ok(Self(u64::read(buf)?))
    }
}

impl FixedSize for Amount {
    const SIZE: usize = u64::SIZE;
}
