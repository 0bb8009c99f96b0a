//! Account addresses.
//!
//! An address is a 32-byte value. Its textual form is base58check with a
//! fixed version byte and a 4-byte double-SHA-256 checksum; only the raw
//! 32 bytes ever reach the wire.

use crate::Error;
use bytes::{Buf, BufMut};
use ledgerkit_codec::{Error as CodecError, FixedSize, Read, ReadExt, Write};
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

/// Version byte prefixed to the raw address in the base58check encoding.
pub const ACCOUNT_ADDRESS_VERSION: u8 = 1;

const ADDRESS_LENGTH: usize = 32;

/// A 32-byte account address.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct AccountAddress([u8; ADDRESS_LENGTH]);

impl AccountAddress {
    /// Returns the raw 32 bytes written to the wire.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }
}

impl FromStr for AccountAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `with_check` validates the 4-byte checksum and the version byte but
        // leaves the version byte in the output.
        let decoded = bs58::decode(s)
            .with_check(Some(ACCOUNT_ADDRESS_VERSION))
            .into_vec()?;
        let raw: [u8; ADDRESS_LENGTH] = decoded[1..]
            .try_into()
            .map_err(|_| Error::Format("address", "payload is not 32 bytes"))?;
        Ok(Self(raw))
    }
}

impl Display for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = bs58::encode(&self.0)
            .with_check_version(ACCOUNT_ADDRESS_VERSION)
            .into_string();
        write!(f, "{encoded}")
    }
}

impl Debug for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl From<[u8; ADDRESS_LENGTH]> for AccountAddress {
    fn from(value: [u8; ADDRESS_LENGTH]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for AccountAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Write for AccountAddress {
    fn write(&self, buf: &mut impl BufMut) {
        self.0.write(buf);
    }
}

impl Read for AccountAddress {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        Ok(Self(<[u8; ADDRESS_LENGTH]>::read(buf)?))
    }
}

impl FixedSize for AccountAddress {
    const SIZE: usize = ADDRESS_LENGTH;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerkit_codec::Encode;
    use ledgerkit_utils::hex;

    const ADDRESS: &str = "3UbdTrP5kcEioJRCyiCacAdpAYfyezPSVfrys8QDsHJUiVXjKf";

    #[test]
    fn test_roundtrip() {
        let address = AccountAddress::from_str(ADDRESS).unwrap();
        assert_eq!(address.to_string(), ADDRESS);
    }

    #[test]
    fn test_wire_bytes() {
        // Only the 32-byte payload reaches the wire; version byte and
        // checksum exist in the text encoding alone.
        let address = AccountAddress::from_str(ADDRESS).unwrap();
        let encoded = address.encode();
        assert_eq!(encoded.len(), AccountAddress::SIZE);
        assert_eq!(
            hex(&encoded),
            "460dfe2e6839447eb4381957f8d5ddecb4339676faba1ce4284ff41acca881d2"
        );
    }

    #[test]
    fn test_rejects_corrupted() {
        // Flipping a character breaks the checksum.
        let mut corrupted = ADDRESS.to_string();
        corrupted.replace_range(..1, "4");
        assert!(matches!(
            AccountAddress::from_str(&corrupted),
            Err(Error::InvalidAddress(_))
        ));
    }
}
