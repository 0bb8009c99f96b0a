//! The fixed-layout account-transaction header.

use crate::AccountAddress;
use bytes::{Buf, BufMut};
use ledgerkit_codec::{Error as CodecError, FixedSize, Read, ReadExt, Write};
use std::fmt::Display;

macro_rules! word64_newtype {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(pub u64);

        impl Write for $name {
            fn write(&self, buf: &mut impl BufMut) {
                self.0.write(buf);
            }
        }

        impl Read for $name {
            type Cfg = ();

            fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
                Ok(Self(u64::read(buf)?))
            }
        }

        impl FixedSize for $name {
            const SIZE: usize = u64::SIZE;
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

word64_newtype!(
    /// An account's sequence number, fetched from the node at transaction
    /// creation time.
    Nonce
);

word64_newtype!(
    /// The protocol's resource-cost unit.
    Energy
);

word64_newtype!(
    /// A transaction expiry, in seconds since the epoch.
    TransactionTime
);

/// The fixed-layout header preceding every account-transaction payload:
/// `sender(32) || nonce(8) || energy(8) || payloadSize(4) || expiry(8)`.
///
/// `payload_size` is always computed from the serialized payload, never
/// supplied independently, so header and payload cannot desync.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransactionHeader {
    pub sender: AccountAddress,
    pub nonce: Nonce,
    pub energy: Energy,
    payload_size: u32,
    pub expiry: TransactionTime,
}

impl TransactionHeader {
    pub(crate) fn new(
        sender: AccountAddress,
        nonce: Nonce,
        energy: Energy,
        payload_size: u32,
        expiry: TransactionTime,
    ) -> Self {
        Self {
            sender,
            nonce,
            energy,
            payload_size,
            expiry,
        }
    }

    /// The exact byte length of the payload this header describes.
    pub fn payload_size(&self) -> u32 {
        self.payload_size
    }
}

impl Write for TransactionHeader {
    fn write(&self, buf: &mut impl BufMut) {
        self.sender.write(buf);
        self.nonce.write(buf);
        self.energy.write(buf);
        self.payload_size.write(buf);
        self.expiry.write(buf);
    }
}

impl Read for TransactionHeader {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        let sender = AccountAddress::read(buf)?;
        let nonce = Nonce::read(buf)?;
        let energy = Energy::read(buf)?;
        let payload_size = u32::read(buf)?;
        let expiry = TransactionTime::read(buf)?;
        Ok(Self {
            sender,
            nonce,
            energy,
            payload_size,
            expiry,
        })
    }
}

impl FixedSize for TransactionHeader {
    const SIZE: usize =
        AccountAddress::SIZE + Nonce::SIZE + Energy::SIZE + u32::SIZE + TransactionTime::SIZE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerkit_codec::{DecodeExt, Encode};
    use ledgerkit_utils::hex;
    use std::str::FromStr;

    #[test]
    fn test_header_size() {
        assert_eq!(TransactionHeader::SIZE, 60);
    }

    #[test]
    fn test_layout() {
        let sender = AccountAddress::from_str("3UbdTrP5kcEioJRCyiCacAdpAYfyezPSVfrys8QDsHJUiVXjKf")
            .unwrap();
        let header = TransactionHeader::new(
            sender,
            Nonce(1),
            Energy(501),
            41,
            TransactionTime(1_700_000_000),
        );
        let encoded = header.encode();
        assert_eq!(encoded.len(), TransactionHeader::SIZE);
        assert_eq!(
            hex(&encoded),
            "460dfe2e6839447eb4381957f8d5ddecb4339676faba1ce4284ff41acca881d2000000000000000100000000000001f500000029000000006553f100"
        );
        assert_eq!(TransactionHeader::decode(encoded).unwrap(), header);
    }
}
