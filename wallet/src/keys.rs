//! Fixed-width cryptographic material.
//!
//! Keys, proofs, and encrypted amounts enter the wallet as hex strings
//! produced by external cryptographic libraries. They are parsed into typed,
//! width-checked byte arrays at that boundary and written to the wire raw,
//! with no length prefixes: their widths are fixed by the protocol.

use crate::Error;
use bytes::{Buf, BufMut, Bytes};
use ledgerkit_codec::{Error as CodecError, FixedSize, Read, ReadExt, Write};
use ledgerkit_utils::{from_hex, hex};
use std::{fmt::Debug, str::FromStr};

macro_rules! fixed_bytes {
    ($(#[$attr:meta])* $name:ident, $len:expr, $context:literal) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name([u8; $len]);

        impl $name {
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bytes = from_hex(s).ok_or(Error::Format($context, "invalid hex"))?;
                let raw: [u8; $len] = bytes
                    .try_into()
                    .map_err(|_| Error::Format($context, "wrong length"))?;
                Ok(Self(raw))
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(value: [u8; $len]) -> Self {
                Self(value)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", hex(&self.0))
            }
        }

        impl Write for $name {
            fn write(&self, buf: &mut impl BufMut) {
                self.0.write(buf);
            }
        }

        impl Read for $name {
            type Cfg = ();

            fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
                Ok(Self(<[u8; $len]>::read(buf)?))
            }
        }

        impl FixedSize for $name {
            const SIZE: usize = $len;
        }
    };
}

fixed_bytes!(
    /// An Ed25519-style verification key (election, signature, or governance).
    VerifyKey,
    32,
    "verify key"
);

fixed_bytes!(
    /// A BLS aggregation verification key.
    AggregationVerifyKey,
    96,
    "aggregation verify key"
);

fixed_bytes!(
    /// A proof of knowledge for a baker verification key.
    KeyProof,
    64,
    "key proof"
);

fixed_bytes!(
    /// An encrypted (shielded) amount: an opaque group-element pair from the
    /// confidential balance scheme.
    EncryptedAmount,
    192,
    "encrypted amount"
);

fixed_bytes!(
    /// The registration id of a credential deployed on chain.
    CredentialRegistrationId,
    48,
    "credential registration id"
);

/// A signature produced by a hardware wallet or governance key.
///
/// Variable length on the wire, always carried behind a 16-bit big-endian
/// length prefix.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Signature(Bytes);

impl Signature {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for Signature {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        if u16::try_from(value.len()).is_err() {
            return Err(Error::InvalidLength("signature", value.len()));
        }
        Ok(Self(Bytes::from(value)))
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = from_hex(s).ok_or(Error::Format("signature", "invalid hex"))?;
        Self::try_from(bytes)
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

impl Write for Signature {
    fn write(&self, buf: &mut impl BufMut) {
        // Length checked in `try_from`.
        buf.put_u16(self.0.len() as u16);
        buf.put_slice(&self.0);
    }
}

impl ledgerkit_codec::EncodeSize for Signature {
    fn encode_size(&self) -> usize {
        u16::SIZE + self.0.len()
    }
}

/// A credential deployment, pre-serialized by the external credential
/// library. Opaque to this layer; written to the wire verbatim.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct CredentialDeploymentInfo(Bytes);

impl CredentialDeploymentInfo {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for CredentialDeploymentInfo {
    fn from(value: Vec<u8>) -> Self {
        Self(Bytes::from(value))
    }
}

impl FromStr for CredentialDeploymentInfo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = from_hex(s).ok_or(Error::Format("credential deployment", "invalid hex"))?;
        Ok(Self(Bytes::from(bytes)))
    }
}

impl Debug for CredentialDeploymentInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

impl Write for CredentialDeploymentInfo {
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self.0);
    }
}

impl ledgerkit_codec::EncodeSize for CredentialDeploymentInfo {
    fn encode_size(&self) -> usize {
        self.0.len()
    }
}
