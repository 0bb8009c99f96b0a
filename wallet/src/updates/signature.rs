//! Signatures over governance update instructions.

use crate::{keys::Signature, keys::VerifyKey, Error};
use bytes::BufMut;
use ledgerkit_codec::{EncodeSize, FixedSize, Write};
use std::collections::BTreeMap;

/// Signatures on an update instruction, keyed by the index of the
/// authorized governance key that produced each.
///
/// Backed by an ordered map so the serialized form is canonical
/// regardless of insertion order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UpdateSignatures(BTreeMap<u16, Signature>);

impl UpdateSignatures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a signature for a governance key index, replacing any
    /// previous signature under that index.
    pub fn insert(&mut self, key_index: u16, signature: Signature) {
        self.0.insert(key_index, signature);
    }

    /// The number of distinct keys that have signed.
    pub fn count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&u16, &Signature)> {
        self.0.iter()
    }
}

impl Write for UpdateSignatures {
    fn write(&self, buf: &mut impl BufMut) {
        // A map keyed by u16 holds at most 65536 entries; the authorized
        // key count caps it well below u16::MAX in practice.
        buf.put_u16(self.0.len() as u16);
        for (key_index, signature) in &self.0 {
            key_index.write(buf);
            signature.write(buf);
        }
    }
}

impl EncodeSize for UpdateSignatures {
    fn encode_size(&self) -> usize {
        u16::SIZE
            + self
                .0
                .values()
                .map(|signature| u16::SIZE + signature.encode_size())
                .sum::<usize>()
    }
}

/// The set of governance keys authorized to sign a class of updates,
/// with the number of signatures required.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizationKeys {
    keys: Vec<VerifyKey>,
    threshold: u16,
}

impl AuthorizationKeys {
    /// Creates an authorization set, rejecting thresholds the key set
    /// cannot meet.
    pub fn new(keys: Vec<VerifyKey>, threshold: u16) -> Result<Self, Error> {
        if u16::try_from(keys.len()).is_err() {
            return Err(Error::InvalidLength("authorization keys", keys.len()));
        }
        if threshold == 0 || usize::from(threshold) > keys.len() {
            return Err(Error::Range("authorization threshold"));
        }
        Ok(Self { keys, threshold })
    }

    pub fn keys(&self) -> &[VerifyKey] {
        &self.keys
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Resolves the index of a verification key within this set, for
    /// attaching a freshly produced signature.
    pub fn attach_key_index(&self, key: &VerifyKey) -> Result<u16, Error> {
        self.keys
            .iter()
            .position(|candidate| candidate == key)
            .map(|position| position as u16)
            .ok_or(Error::UnknownSigningKey)
    }
}
