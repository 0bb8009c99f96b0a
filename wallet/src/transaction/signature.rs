//! The nested signature block of a signed account transaction.
//!
//! Signatures form a two-level map: credential index to signature index to
//! signature bytes. Iteration order during serialization is ascending numeric
//! key order, not insertion order; this is load-bearing, because the
//! serialized block feeds directly into the transaction-hash preimage.
//! Backing the maps with [`BTreeMap`] makes that ordering structural rather
//! than a convention to remember.

use crate::keys::Signature;
use bytes::BufMut;
use ledgerkit_codec::{EncodeSize, FixedSize, Write};
use std::collections::BTreeMap;

/// The signatures attached to an account transaction, keyed by credential
/// index and signature (key) index.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransactionSignature(BTreeMap<u8, BTreeMap<u8, Signature>>);

impl TransactionSignature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a signature for `(credential_index, key_index)`, replacing any
    /// previous signature at that slot.
    pub fn insert(&mut self, credential_index: u8, key_index: u8, signature: Signature) {
        self.0
            .entry(credential_index)
            .or_default()
            .insert(key_index, signature);
    }

    /// Number of credentials that have signed.
    pub fn credentials_signed(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Write for TransactionSignature {
    fn write(&self, buf: &mut impl BufMut) {
        // Credential indices are u8 and account thresholds cap the set far
        // below 256, so the outer count always fits one byte.
        buf.put_u8(self.0.len() as u8);
        for (credential_index, keys) in &self.0 {
            buf.put_u8(*credential_index);
            buf.put_u8(keys.len() as u8);
            for (key_index, signature) in keys {
                buf.put_u8(*key_index);
                signature.write(buf);
            }
        }
    }
}

impl EncodeSize for TransactionSignature {
    fn encode_size(&self) -> usize {
        u8::SIZE
            + self
                .0
                .values()
                .map(|keys| {
                    u8::SIZE * 2
                        + keys
                            .values()
                            .map(|signature| u8::SIZE + signature.encode_size())
                            .sum::<usize>()
                })
                .sum::<usize>()
    }
}
