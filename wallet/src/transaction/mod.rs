//! Account transactions: construction, serialization, and digests.
//!
//! Two distinct digests exist per transaction and they are not
//! interchangeable:
//!
//! - the **sign digest** covers `header || payload` and is the exact byte
//!   sequence the hardware wallet signs;
//! - the **transaction hash** covers the full signed envelope
//!   (`version || kind || signatures || header || payload`) and identifies
//!   the transaction on chain.
//!
//! The data dependency is strict: sign digest before signature, signature
//! before transaction hash. [`SignedTransaction::seal`] enforces the
//! signature-threshold precondition so a premature hash (one that would never
//! match the finalized on-chain hash) cannot be computed by accident.

pub mod cost;
pub mod header;
pub mod payload;
pub mod schedule;
pub mod signature;

use crate::{AccountAddress, Error};
use bytes::BufMut;
use ledgerkit_codec::{Encode, EncodeSize, FixedSize, Write};
use ledgerkit_utils::sha256::{Digest, Sha256};

pub use header::{Energy, Nonce, TransactionHeader, TransactionTime};
pub use payload::{Payload, TransactionKind};
pub use signature::TransactionSignature;

/// Version byte of the outer block-item envelope.
pub const BLOCK_ITEM_VERSION: u8 = 0;

/// Discriminants of the block-item envelope.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum BlockItemKind {
    AccountTransaction = 0,
    CredentialDeployment = 1,
    UpdateInstruction = 2,
}

impl Write for BlockItemKind {
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(*self as u8);
    }
}

impl FixedSize for BlockItemKind {
    const SIZE: usize = 1;
}

/// An unsigned account transaction.
///
/// The nonce is fetched from the node when the transaction is built; the
/// energy field is populated from the cost model (or supplied explicitly)
/// before anything is serialized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountTransaction {
    sender: AccountAddress,
    nonce: Nonce,
    expiry: TransactionTime,
    energy: Energy,
    payload: Payload,
}

impl AccountTransaction {
    /// Builds a transaction with its energy derived from the cost model for
    /// the given signature count.
    pub fn new(
        sender: AccountAddress,
        nonce: Nonce,
        expiry: TransactionTime,
        payload: Payload,
        signatures: u32,
    ) -> Result<Self, Error> {
        let energy = cost::transaction_energy(&payload, signatures);
        Self::with_energy(sender, nonce, expiry, payload, energy)
    }

    /// Builds a transaction with an explicit energy amount.
    pub fn with_energy(
        sender: AccountAddress,
        nonce: Nonce,
        expiry: TransactionTime,
        payload: Payload,
        energy: Energy,
    ) -> Result<Self, Error> {
        payload.validate()?;
        Ok(Self {
            sender,
            nonce,
            expiry,
            energy,
            payload,
        })
    }

    pub fn sender(&self) -> &AccountAddress {
        &self.sender
    }

    pub fn nonce(&self) -> Nonce {
        self.nonce
    }

    pub fn expiry(&self) -> TransactionTime {
        self.expiry
    }

    pub fn energy(&self) -> Energy {
        self.energy
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The header describing this transaction, with `payloadSize` measured
    /// from the payload's serialization.
    pub fn header(&self) -> TransactionHeader {
        TransactionHeader::new(
            self.sender,
            self.nonce,
            self.energy,
            self.payload.encode_size() as u32,
            self.expiry,
        )
    }

    /// The digest the hardware wallet signs: `SHA256(header || payload)`.
    /// Computed without any signature.
    pub fn sign_digest(&self) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(&self.header().encode());
        hasher.update(&self.payload.encode());
        hasher.finalize()
    }
}

/// A fully signed account transaction, ready for submission.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedTransaction {
    transaction: AccountTransaction,
    signatures: TransactionSignature,
}

impl SignedTransaction {
    /// Attaches signatures to a transaction, checking the account's
    /// signature threshold first.
    pub fn seal(
        transaction: AccountTransaction,
        signatures: TransactionSignature,
        threshold: u8,
    ) -> Result<Self, Error> {
        let found = signatures.credentials_signed();
        if found < usize::from(threshold) {
            return Err(Error::InsufficientSignatures {
                found,
                threshold: usize::from(threshold),
            });
        }
        Ok(Self {
            transaction,
            signatures,
        })
    }

    pub fn transaction(&self) -> &AccountTransaction {
        &self.transaction
    }

    pub fn signatures(&self) -> &TransactionSignature {
        &self.signatures
    }

    /// The on-chain transaction identifier: the hash of the exact bytes
    /// submitted to the node.
    pub fn hash(&self) -> Digest {
        ledgerkit_utils::sha256::hash(&self.encode())
    }
}

// The versioned envelope: this exact byte sequence is submitted to the node
// and is the transaction-hash preimage.
impl Write for SignedTransaction {
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(BLOCK_ITEM_VERSION);
        BlockItemKind::AccountTransaction.write(buf);
        self.signatures.write(buf);
        self.transaction.header().write(buf);
        self.transaction.payload.write(buf);
    }
}

impl EncodeSize for SignedTransaction {
    fn encode_size(&self) -> usize {
        1 + BlockItemKind::SIZE
            + self.signatures.encode_size()
            + TransactionHeader::SIZE
            + self.transaction.payload.encode_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keys::Signature, Amount};
    use std::str::FromStr;

    const ADDRESS: &str = "3UbdTrP5kcEioJRCyiCacAdpAYfyezPSVfrys8QDsHJUiVXjKf";

    fn transaction() -> AccountTransaction {
        let sender = AccountAddress::from_str(ADDRESS).unwrap();
        AccountTransaction::new(
            sender,
            Nonce(1),
            TransactionTime(1_700_000_000),
            Payload::Transfer {
                to: sender,
                amount: Amount::from_micro(100),
            },
            1,
        )
        .unwrap()
    }

    fn signatures(first_byte: u8) -> TransactionSignature {
        let mut sig_bytes: Vec<u8> = (0..64).collect();
        sig_bytes[0] = first_byte;
        let mut signatures = TransactionSignature::new();
        signatures.insert(0, 0, Signature::try_from(sig_bytes).unwrap());
        signatures
    }

    #[test]
    fn test_energy_from_cost_model() {
        assert_eq!(transaction().energy(), Energy(501));
    }

    #[test]
    fn test_payload_size_consistency() {
        let tx = transaction();
        assert_eq!(
            tx.header().payload_size() as usize,
            tx.payload().encode_size()
        );
    }

    #[test]
    fn test_threshold_enforced() {
        let result = SignedTransaction::seal(transaction(), TransactionSignature::new(), 1);
        assert!(matches!(
            result,
            Err(Error::InsufficientSignatures {
                found: 0,
                threshold: 1
            })
        ));
        assert!(SignedTransaction::seal(transaction(), signatures(0), 1).is_ok());
    }

    #[test]
    fn test_digests_distinct() {
        // The sign digest ignores signatures; the transaction hash does not.
        let tx = transaction();
        let sign_digest = tx.sign_digest();

        let signed = SignedTransaction::seal(tx.clone(), signatures(0), 1).unwrap();
        let altered = SignedTransaction::seal(tx.clone(), signatures(0xFF), 1).unwrap();

        assert_ne!(sign_digest.as_ref(), signed.hash().as_ref());
        assert_ne!(signed.hash(), altered.hash());
        assert_eq!(tx.sign_digest(), sign_digest);
    }
}
