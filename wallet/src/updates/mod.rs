//! Governance update instructions.
//!
//! Update instructions carry chain-parameter changes signed by the
//! governance key holders rather than by an account. They share the
//! versioned block-item envelope with account transactions but use their
//! own header layout and a flat, index-keyed signature list.

mod payload;
mod signature;

pub use payload::{
    CommissionRange, CreateToken, KeyCollection, MintRate, PoolParameters, ProtocolUpdate,
    UpdatePayload, UpdateType,
};
pub use signature::{AuthorizationKeys, UpdateSignatures};

use crate::{
    transaction::{BlockItemKind, TransactionTime, BLOCK_ITEM_VERSION},
    Error,
};
use bytes::BufMut;
use ledgerkit_codec::{Encode, EncodeSize, FixedSize, Write};
use ledgerkit_utils::sha256::{Digest, Sha256};

/// The fixed-layout header preceding every update payload:
/// `sequence || effectiveTime || timeout || payloadSize`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UpdateHeader {
    sequence: u64,
    effective_time: TransactionTime,
    timeout: TransactionTime,
    payload_size: u32,
}

impl UpdateHeader {
    pub(crate) fn new(
        sequence: u64,
        effective_time: TransactionTime,
        timeout: TransactionTime,
        payload_size: u32,
    ) -> Self {
        Self {
            sequence,
            effective_time,
            timeout,
            payload_size,
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn effective_time(&self) -> TransactionTime {
        self.effective_time
    }

    pub fn timeout(&self) -> TransactionTime {
        self.timeout
    }

    pub fn payload_size(&self) -> u32 {
        self.payload_size
    }
}

impl Write for UpdateHeader {
    fn write(&self, buf: &mut impl BufMut) {
        self.sequence.write(buf);
        self.effective_time.write(buf);
        self.timeout.write(buf);
        self.payload_size.write(buf);
    }
}

impl FixedSize for UpdateHeader {
    const SIZE: usize = u64::SIZE + TransactionTime::SIZE * 2 + u32::SIZE;
}

/// An unsigned governance update instruction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateInstruction {
    sequence: u64,
    effective_time: TransactionTime,
    timeout: TransactionTime,
    payload: UpdatePayload,
}

impl UpdateInstruction {
    /// Assembles an update instruction, validating the payload so that
    /// serialization cannot fail later.
    pub fn new(
        sequence: u64,
        effective_time: TransactionTime,
        timeout: TransactionTime,
        payload: UpdatePayload,
    ) -> Result<Self, Error> {
        payload.validate()?;
        Ok(Self {
            sequence,
            effective_time,
            timeout,
            payload,
        })
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn payload(&self) -> &UpdatePayload {
        &self.payload
    }

    /// The header describing this instruction, with `payloadSize` measured
    /// from the payload's serialization.
    pub fn header(&self) -> UpdateHeader {
        UpdateHeader::new(
            self.sequence,
            self.effective_time,
            self.timeout,
            self.payload.encode_size() as u32,
        )
    }

    /// The digest each governance key signs: `SHA256(header || payload)`.
    pub fn sign_digest(&self) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(&self.header().encode());
        hasher.update(&self.payload.encode());
        hasher.finalize()
    }
}

/// A governance update instruction carrying enough signatures to meet the
/// authorization threshold, ready for submission.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedUpdateInstruction {
    instruction: UpdateInstruction,
    signatures: UpdateSignatures,
}

impl SignedUpdateInstruction {
    /// Attaches signatures to an instruction, checking the governance
    /// threshold first.
    pub fn seal(
        instruction: UpdateInstruction,
        signatures: UpdateSignatures,
        threshold: u16,
    ) -> Result<Self, Error> {
        let found = signatures.count();
        if found < usize::from(threshold) {
            return Err(Error::InsufficientSignatures {
                found,
                threshold: usize::from(threshold),
            });
        }
        Ok(Self {
            instruction,
            signatures,
        })
    }

    pub fn instruction(&self) -> &UpdateInstruction {
        &self.instruction
    }

    pub fn signatures(&self) -> &UpdateSignatures {
        &self.signatures
    }

    /// The on-chain identifier of the instruction: the hash of the exact
    /// bytes submitted to the node.
    pub fn hash(&self) -> Digest {
        ledgerkit_utils::sha256::hash(&self.encode())
    }
}

// The versioned envelope, mirroring account transactions with the
// update-instruction block-item kind.
impl Write for SignedUpdateInstruction {
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(BLOCK_ITEM_VERSION);
        BlockItemKind::UpdateInstruction.write(buf);
        self.signatures.write(buf);
        self.instruction.header().write(buf);
        self.instruction.payload.write(buf);
    }
}

impl EncodeSize for SignedUpdateInstruction {
    fn encode_size(&self) -> usize {
        1 + BlockItemKind::SIZE
            + self.signatures.encode_size()
            + UpdateHeader::SIZE
            + self.instruction.payload.encode_size()
    }
}
