//! Account-transaction payloads and their canonical byte encodings.
//!
//! Every payload encoding begins with a single tag byte: the protocol's
//! discriminant for that transaction kind. The set of kinds is closed; the
//! dispatch is an exhaustive `match`, so adding a kind without adding its
//! encoder is a compile error rather than a runtime failure.

use super::schedule::Schedule;
use crate::{
    keys::{
        AggregationVerifyKey, CredentialDeploymentInfo, CredentialRegistrationId, EncryptedAmount,
        KeyProof, VerifyKey,
    },
    AccountAddress, Amount, Error, RewardFraction,
};
use bytes::{BufMut, Bytes};
use ledgerkit_codec::{EncodeSize, FixedSize, Write};
use std::fmt::Display;

/// Maximum byte length of a registered-data payload.
pub const MAX_REGISTERED_DATA: usize = 256;

/// Maximum byte length of a baker metadata URL.
pub const MAX_METADATA_URL: usize = 2_048;

/// Wire discriminants for account-transaction kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum TransactionKind {
    Transfer = 3,
    AddBaker = 4,
    RemoveBaker = 5,
    UpdateBakerStake = 6,
    UpdateBakerRestakeEarnings = 7,
    UpdateBakerKeys = 8,
    EncryptedTransfer = 16,
    TransferToEncrypted = 17,
    TransferToPublic = 18,
    TransferWithSchedule = 19,
    UpdateCredentials = 20,
    RegisterData = 21,
    ConfigureBaker = 25,
    ConfigureDelegation = 26,
}

impl TransactionKind {
    pub fn tag(&self) -> u8 {
        *self as u8
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Transfer => "simple transfer",
            Self::AddBaker => "add baker",
            Self::RemoveBaker => "remove baker",
            Self::UpdateBakerStake => "update baker stake",
            Self::UpdateBakerRestakeEarnings => "update baker restake earnings",
            Self::UpdateBakerKeys => "update baker keys",
            Self::EncryptedTransfer => "shielded transfer",
            Self::TransferToEncrypted => "shield amount",
            Self::TransferToPublic => "unshield amount",
            Self::TransferWithSchedule => "scheduled transfer",
            Self::UpdateCredentials => "update credentials",
            Self::RegisterData => "register data",
            Self::ConfigureBaker => "configure baker",
            Self::ConfigureDelegation => "configure delegation",
        };
        write!(f, "{name}")
    }
}

/// The full set of baker verification keys with their ownership proofs, in
/// wire order.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BakerKeys {
    pub election: VerifyKey,
    pub election_proof: KeyProof,
    pub signature: VerifyKey,
    pub signature_proof: KeyProof,
    pub aggregation: AggregationVerifyKey,
    pub aggregation_proof: KeyProof,
}

impl Write for BakerKeys {
    fn write(&self, buf: &mut impl BufMut) {
        self.election.write(buf);
        self.election_proof.write(buf);
        self.signature.write(buf);
        self.signature_proof.write(buf);
        self.aggregation.write(buf);
        self.aggregation_proof.write(buf);
    }
}

impl FixedSize for BakerKeys {
    const SIZE: usize = VerifyKey::SIZE * 2 + KeyProof::SIZE * 3 + AggregationVerifyKey::SIZE;
}

/// Who may delegate to a baker's pool.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OpenStatus {
    OpenForAll = 0,
    ClosedForNew = 1,
    ClosedForAll = 2,
}

impl Write for OpenStatus {
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(*self as u8);
    }
}

impl FixedSize for OpenStatus {
    const SIZE: usize = 1;
}

/// A baker pool metadata URL, bounded and length-prefixed on the wire.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MetadataUrl(String);

impl MetadataUrl {
    pub fn new(url: String) -> Result<Self, Error> {
        if url.len() > MAX_METADATA_URL {
            return Err(Error::InvalidLength("metadata url", url.len()));
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Write for MetadataUrl {
    fn write(&self, buf: &mut impl BufMut) {
        // Length checked in `new`.
        buf.put_u16(self.0.len() as u16);
        buf.put_slice(self.0.as_bytes());
    }
}

impl EncodeSize for MetadataUrl {
    fn encode_size(&self) -> usize {
        u16::SIZE + self.0.len()
    }
}

/// Target of a delegation: the passive pool or a specific baker.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DelegationTarget {
    Passive,
    Baker(u64),
}

impl Write for DelegationTarget {
    fn write(&self, buf: &mut impl BufMut) {
        match self {
            Self::Passive => buf.put_u8(0),
            Self::Baker(id) => {
                buf.put_u8(1);
                id.write(buf);
            }
        }
    }
}

impl EncodeSize for DelegationTarget {
    fn encode_size(&self) -> usize {
        match self {
            Self::Passive => 1,
            Self::Baker(_) => 1 + u64::SIZE,
        }
    }
}

/// Data registered on chain, bounded and length-prefixed on the wire.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RegisteredData(Bytes);

impl RegisteredData {
    pub fn new(data: Vec<u8>) -> Result<Self, Error> {
        if data.len() > MAX_REGISTERED_DATA {
            return Err(Error::InvalidLength("registered data", data.len()));
        }
        Ok(Self(Bytes::from(data)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Write for RegisteredData {
    fn write(&self, buf: &mut impl BufMut) {
        // Length checked in `new`.
        buf.put_u16(self.0.len() as u16);
        buf.put_slice(&self.0);
    }
}

impl EncodeSize for RegisteredData {
    fn encode_size(&self) -> usize {
        u16::SIZE + self.0.len()
    }
}

/// The partial fields of a configure-baker transaction. Each field is
/// optional and independently presence-flagged: the wire encoding is a 16-bit
/// bitmap followed by the present fields in bit order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConfigureBakerPayload {
    pub capital: Option<Amount>,
    pub restake_earnings: Option<bool>,
    pub open_status: Option<OpenStatus>,
    pub keys: Option<BakerKeys>,
    pub metadata_url: Option<MetadataUrl>,
    pub transaction_fee_commission: Option<RewardFraction>,
    pub baking_reward_commission: Option<RewardFraction>,
    pub finalization_reward_commission: Option<RewardFraction>,
}

impl ConfigureBakerPayload {
    fn bitmap(&self) -> u16 {
        let bits = [
            self.capital.is_some(),
            self.restake_earnings.is_some(),
            self.open_status.is_some(),
            self.keys.is_some(),
            self.metadata_url.is_some(),
            self.transaction_fee_commission.is_some(),
            self.baking_reward_commission.is_some(),
            self.finalization_reward_commission.is_some(),
        ];
        bits.iter()
            .enumerate()
            .fold(0, |acc, (i, set)| if *set { acc | 1 << i } else { acc })
    }

    /// Whether the payload carries new baker keys (they dominate the energy
    /// cost).
    pub fn has_keys(&self) -> bool {
        self.keys.is_some()
    }
}

impl Write for ConfigureBakerPayload {
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u16(self.bitmap());
        if let Some(capital) = &self.capital {
            capital.write(buf);
        }
        if let Some(restake) = &self.restake_earnings {
            restake.write(buf);
        }
        if let Some(status) = &self.open_status {
            status.write(buf);
        }
        if let Some(keys) = &self.keys {
            keys.write(buf);
        }
        if let Some(url) = &self.metadata_url {
            url.write(buf);
        }
        if let Some(commission) = &self.transaction_fee_commission {
            commission.write(buf);
        }
        if let Some(commission) = &self.baking_reward_commission {
            commission.write(buf);
        }
        if let Some(commission) = &self.finalization_reward_commission {
            commission.write(buf);
        }
    }
}

impl EncodeSize for ConfigureBakerPayload {
    fn encode_size(&self) -> usize {
        u16::SIZE
            + self.capital.map_or(0, |_| Amount::SIZE)
            + self.restake_earnings.map_or(0, |_| bool::SIZE)
            + self.open_status.map_or(0, |_| OpenStatus::SIZE)
            + self.keys.as_ref().map_or(0, |_| BakerKeys::SIZE)
            + self.metadata_url.as_ref().map_or(0, |url| url.encode_size())
            + self.transaction_fee_commission.map_or(0, |_| RewardFraction::SIZE)
            + self.baking_reward_commission.map_or(0, |_| RewardFraction::SIZE)
            + self
                .finalization_reward_commission
                .map_or(0, |_| RewardFraction::SIZE)
    }
}

/// The partial fields of a configure-delegation transaction, presence-flagged
/// like [`ConfigureBakerPayload`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConfigureDelegationPayload {
    pub capital: Option<Amount>,
    pub restake_earnings: Option<bool>,
    pub target: Option<DelegationTarget>,
}

impl ConfigureDelegationPayload {
    fn bitmap(&self) -> u16 {
        let bits = [
            self.capital.is_some(),
            self.restake_earnings.is_some(),
            self.target.is_some(),
        ];
        bits.iter()
            .enumerate()
            .fold(0, |acc, (i, set)| if *set { acc | 1 << i } else { acc })
    }
}

impl Write for ConfigureDelegationPayload {
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u16(self.bitmap());
        if let Some(capital) = &self.capital {
            capital.write(buf);
        }
        if let Some(restake) = &self.restake_earnings {
            restake.write(buf);
        }
        if let Some(target) = &self.target {
            target.write(buf);
        }
    }
}

impl EncodeSize for ConfigureDelegationPayload {
    fn encode_size(&self) -> usize {
        u16::SIZE
            + self.capital.map_or(0, |_| Amount::SIZE)
            + self.restake_earnings.map_or(0, |_| bool::SIZE)
            + self.target.map_or(0, |target| target.encode_size())
    }
}

/// A credential added by an update-credentials transaction, keyed by the slot
/// it occupies.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddedCredential {
    pub index: u8,
    pub credential: CredentialDeploymentInfo,
}

/// An account-transaction payload.
///
/// The payload's shape is fully determined by its kind: this is a tagged
/// union enforced by construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Payload {
    Transfer {
        to: AccountAddress,
        amount: Amount,
    },
    AddBaker {
        keys: BakerKeys,
        stake: Amount,
        restake_earnings: bool,
    },
    RemoveBaker,
    UpdateBakerStake {
        stake: Amount,
    },
    UpdateBakerRestakeEarnings {
        restake_earnings: bool,
    },
    UpdateBakerKeys {
        keys: BakerKeys,
    },
    EncryptedTransfer {
        to: AccountAddress,
        remaining_encrypted_amount: EncryptedAmount,
        transfer_amount: EncryptedAmount,
        index: u64,
        proof: Bytes,
    },
    TransferToEncrypted {
        amount: Amount,
    },
    TransferToPublic {
        remaining_encrypted_amount: EncryptedAmount,
        transfer_amount: Amount,
        index: u64,
        proof: Bytes,
    },
    TransferWithSchedule {
        to: AccountAddress,
        schedule: Schedule,
    },
    UpdateCredentials {
        added: Vec<AddedCredential>,
        removed: Vec<CredentialRegistrationId>,
        threshold: u8,
    },
    RegisterData {
        data: RegisteredData,
    },
    ConfigureBaker(ConfigureBakerPayload),
    ConfigureDelegation(ConfigureDelegationPayload),
}

impl Payload {
    /// The wire discriminant of this payload.
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Transfer { .. } => TransactionKind::Transfer,
            Self::AddBaker { .. } => TransactionKind::AddBaker,
            Self::RemoveBaker => TransactionKind::RemoveBaker,
            Self::UpdateBakerStake { .. } => TransactionKind::UpdateBakerStake,
            Self::UpdateBakerRestakeEarnings { .. } => {
                TransactionKind::UpdateBakerRestakeEarnings
            }
            Self::UpdateBakerKeys { .. } => TransactionKind::UpdateBakerKeys,
            Self::EncryptedTransfer { .. } => TransactionKind::EncryptedTransfer,
            Self::TransferToEncrypted { .. } => TransactionKind::TransferToEncrypted,
            Self::TransferToPublic { .. } => TransactionKind::TransferToPublic,
            Self::TransferWithSchedule { .. } => TransactionKind::TransferWithSchedule,
            Self::UpdateCredentials { .. } => TransactionKind::UpdateCredentials,
            Self::RegisterData { .. } => TransactionKind::RegisterData,
            Self::ConfigureBaker(_) => TransactionKind::ConfigureBaker,
            Self::ConfigureDelegation(_) => TransactionKind::ConfigureDelegation,
        }
    }

    /// Checks the bounds the wire format's count prefixes impose. Called at
    /// transaction construction so `write` stays infallible.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Self::UpdateCredentials { added, removed, .. } = self {
            if added.len() > usize::from(u8::MAX) {
                return Err(Error::InvalidLength("added credentials", added.len()));
            }
            if removed.len() > usize::from(u8::MAX) {
                return Err(Error::InvalidLength("removed credentials", removed.len()));
            }
        }
        Ok(())
    }
}

impl Write for Payload {
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(self.kind().tag());
        match self {
            Self::Transfer { to, amount } => {
                to.write(buf);
                amount.write(buf);
            }
            Self::AddBaker {
                keys,
                stake,
                restake_earnings,
            } => {
                keys.write(buf);
                stake.write(buf);
                restake_earnings.write(buf);
            }
            Self::RemoveBaker => {}
            Self::UpdateBakerStake { stake } => {
                stake.write(buf);
            }
            Self::UpdateBakerRestakeEarnings { restake_earnings } => {
                restake_earnings.write(buf);
            }
            Self::UpdateBakerKeys { keys } => {
                keys.write(buf);
            }
            Self::EncryptedTransfer {
                to,
                remaining_encrypted_amount,
                transfer_amount,
                index,
                proof,
            } => {
                to.write(buf);
                remaining_encrypted_amount.write(buf);
                transfer_amount.write(buf);
                index.write(buf);
                // The proof consumes the remainder of the payload: no length
                // prefix.
                buf.put_slice(proof);
            }
            Self::TransferToEncrypted { amount } => {
                amount.write(buf);
            }
            Self::TransferToPublic {
                remaining_encrypted_amount,
                transfer_amount,
                index,
                proof,
            } => {
                remaining_encrypted_amount.write(buf);
                transfer_amount.write(buf);
                index.write(buf);
                buf.put_slice(proof);
            }
            Self::TransferWithSchedule { to, schedule } => {
                to.write(buf);
                schedule.write(buf);
            }
            Self::UpdateCredentials {
                added,
                removed,
                threshold,
            } => {
                // Lengths checked in `validate`.
                buf.put_u8(added.len() as u8);
                for entry in added {
                    buf.put_u8(entry.index);
                    entry.credential.write(buf);
                }
                buf.put_u8(removed.len() as u8);
                for id in removed {
                    id.write(buf);
                }
                buf.put_u8(*threshold);
            }
            Self::RegisterData { data } => {
                data.write(buf);
            }
            Self::ConfigureBaker(payload) => {
                payload.write(buf);
            }
            Self::ConfigureDelegation(payload) => {
                payload.write(buf);
            }
        }
    }
}

impl EncodeSize for Payload {
    fn encode_size(&self) -> usize {
        1 + match self {
            Self::Transfer { .. } => AccountAddress::SIZE + Amount::SIZE,
            Self::AddBaker { .. } => BakerKeys::SIZE + Amount::SIZE + bool::SIZE,
            Self::RemoveBaker => 0,
            Self::UpdateBakerStake { .. } => Amount::SIZE,
            Self::UpdateBakerRestakeEarnings { .. } => bool::SIZE,
            Self::UpdateBakerKeys { .. } => BakerKeys::SIZE,
            Self::EncryptedTransfer { proof, .. } => {
                AccountAddress::SIZE + EncryptedAmount::SIZE * 2 + u64::SIZE + proof.len()
            }
            Self::TransferToEncrypted { .. } => Amount::SIZE,
            Self::TransferToPublic { proof, .. } => {
                EncryptedAmount::SIZE + Amount::SIZE + u64::SIZE + proof.len()
            }
            Self::TransferWithSchedule { schedule, .. } => {
                AccountAddress::SIZE + schedule.encode_size()
            }
            Self::UpdateCredentials { added, removed, .. } => {
                u8::SIZE
                    + added
                        .iter()
                        .map(|entry| u8::SIZE + entry.credential.encode_size())
                        .sum::<usize>()
                    + u8::SIZE
                    + removed.len() * CredentialRegistrationId::SIZE
                    + u8::SIZE
            }
            Self::RegisterData { data } => data.encode_size(),
            Self::ConfigureBaker(payload) => payload.encode_size(),
            Self::ConfigureDelegation(payload) => payload.encode_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerkit_codec::Encode;
    use ledgerkit_utils::hex;
    use std::str::FromStr;

    const ADDRESS: &str = "3UbdTrP5kcEioJRCyiCacAdpAYfyezPSVfrys8QDsHJUiVXjKf";

    fn address() -> AccountAddress {
        AccountAddress::from_str(ADDRESS).unwrap()
    }

    fn baker_keys() -> BakerKeys {
        BakerKeys {
            election: VerifyKey::from([0x01; 32]),
            election_proof: KeyProof::from([0x02; 64]),
            signature: VerifyKey::from([0x03; 32]),
            signature_proof: KeyProof::from([0x04; 64]),
            aggregation: AggregationVerifyKey::from([0x05; 96]),
            aggregation_proof: KeyProof::from([0x06; 64]),
        }
    }

    #[test]
    fn test_transfer_layout() {
        // tag(1) || toAddress(32) || amount(8)
        let payload = Payload::Transfer {
            to: address(),
            amount: Amount::from_micro(100),
        };
        let encoded = payload.encode();
        assert_eq!(encoded.len(), 41);
        assert_eq!(
            hex(&encoded),
            "03460dfe2e6839447eb4381957f8d5ddecb4339676faba1ce4284ff41acca881d20000000000000064"
        );
    }

    #[test]
    fn test_determinism() {
        let payload = Payload::Transfer {
            to: address(),
            amount: Amount::from_micro(100),
        };
        assert_eq!(payload.encode(), payload.clone().encode());
    }

    #[test]
    fn test_scheduled_transfer_layout() {
        let schedule = Schedule::new(vec![
            super::super::schedule::SchedulePoint {
                timestamp_ms: 1_700_000_000_000,
                amount: Amount::from_micro(50),
            },
            super::super::schedule::SchedulePoint {
                timestamp_ms: 1_700_000_600_000,
                amount: Amount::from_micro(50),
            },
        ])
        .unwrap();
        let payload = Payload::TransferWithSchedule {
            to: address(),
            schedule,
        };
        let encoded = payload.encode();
        assert_eq!(encoded.len(), 1 + 32 + 1 + 2 * 16);
        assert_eq!(
            hex(&encoded),
            "13460dfe2e6839447eb4381957f8d5ddecb4339676faba1ce4284ff41acca881d2020000018bcfe5680000000000000000320000018bcfee8fc00000000000000032"
        );
    }

    #[test]
    fn test_shielded_payload_layouts() {
        let proof = Bytes::from(vec![0xAA; 100]);
        let unshield = Payload::TransferToPublic {
            remaining_encrypted_amount: EncryptedAmount::from([0x11; 192]),
            transfer_amount: Amount::from_micro(7),
            index: 3,
            proof: proof.clone(),
        };
        let encoded = unshield.encode();
        assert_eq!(encoded.len(), 1 + 192 + 8 + 8 + 100);
        assert_eq!(encoded[0], 18);
        // The proof trails the payload with no length prefix.
        assert_eq!(&encoded[encoded.len() - 100..], &proof[..]);

        let shielded = Payload::EncryptedTransfer {
            to: address(),
            remaining_encrypted_amount: EncryptedAmount::from([0x11; 192]),
            transfer_amount: EncryptedAmount::from([0x22; 192]),
            index: 3,
            proof,
        };
        assert_eq!(shielded.encode().len(), 1 + 32 + 192 * 2 + 8 + 100);
        assert_eq!(shielded.encode()[0], 16);
    }

    #[test]
    fn test_baker_layouts() {
        let add = Payload::AddBaker {
            keys: baker_keys(),
            stake: Amount::from_micro(1_000_000),
            restake_earnings: true,
        };
        let encoded = add.encode();
        assert_eq!(encoded.len(), 1 + BakerKeys::SIZE + 8 + 1);
        assert_eq!(encoded[0], 4);
        assert_eq!(encoded[encoded.len() - 1], 1);

        assert_eq!(Payload::RemoveBaker.encode().len(), 1);
        assert_eq!(Payload::RemoveBaker.encode()[0], 5);

        let keys = Payload::UpdateBakerKeys { keys: baker_keys() };
        assert_eq!(keys.encode().len(), 1 + BakerKeys::SIZE);
    }

    #[test]
    fn test_update_credentials_layout() {
        let credential = CredentialDeploymentInfo::from(vec![0xCD; 10]);
        let payload = Payload::UpdateCredentials {
            added: vec![AddedCredential {
                index: 2,
                credential,
            }],
            removed: vec![CredentialRegistrationId::from([0x07; 48])],
            threshold: 1,
        };
        let encoded = payload.encode();
        // tag || count || (index || cdi) || count || credId || threshold
        assert_eq!(encoded.len(), 1 + 1 + (1 + 10) + 1 + 48 + 1);
        assert_eq!(encoded[0], 20);
        assert_eq!(encoded[1], 1); // one added
        assert_eq!(encoded[2], 2); // slot index
        assert_eq!(encoded[encoded.len() - 1], 1); // threshold
    }

    #[test]
    fn test_configure_baker_bitmap() {
        let payload = Payload::ConfigureBaker(ConfigureBakerPayload {
            capital: Some(Amount::from_micro(5)),
            restake_earnings: Some(false),
            metadata_url: Some(MetadataUrl::new("https://pool.example".into()).unwrap()),
            ..Default::default()
        });
        let encoded = payload.encode();
        assert_eq!(encoded[0], 25);
        // Bits 0 (capital), 1 (restake), 4 (metadata url).
        assert_eq!(&encoded[1..3], &[0x00, 0x13]);
        assert_eq!(encoded.len(), 1 + 2 + 8 + 1 + (2 + 20));

        let empty = Payload::ConfigureBaker(ConfigureBakerPayload::default());
        assert_eq!(&empty.encode()[..], &[25, 0x00, 0x00]);
    }

    #[test]
    fn test_configure_delegation_layout() {
        let payload = Payload::ConfigureDelegation(ConfigureDelegationPayload {
            capital: Some(Amount::from_micro(9)),
            restake_earnings: None,
            target: Some(DelegationTarget::Baker(42)),
        });
        let encoded = payload.encode();
        assert_eq!(encoded[0], 26);
        // Bits 0 (capital) and 2 (target).
        assert_eq!(&encoded[1..3], &[0x00, 0x05]);
        assert_eq!(encoded.len(), 1 + 2 + 8 + (1 + 8));

        let passive = Payload::ConfigureDelegation(ConfigureDelegationPayload {
            target: Some(DelegationTarget::Passive),
            ..Default::default()
        });
        assert_eq!(&passive.encode()[..], &[26, 0x00, 0x04, 0x00]);
    }

    #[test]
    fn test_register_data_layout() {
        let payload = Payload::RegisterData {
            data: RegisteredData::new(vec![1, 2, 3]).unwrap(),
        };
        assert_eq!(&payload.encode()[..], &[21, 0, 3, 1, 2, 3]);
        assert!(RegisteredData::new(vec![0; MAX_REGISTERED_DATA + 1]).is_err());
    }

    #[test]
    fn test_every_kind_tagged() {
        // The first byte of every encoding is the kind discriminant.
        let payloads = [
            Payload::Transfer {
                to: address(),
                amount: Amount::ZERO,
            },
            Payload::RemoveBaker,
            Payload::UpdateBakerStake {
                stake: Amount::ZERO,
            },
            Payload::UpdateBakerRestakeEarnings {
                restake_earnings: false,
            },
            Payload::TransferToEncrypted {
                amount: Amount::ZERO,
            },
            Payload::ConfigureDelegation(ConfigureDelegationPayload::default()),
        ];
        for payload in payloads {
            assert_eq!(payload.encode()[0], payload.kind().tag());
            assert_eq!(payload.encode().len(), payload.encode_size());
        }
    }
}
