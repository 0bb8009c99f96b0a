//! Governance update payloads and their canonical byte encodings.
//!
//! Like account-transaction payloads, each update type has a fixed-layout
//! encoder in a closed, exhaustively matched set: adding an update type
//! without its encoder is a compile error.

use crate::{keys::VerifyKey, AccountAddress, Error, Fraction, RewardFraction};
use bytes::{BufMut, Bytes};
use ledgerkit_codec::{EncodeSize, FixedSize, Write};
use ledgerkit_utils::sha256::Digest;
use std::fmt::Display;

/// Wire discriminants for governance update types.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum UpdateType {
    Protocol = 1,
    EuroPerEnergy = 3,
    MicroUnitPerEuro = 4,
    FoundationAccount = 5,
    MintDistribution = 6,
    TransactionFeeDistribution = 7,
    RootKeys = 10,
    Level1Keys = 11,
    CooldownParameters = 13,
    PoolParameters = 14,
    TimeParameters = 15,
    TimeoutParameters = 16,
    CreateToken = 17,
}

impl UpdateType {
    pub fn tag(&self) -> u8 {
        *self as u8
    }
}

impl Display for UpdateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Protocol => "protocol update",
            Self::EuroPerEnergy => "euro per energy",
            Self::MicroUnitPerEuro => "micro-unit per euro",
            Self::FoundationAccount => "foundation account",
            Self::MintDistribution => "mint distribution",
            Self::TransactionFeeDistribution => "transaction fee distribution",
            Self::RootKeys => "root governance keys",
            Self::Level1Keys => "level-1 governance keys",
            Self::CooldownParameters => "cooldown parameters",
            Self::PoolParameters => "pool parameters",
            Self::TimeParameters => "time parameters",
            Self::TimeoutParameters => "timeout parameters",
            Self::CreateToken => "create token",
        };
        write!(f, "{name}")
    }
}

/// An exponential mint rate: `mantissa * 10^-exponent` per payday.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct MintRate {
    pub mantissa: u32,
    pub exponent: u8,
}

impl Write for MintRate {
    fn write(&self, buf: &mut impl BufMut) {
        self.mantissa.write(buf);
        self.exponent.write(buf);
    }
}

impl FixedSize for MintRate {
    const SIZE: usize = u32::SIZE + u8::SIZE;
}

/// An inclusive commission range a pool owner may choose from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CommissionRange {
    pub min: RewardFraction,
    pub max: RewardFraction,
}

impl Write for CommissionRange {
    fn write(&self, buf: &mut impl BufMut) {
        self.min.write(buf);
        self.max.write(buf);
    }
}

impl FixedSize for CommissionRange {
    const SIZE: usize = RewardFraction::SIZE * 2;
}

/// A governance key collection with its signing threshold, for root and
/// level-1 key-set updates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyCollection {
    keys: Vec<VerifyKey>,
    threshold: u16,
}

impl KeyCollection {
    /// Creates a collection, rejecting thresholds the key set cannot meet.
    pub fn new(keys: Vec<VerifyKey>, threshold: u16) -> Result<Self, Error> {
        if u16::try_from(keys.len()).is_err() {
            return Err(Error::InvalidLength("key collection", keys.len()));
        }
        if threshold == 0 || usize::from(threshold) > keys.len() {
            return Err(Error::Range("key threshold"));
        }
        Ok(Self { keys, threshold })
    }

    pub fn keys(&self) -> &[VerifyKey] {
        &self.keys
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }
}

impl Write for KeyCollection {
    fn write(&self, buf: &mut impl BufMut) {
        // Length checked in `new`.
        buf.put_u16(self.keys.len() as u16);
        for key in &self.keys {
            key.write(buf);
        }
        self.threshold.write(buf);
    }
}

impl EncodeSize for KeyCollection {
    fn encode_size(&self) -> usize {
        u16::SIZE + self.keys.len() * VerifyKey::SIZE + u16::SIZE
    }
}

/// Pool commission settings and bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PoolParameters {
    pub passive_finalization_commission: RewardFraction,
    pub passive_baking_commission: RewardFraction,
    pub passive_transaction_commission: RewardFraction,
    pub finalization_commission_range: CommissionRange,
    pub baking_commission_range: CommissionRange,
    pub transaction_commission_range: CommissionRange,
    pub minimum_equity_capital: u64,
    pub capital_bound: RewardFraction,
    pub leverage_bound: Fraction,
}

impl Write for PoolParameters {
    fn write(&self, buf: &mut impl BufMut) {
        self.passive_finalization_commission.write(buf);
        self.passive_baking_commission.write(buf);
        self.passive_transaction_commission.write(buf);
        self.finalization_commission_range.write(buf);
        self.baking_commission_range.write(buf);
        self.transaction_commission_range.write(buf);
        self.minimum_equity_capital.write(buf);
        self.capital_bound.write(buf);
        self.leverage_bound.write(buf);
    }
}

impl FixedSize for PoolParameters {
    const SIZE: usize = RewardFraction::SIZE * 3
        + CommissionRange::SIZE * 3
        + u64::SIZE
        + RewardFraction::SIZE
        + Fraction::SIZE;
}

/// A protocol update: human-readable message, specification link and hash,
/// and an opaque auxiliary blob consumed by the new protocol version.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProtocolUpdate {
    pub message: String,
    pub specification_url: String,
    pub specification_hash: Digest,
    pub specification_auxiliary_data: Bytes,
}

impl Write for ProtocolUpdate {
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u64(self.message.len() as u64);
        buf.put_slice(self.message.as_bytes());
        buf.put_u64(self.specification_url.len() as u64);
        buf.put_slice(self.specification_url.as_bytes());
        self.specification_hash.write(buf);
        // Auxiliary data consumes the remainder of the payload.
        buf.put_slice(&self.specification_auxiliary_data);
    }
}

impl EncodeSize for ProtocolUpdate {
    fn encode_size(&self) -> usize {
        u64::SIZE
            + self.message.len()
            + u64::SIZE
            + self.specification_url.len()
            + Digest::SIZE
            + self.specification_auxiliary_data.len()
    }
}

/// Creation of a protocol-level token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateToken {
    pub token_id: String,
    pub module_ref: [u8; 32],
    pub decimals: u8,
    pub initialization_parameters: Bytes,
}

impl CreateToken {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.token_id.is_empty() || u8::try_from(self.token_id.len()).is_err() {
            return Err(Error::InvalidLength("token id", self.token_id.len()));
        }
        if u32::try_from(self.initialization_parameters.len()).is_err() {
            return Err(Error::InvalidLength(
                "token initialization parameters",
                self.initialization_parameters.len(),
            ));
        }
        Ok(())
    }
}

impl Write for CreateToken {
    fn write(&self, buf: &mut impl BufMut) {
        // Lengths checked in `validate`.
        buf.put_u8(self.token_id.len() as u8);
        buf.put_slice(self.token_id.as_bytes());
        self.module_ref.write(buf);
        buf.put_u8(self.decimals);
        buf.put_u32(self.initialization_parameters.len() as u32);
        buf.put_slice(&self.initialization_parameters);
    }
}

impl EncodeSize for CreateToken {
    fn encode_size(&self) -> usize {
        u8::SIZE
            + self.token_id.len()
            + self.module_ref.len()
            + u8::SIZE
            + u32::SIZE
            + self.initialization_parameters.len()
    }
}

/// A governance update payload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UpdatePayload {
    Protocol(ProtocolUpdate),
    EuroPerEnergy(Fraction),
    MicroUnitPerEuro(Fraction),
    FoundationAccount(AccountAddress),
    MintDistribution {
        baking_reward: RewardFraction,
        finalization_reward: RewardFraction,
    },
    TransactionFeeDistribution {
        baker: RewardFraction,
        gas_account: RewardFraction,
    },
    RootKeys(KeyCollection),
    Level1Keys(KeyCollection),
    CooldownParameters {
        pool_owner_cooldown_s: u64,
        delegator_cooldown_s: u64,
    },
    PoolParameters(PoolParameters),
    TimeParameters {
        reward_period_length: u64,
        mint_per_payday: MintRate,
    },
    TimeoutParameters {
        base_ms: u64,
        increase: Fraction,
        decrease: Fraction,
    },
    CreateToken(CreateToken),
}

impl UpdatePayload {
    /// The wire discriminant of this payload.
    pub fn update_type(&self) -> UpdateType {
        match self {
            Self::Protocol(_) => UpdateType::Protocol,
            Self::EuroPerEnergy(_) => UpdateType::EuroPerEnergy,
            Self::MicroUnitPerEuro(_) => UpdateType::MicroUnitPerEuro,
            Self::FoundationAccount(_) => UpdateType::FoundationAccount,
            Self::MintDistribution { .. } => UpdateType::MintDistribution,
            Self::TransactionFeeDistribution { .. } => UpdateType::TransactionFeeDistribution,
            Self::RootKeys(_) => UpdateType::RootKeys,
            Self::Level1Keys(_) => UpdateType::Level1Keys,
            Self::CooldownParameters { .. } => UpdateType::CooldownParameters,
            Self::PoolParameters(_) => UpdateType::PoolParameters,
            Self::TimeParameters { .. } => UpdateType::TimeParameters,
            Self::TimeoutParameters { .. } => UpdateType::TimeoutParameters,
            Self::CreateToken(_) => UpdateType::CreateToken,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        match self {
            Self::CreateToken(token) => token.validate(),
            _ => Ok(()),
        }
    }
}

impl Write for UpdatePayload {
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(self.update_type().tag());
        match self {
            Self::Protocol(update) => update.write(buf),
            Self::EuroPerEnergy(rate) | Self::MicroUnitPerEuro(rate) => rate.write(buf),
            Self::FoundationAccount(address) => address.write(buf),
            Self::MintDistribution {
                baking_reward,
                finalization_reward,
            } => {
                baking_reward.write(buf);
                finalization_reward.write(buf);
            }
            Self::TransactionFeeDistribution { baker, gas_account } => {
                baker.write(buf);
                gas_account.write(buf);
            }
            Self::RootKeys(keys) | Self::Level1Keys(keys) => keys.write(buf),
            Self::CooldownParameters {
                pool_owner_cooldown_s,
                delegator_cooldown_s,
            } => {
                pool_owner_cooldown_s.write(buf);
                delegator_cooldown_s.write(buf);
            }
            Self::PoolParameters(parameters) => parameters.write(buf),
            Self::TimeParameters {
                reward_period_length,
                mint_per_payday,
            } => {
                reward_period_length.write(buf);
                mint_per_payday.write(buf);
            }
            Self::TimeoutParameters {
                base_ms,
                increase,
                decrease,
            } => {
                base_ms.write(buf);
                increase.write(buf);
                decrease.write(buf);
            }
            Self::CreateToken(token) => token.write(buf),
        }
    }
}

impl EncodeSize for UpdatePayload {
    fn encode_size(&self) -> usize {
        1 + match self {
            Self::Protocol(update) => update.encode_size(),
            Self::EuroPerEnergy(_) | Self::MicroUnitPerEuro(_) => Fraction::SIZE,
            Self::FoundationAccount(_) => AccountAddress::SIZE,
            Self::MintDistribution { .. } => RewardFraction::SIZE * 2,
            Self::TransactionFeeDistribution { .. } => RewardFraction::SIZE * 2,
            Self::RootKeys(keys) | Self::Level1Keys(keys) => keys.encode_size(),
            Self::CooldownParameters { .. } => u64::SIZE * 2,
            Self::PoolParameters(_) => PoolParameters::SIZE,
            Self::TimeParameters { .. } => u64::SIZE + MintRate::SIZE,
            Self::TimeoutParameters { .. } => u64::SIZE + Fraction::SIZE * 2,
            Self::CreateToken(token) => token.encode_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerkit_codec::Encode;
    use ledgerkit_utils::hex;
    use std::str::FromStr;

    #[test]
    fn test_exchange_rate_layout() {
        // tag(1) || numerator(8) || denominator(8)
        let payload = UpdatePayload::MicroUnitPerEuro(Fraction::new(1, 50_000).unwrap());
        let encoded = payload.encode();
        assert_eq!(
            hex(&encoded),
            "040000000000000001000000000000c350"
        );

        let euro = UpdatePayload::EuroPerEnergy(Fraction::new(1, 50_000).unwrap());
        assert_eq!(euro.encode()[0], 3);
    }

    #[test]
    fn test_foundation_account_layout() {
        let address =
            AccountAddress::from_str("3UbdTrP5kcEioJRCyiCacAdpAYfyezPSVfrys8QDsHJUiVXjKf").unwrap();
        let payload = UpdatePayload::FoundationAccount(address);
        let encoded = payload.encode();
        assert_eq!(encoded.len(), 1 + 32);
        assert_eq!(encoded[0], 5);
    }

    #[test]
    fn test_key_collection_layout() {
        let keys = KeyCollection::new(vec![VerifyKey::from([0x01; 32]); 3], 2).unwrap();
        let payload = UpdatePayload::RootKeys(keys.clone());
        let encoded = payload.encode();
        // tag || count(2) || 3 keys || threshold(2)
        assert_eq!(encoded.len(), 1 + 2 + 3 * 32 + 2);
        assert_eq!(&encoded[1..3], &[0, 3]);
        assert_eq!(&encoded[encoded.len() - 2..], &[0, 2]);

        assert_eq!(UpdatePayload::Level1Keys(keys).encode()[0], 11);
    }

    #[test]
    fn test_key_collection_threshold_bounds() {
        assert!(KeyCollection::new(vec![VerifyKey::from([0; 32]); 2], 0).is_err());
        assert!(KeyCollection::new(vec![VerifyKey::from([0; 32]); 2], 3).is_err());
    }

    #[test]
    fn test_protocol_update_layout() {
        let payload = UpdatePayload::Protocol(ProtocolUpdate {
            message: "upgrade".into(),
            specification_url: "https://spec.example".into(),
            specification_hash: ledgerkit_utils::sha256::hash(b"specification"),
            specification_auxiliary_data: Bytes::from_static(&[0xEE; 5]),
        });
        let encoded = payload.encode();
        assert_eq!(encoded[0], 1);
        assert_eq!(encoded.len(), 1 + 8 + 7 + 8 + 20 + 32 + 5);
        assert_eq!(encoded.len(), payload.encode_size());
        // Auxiliary data trails with no length prefix.
        assert_eq!(&encoded[encoded.len() - 5..], &[0xEE; 5]);
    }

    #[test]
    fn test_pool_parameters_fixed_size() {
        let fraction = RewardFraction::new(10_000).unwrap();
        let range = CommissionRange {
            min: fraction,
            max: RewardFraction::new(20_000).unwrap(),
        };
        let payload = UpdatePayload::PoolParameters(PoolParameters {
            passive_finalization_commission: fraction,
            passive_baking_commission: fraction,
            passive_transaction_commission: fraction,
            finalization_commission_range: range,
            baking_commission_range: range,
            transaction_commission_range: range,
            minimum_equity_capital: 14_000_000_000,
            capital_bound: RewardFraction::new(10_000).unwrap(),
            leverage_bound: Fraction::new(3, 1).unwrap(),
        });
        assert_eq!(payload.encode().len(), 1 + PoolParameters::SIZE);
        assert_eq!(PoolParameters::SIZE, 64);
    }

    #[test]
    fn test_create_token_layout() {
        let token = CreateToken {
            token_id: "EURe".into(),
            module_ref: [0x44; 32],
            decimals: 6,
            initialization_parameters: Bytes::from_static(&[1, 2, 3]),
        };
        token.validate().unwrap();
        let payload = UpdatePayload::CreateToken(token);
        let encoded = payload.encode();
        assert_eq!(encoded[0], 17);
        assert_eq!(encoded[1], 4); // token id length
        assert_eq!(encoded.len(), 1 + 1 + 4 + 32 + 1 + 4 + 3);
    }

    #[test]
    fn test_create_token_validation() {
        let empty = CreateToken {
            token_id: String::new(),
            module_ref: [0; 32],
            decimals: 0,
            initialization_parameters: Bytes::new(),
        };
        assert!(empty.validate().is_err());
    }
}
