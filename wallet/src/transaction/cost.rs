//! The protocol's energy cost model.
//!
//! `energy = A * signatures + B * (payload size + header size) + kind cost`.
//! The formula must track the consensus cost model exactly: drift in either
//! direction means rejected transactions or user overpayment. The payload
//! size term is always measured from the actual serialization, guaranteeing
//! consistency with the `payloadSize` field the header carries.

use super::{header::TransactionHeader, payload::Payload};
use crate::{Amount, Energy, Error, Fraction};
use ledgerkit_codec::{EncodeSize, FixedSize};

/// Energy charged per signature (`A`).
pub const ENERGY_PER_SIGNATURE: u64 = 100;

/// Energy charged per serialized byte, header included (`B`).
pub const ENERGY_PER_BYTE: u64 = 1;

/// Energy charged per release of a scheduled transfer.
pub const ENERGY_PER_RELEASE: u64 = 364;

/// Energy charged per credential added by an update-credentials transaction.
pub const ENERGY_PER_ADDED_CREDENTIAL: u64 = 54_000;

/// The kind-specific constant of the cost formula.
pub fn kind_cost(payload: &Payload) -> u64 {
    match payload {
        Payload::Transfer { .. } => 300,
        Payload::AddBaker { .. } => 4_050,
        Payload::RemoveBaker => 300,
        Payload::UpdateBakerStake { .. } => 300,
        Payload::UpdateBakerRestakeEarnings { .. } => 300,
        Payload::UpdateBakerKeys { .. } => 4_050,
        Payload::EncryptedTransfer { .. } => 27_000,
        Payload::TransferToEncrypted { .. } => 600,
        Payload::TransferToPublic { .. } => 14_850,
        Payload::TransferWithSchedule { schedule, .. } => {
            ENERGY_PER_RELEASE * schedule.len() as u64
        }
        Payload::UpdateCredentials { added, .. } => {
            500 + ENERGY_PER_ADDED_CREDENTIAL * added.len() as u64
        }
        Payload::RegisterData { .. } => 300,
        // Supplying new keys dominates the cost of a baker configuration.
        Payload::ConfigureBaker(config) => {
            if config.has_keys() {
                4_050
            } else {
                300
            }
        }
        Payload::ConfigureDelegation(_) => 300,
    }
}

/// The raw cost formula, usable with an already-measured payload size.
pub fn calculate_cost(signatures: u32, payload_size: u32, kind_cost: u64) -> Energy {
    let size = u64::from(payload_size) + TransactionHeader::SIZE as u64;
    Energy(ENERGY_PER_SIGNATURE * u64::from(signatures) + ENERGY_PER_BYTE * size + kind_cost)
}

/// Energy required by `payload` when signed by `signatures` keys.
///
/// The payload size is derived by serializing the payload and measuring it,
/// not estimated.
pub fn transaction_energy(payload: &Payload, signatures: u32) -> Energy {
    calculate_cost(signatures, payload.encode_size() as u32, kind_cost(payload))
}

/// Converts an energy figure to a micro-unit fee for display, using the
/// current exchange rates. Exact rational arithmetic with a ceiling: the
/// displayed fee never understates the charge.
pub fn estimate_fee(
    energy: Energy,
    euro_per_energy: Fraction,
    micro_per_euro: Fraction,
) -> Result<Amount, Error> {
    let numerator = u128::from(energy.0)
        .checked_mul(u128::from(euro_per_energy.numerator()))
        .and_then(|n| n.checked_mul(u128::from(micro_per_euro.numerator())))
        .ok_or(Error::Range("fee"))?;
    let denominator =
        u128::from(euro_per_energy.denominator()) * u128::from(micro_per_euro.denominator());
    let fee = numerator.div_ceil(denominator);
    let fee = u64::try_from(fee).map_err(|_| Error::Range("fee"))?;
    Ok(Amount::from_micro(fee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{transaction::schedule::Schedule, AccountAddress};
    use std::str::FromStr;
    use test_case::test_case;

    fn transfer() -> Payload {
        Payload::Transfer {
            to: AccountAddress::from_str("3UbdTrP5kcEioJRCyiCacAdpAYfyezPSVfrys8QDsHJUiVXjKf")
                .unwrap(),
            amount: Amount::from_micro(100),
        }
    }

    #[test_case(11, 233, 300 ; "simple transfer with 11 keys and a 233-byte payload")]
    #[test_case(1, 41, 300 ; "single-signature transfer")]
    #[test_case(23, 1_000, 8_372 ; "scheduled transfer with 23 releases")]
    fn test_formula(signatures: u32, payload_size: u32, kind: u64) {
        let expected = ENERGY_PER_SIGNATURE * u64::from(signatures)
            + ENERGY_PER_BYTE * (u64::from(payload_size) + 60)
            + kind;
        assert_eq!(calculate_cost(signatures, payload_size, kind), Energy(expected));
    }

    #[test]
    fn test_transaction_energy_measures_payload() {
        // 41-byte transfer payload, one signature: 100 + (41 + 60) + 300.
        assert_eq!(transaction_energy(&transfer(), 1), Energy(501));
    }

    #[test]
    fn test_scheduled_cost_scales_with_releases() {
        let schedule = Schedule::regular_interval(Amount::from_micro(1_000), 23, 0, 1).unwrap();
        let payload = Payload::TransferWithSchedule {
            to: AccountAddress::from_str("3UbdTrP5kcEioJRCyiCacAdpAYfyezPSVfrys8QDsHJUiVXjKf")
                .unwrap(),
            schedule,
        };
        assert_eq!(kind_cost(&payload), 23 * ENERGY_PER_RELEASE);
    }

    #[test]
    fn test_estimate_fee_exact() {
        // 501 energy at 1/50 euro per energy and 1_000_000/1 micro per euro:
        // 501 * 1_000_000 / 50 = 10_020_000 exactly.
        let fee = estimate_fee(
            Energy(501),
            Fraction::new(1, 50).unwrap(),
            Fraction::new(1_000_000, 1).unwrap(),
        )
        .unwrap();
        assert_eq!(fee, Amount::from_micro(10_020_000));
    }

    #[test]
    fn test_estimate_fee_rounds_up() {
        // 1 * 1/3 rounds up to a full micro-unit.
        let fee = estimate_fee(
            Energy(1),
            Fraction::new(1, 3).unwrap(),
            Fraction::new(1, 1).unwrap(),
        )
        .unwrap();
        assert_eq!(fee, Amount::from_micro(1));
    }
}
