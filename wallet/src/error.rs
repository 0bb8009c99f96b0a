//! Error types for wallet serialization operations.
//!
//! Every error here propagates synchronously to the caller: byte encoding is
//! deterministic, so retrying cannot change the outcome. Network-facing
//! failures belong to the node and hardware-wallet collaborators, not this
//! layer.

use thiserror::Error;

/// Error type for wallet serialization operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed external input (hex strings, decimal strings) caught at the
    /// boundary where it enters the codec.
    #[error("malformed {0}: {1}")]
    Format(&'static str, &'static str),
    /// A numeric value does not fit the width its wire field declares.
    #[error("value out of range for {0}")]
    Range(&'static str),
    /// A collection exceeds the bound its wire count prefix can express.
    #[error("invalid length for {0}: {1}")]
    InvalidLength(&'static str, usize),
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] bs58::decode::Error),
    /// A non-power-of-10 resolution was supplied to the fraction codec. This
    /// indicates a programming error upstream.
    #[error("resolution {0} is not a power of 10")]
    InvalidResolution(u128),
    #[error("fraction denominator is zero")]
    ZeroDenominator,
    /// Computing a transaction hash before the signature threshold is met
    /// would yield a hash that never matches the finalized on-chain one.
    #[error("insufficient signatures: {found} < threshold {threshold}")]
    InsufficientSignatures { found: usize, threshold: usize },
    /// A signature's verify key is absent from the current authorization set.
    #[error("signing key not present in the current authorization key set")]
    UnknownSigningKey,
}
