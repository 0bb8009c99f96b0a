//! Construction, canonical serialization, and hashing of account
//! transactions and governance update instructions.
//!
//! All wire encodings are big-endian and byte-exact: the bytes produced
//! here are the preimages of the digests that hardware wallets sign and
//! of the hashes that identify block items on chain. Values that would
//! make serialization ambiguous (oversized lists, zero denominators,
//! out-of-range fractions) are rejected at construction time so writing
//! is infallible.
//!
//! # Example
//!
//! Build a simple transfer, compute the digest a key signs, attach the
//! signature, and recover the on-chain hash:
//!
//! ```rust
//! use ledgerkit_wallet::{
//!     keys::Signature,
//!     transaction::{
//!         AccountTransaction, Nonce, Payload, SignedTransaction, TransactionSignature,
//!         TransactionTime,
//!     },
//!     AccountAddress, Amount,
//! };
//!
//! let sender: AccountAddress = "3UbdTrP5kcEioJRCyiCacAdpAYfyezPSVfrys8QDsHJUiVXjKf"
//!     .parse()
//!     .unwrap();
//! let payload = Payload::Transfer {
//!     to: sender,
//!     amount: Amount::from_micro(100),
//! };
//! let transaction = AccountTransaction::new(
//!     sender,
//!     Nonce::from(1),
//!     TransactionTime::from(1_700_000_000),
//!     payload,
//!     1, // expected signature count, for the energy estimate
//! )
//! .unwrap();
//!
//! // Sign `transaction.sign_digest()` out of band, then seal.
//! let signature = Signature::try_from(vec![0u8; 64]).unwrap();
//! let mut signatures = TransactionSignature::new();
//! signatures.insert(0, 0, signature);
//! let signed = SignedTransaction::seal(transaction, signatures, 1).unwrap();
//! let _hash = signed.hash();
//! ```

pub mod address;
pub mod amount;
pub mod fraction;
pub mod keys;
pub mod resolution;
pub mod transaction;
pub mod updates;

mod error;

pub use address::AccountAddress;
pub use amount::Amount;
pub use error::Error;
pub use fraction::{Fraction, RewardFraction};
pub use transaction::{Energy, Nonce, TransactionTime};
