//! Serialize ledger wire-format data.
//!
//! # Overview
//!
//! A binary serialization library for the ledger-signing wire format:
//! - Serialize structured data into the exact byte layout the protocol requires
//! - Deserialize binary input back into structured data (used mostly by tests
//!   and tooling; the wallet itself only ever writes)
//!
//! All multi-byte integers are encoded big-endian. Encoders are append-only
//! writes into a [`bytes::BufMut`], so there is no offset arithmetic to get
//! wrong: every `write` advances the buffer by exactly
//! [`EncodeSize::encode_size`] bytes.
//!
//! # Example
//!
//! ```
//! use bytes::{Buf, BufMut};
//! use ledgerkit_codec::{Encode, EncodeSize, Error, FixedSize, Read, ReadExt, Write};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Release {
//!     timestamp: u64,
//!     amount: u64,
//! }
//!
//! impl Write for Release {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.timestamp.write(buf);
//!         self.amount.write(buf);
//!     }
//! }
//!
//! impl Read for Release {
//!     type Cfg = ();
//!     fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
//!         let timestamp = u64::read(buf)?;
//!         let amount = u64::read(buf)?;
//!         Ok(Self { timestamp, amount })
//!     }
//! }
//!
//! impl FixedSize for Release {
//!     const SIZE: usize = u64::SIZE + u64::SIZE;
//! }
//!
//! let release = Release { timestamp: 1_700_000_000_000, amount: 50 };
//! assert_eq!(release.encode().len(), Release::SIZE);
//! ```

pub mod codec;
pub mod error;
pub mod primitives;
pub mod util;

pub use codec::{
    Decode, DecodeExt, Encode, EncodeFixed, EncodeSize, FixedSize, Read, ReadExt, Write,
};
pub use error::Error;
