//! Utilities shared by codec implementations.

use crate::Error;
use bytes::Buf;

/// Returns an error if the buffer does not have at least `len` bytes remaining.
#[inline]
pub fn at_least(buf: &mut impl Buf, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}
