//! Buffer that grows on demand.

use alloc::vec::Vec;
use core::fmt;

use snafu::OptionExt;

use crate::endian::Endianness;
use crate::error::{OutOfRangeSnafu, Result};
use crate::traits::Buffer;

/// A byte region that reallocates instead of failing when written past its
/// end.
///
/// `capacity()` is the logical length: the furthest position ever reached.
/// The allocation behind it doubles (starting from 1) until it covers that
/// position, so it is usually larger; [`Buffer::as_bytes`] only ever exposes
/// the logical part.
///
/// # Example
///
/// ```
/// use byteset::{Buffer, Endianness, GrowableBuffer};
///
/// let mut buf = GrowableBuffer::new(Endianness::Little);
/// buf.write().u8(1).unwrap().u16(500).unwrap();
/// assert_eq!(buf.capacity(), 3);
/// assert_eq!(buf.allocated(), 4);
/// assert_eq!(buf.as_bytes(), &[1, 0xF4, 0x01]);
/// ```
#[derive(Clone, Default)]
pub struct GrowableBuffer {
    bytes: Vec<u8>,
    len: usize,
    position: usize,
    endianness: Endianness,
}

impl GrowableBuffer {
    /// Start empty, with nothing allocated.
    #[must_use]
    pub fn new(endianness: Endianness) -> Self {
        Self {
            bytes: Vec::new(),
            len: 0,
            position: 0,
            endianness,
        }
    }

    /// Take `bytes` as the initial region; position is 0.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, endianness: Endianness) -> Self {
        let bytes = bytes.into();
        Self {
            len: bytes.len(),
            bytes,
            position: 0,
            endianness,
        }
    }

    /// Size of the underlying allocation.
    #[inline]
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.bytes.len()
    }

    /// Give up the buffer and keep the logical bytes.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bytes.truncate(self.len);
        self.bytes
    }

    fn grow_to(&mut self, end: usize) -> Result<()> {
        if end <= self.len {
            return Ok(());
        }
        if end > self.bytes.len() {
            let mut reserved = self.bytes.len();
            while reserved < end {
                reserved = if reserved == 0 {
                    1
                } else {
                    reserved.saturating_mul(2)
                };
            }
            tracing::trace!(from = self.bytes.len(), to = reserved, "growing buffer");
            self.bytes
                .try_reserve_exact(reserved - self.bytes.len())
                .ok()
                .context(OutOfRangeSnafu {
                    requested: end,
                    capacity: self.len,
                })?;
            self.bytes.resize(reserved, 0);
        }
        self.len = end;
        Ok(())
    }
}

// Only the logical region takes part; the spare allocation is invisible.
impl PartialEq for GrowableBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
            && self.position == other.position
            && self.endianness == other.endianness
    }
}

impl Eq for GrowableBuffer {}

impl fmt::Debug for GrowableBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableBuffer")
            .field("bytes", &self.as_bytes())
            .field("position", &self.position)
            .field("endianness", &self.endianness)
            .finish()
    }
}

impl Buffer for GrowableBuffer {
    #[inline]
    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) -> Result<()> {
        self.grow_to(position)?;
        self.position = position;
        Ok(())
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.len
    }

    #[inline]
    fn endianness(&self) -> Endianness {
        self.endianness
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }

    fn reserve_to(&mut self, end: usize) -> Result<()> {
        self.grow_to(end)
    }
}
