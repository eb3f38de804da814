//! Buffer with a capacity fixed at construction.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use snafu::ensure;

use crate::endian::Endianness;
use crate::error::{OutOfRangeSnafu, Result};
use crate::traits::Buffer;

/// A zero-filled byte region that never changes size.
///
/// Reads and writes past the end fail with `OutOfRange` and leave the buffer
/// untouched.
///
/// # Example
///
/// ```
/// use byteset::{Buffer, Endianness, FixedBuffer};
///
/// let mut buf = FixedBuffer::new(4, Endianness::Big);
/// buf.write().u32(0x0102_0304).unwrap();
/// assert_eq!(buf.as_bytes(), &[1, 2, 3, 4]);
/// assert!(buf.is_end());
/// assert!(buf.write().u8(0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FixedBuffer {
    bytes: Box<[u8]>,
    position: usize,
    endianness: Endianness,
}

impl FixedBuffer {
    /// Allocate `capacity` zeroed bytes.
    #[must_use]
    pub fn new(capacity: usize, endianness: Endianness) -> Self {
        Self {
            bytes: vec![0u8; capacity].into_boxed_slice(),
            position: 0,
            endianness,
        }
    }

    /// Take `bytes` as the region; capacity is its length and position is 0.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Box<[u8]>>, endianness: Endianness) -> Self {
        Self {
            bytes: bytes.into(),
            position: 0,
            endianness,
        }
    }

    /// Replace the region, resetting position to 0.
    pub fn set_bytes(&mut self, bytes: impl Into<Box<[u8]>>) {
        self.bytes = bytes.into();
        self.position = 0;
    }

    /// Give up the buffer and keep its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes.into_vec()
    }
}

impl Buffer for FixedBuffer {
    #[inline]
    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) -> Result<()> {
        ensure!(
            position <= self.bytes.len(),
            OutOfRangeSnafu {
                requested: position,
                capacity: self.bytes.len(),
            }
        );
        self.position = position;
        Ok(())
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    fn endianness(&self) -> Endianness {
        self.endianness
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    fn reserve_to(&mut self, end: usize) -> Result<()> {
        ensure!(
            end <= self.bytes.len(),
            OutOfRangeSnafu {
                requested: end,
                capacity: self.bytes.len(),
            }
        );
        Ok(())
    }
}
