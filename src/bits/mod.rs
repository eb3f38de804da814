//! Bit-granular buffer.
//!
//! A growable run of single bits with a cursor over bit indices. Unlike the
//! byte buffers there is one bit order only: multi-bit integers are read and
//! written most-significant bit first, and [`BitBuffer::to_byte_array`] packs
//! bits into bytes the same way.
//!
//! ```
//! use byteset::BitBuffer;
//!
//! let mut bits = BitBuffer::new();
//! bits.write().u8(0xAE).unwrap();
//! assert_eq!(bits.bits(), &[true, false, true, false, true, true, true, false]);
//!
//! bits.set_position(0).unwrap();
//! assert_eq!(bits.read().u8().unwrap(), 0xAE);
//! ```

mod read;
mod write;

pub use read::BitReader;
pub use write::BitWriter;

use alloc::vec::Vec;

use snafu::ensure;

use crate::error::{OutOfRangeSnafu, Result};

/// Widest integer the bit reader and writer handle.
pub const MAX_BIT_WIDTH: usize = 64;

/// A sequence of bits with a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitBuffer {
    bits: Vec<bool>,
    position: usize,
}

impl BitBuffer {
    /// Start empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take `bits` as the contents; position is 0.
    #[must_use]
    pub fn from_bits(bits: impl Into<Vec<bool>>) -> Self {
        Self {
            bits: bits.into(),
            position: 0,
        }
    }

    /// Unpack `bytes`, each one most-significant bit first; position is 0.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let bits = bytes
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
            .collect::<Vec<_>>();
        Self::from_bits(bits)
    }

    /// Number of bits.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether there are no bits.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Current cursor, in bits.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor; fails with `OutOfRange` past the last bit.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        ensure!(
            position <= self.bits.len(),
            OutOfRangeSnafu {
                requested: position,
                capacity: self.bits.len(),
            }
        );
        self.position = position;
        Ok(())
    }

    /// Whether the cursor sits after the last bit.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position == self.bits.len()
    }

    /// The bits.
    #[inline]
    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Copy bits `[start, end)` into a new buffer.
    pub fn slice(&self, start: usize, end: usize) -> Result<BitBuffer> {
        ensure!(
            start <= end && end <= self.bits.len(),
            OutOfRangeSnafu {
                requested: end.max(start),
                capacity: self.bits.len(),
            }
        );
        Ok(BitBuffer::from_bits(&self.bits[start..end]))
    }

    /// Pack into bytes, most-significant bit first.
    ///
    /// A trailing partial byte has its low bits zeroed.
    #[must_use]
    pub fn to_byte_array(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | (u8::from(bit) << (7 - i)))
            })
            .collect()
    }

    /// Bind a reader to this buffer.
    #[inline]
    pub fn read(&mut self) -> BitReader<'_> {
        BitReader::new(self)
    }

    /// Bind a writer to this buffer.
    #[inline]
    pub fn write(&mut self) -> BitWriter<'_> {
        BitWriter::new(self)
    }
}
