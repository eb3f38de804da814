//! Bit-level writes at a [`BitBuffer`] cursor.

use snafu::ensure;

use super::{BitBuffer, MAX_BIT_WIDTH};
use crate::error::{InvalidBitWidthSnafu, Result};

/// Writes bits at a [`BitBuffer`]'s cursor.
///
/// Bits before the end are overwritten; past the end they are appended.
pub struct BitWriter<'a> {
    buf: &'a mut BitBuffer,
}

impl<'a> BitWriter<'a> {
    /// Bind to `buf`.
    #[inline]
    pub fn new(buf: &'a mut BitBuffer) -> Self {
        Self { buf }
    }

    /// Write one bit; any non-zero value is a 1.
    pub fn bit(&mut self, value: impl Into<u8>) -> &mut Self {
        let bit = value.into() != 0;
        match self.buf.bits.get_mut(self.buf.position) {
            Some(slot) => *slot = bit,
            None => self.buf.bits.push(bit),
        }
        self.buf.position += 1;
        self
    }

    /// Write each of `values` as one bit.
    pub fn bits(&mut self, values: &[u8]) -> &mut Self {
        for &value in values {
            self.bit(value);
        }
        self
    }

    /// Write the low `width` bits of `value`, most-significant bit first.
    pub fn number(&mut self, value: u64, width: usize) -> Result<&mut Self> {
        ensure!(
            width <= MAX_BIT_WIDTH,
            InvalidBitWidthSnafu {
                width,
                max: MAX_BIT_WIDTH,
            }
        );
        for i in (0..width).rev() {
            self.bit(((value >> i) & 1) as u8);
        }
        Ok(self)
    }

    /// Write 8 bits.
    #[inline]
    pub fn u8(&mut self, value: u8) -> Result<&mut Self> {
        self.number(value.into(), 8)
    }

    /// Write 16 bits.
    #[inline]
    pub fn u16(&mut self, value: u16) -> Result<&mut Self> {
        self.number(value.into(), 16)
    }

    /// Write 32 bits.
    #[inline]
    pub fn u32(&mut self, value: u32) -> Result<&mut Self> {
        self.number(value.into(), 32)
    }
}
