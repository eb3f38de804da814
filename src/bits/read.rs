//! Bit-level reads at a [`BitBuffer`] cursor.

use alloc::vec::Vec;

use snafu::{OptionExt, ensure};

use super::{BitBuffer, MAX_BIT_WIDTH};
use crate::error::{InvalidBitWidthSnafu, OutOfRangeSnafu, Result};

/// Reads bits at a [`BitBuffer`]'s cursor.
pub struct BitReader<'a> {
    buf: &'a mut BitBuffer,
}

impl<'a> BitReader<'a> {
    /// Bind to `buf`.
    #[inline]
    pub fn new(buf: &'a mut BitBuffer) -> Self {
        Self { buf }
    }

    /// Read one bit.
    pub fn bit(&mut self) -> Result<bool> {
        let bit = self
            .buf
            .bits
            .get(self.buf.position)
            .copied()
            .context(OutOfRangeSnafu {
                requested: self.buf.position + 1,
                capacity: self.buf.bits.len(),
            })?;
        self.buf.position += 1;
        Ok(bit)
    }

    /// Read `count` bits.
    pub fn bits(&mut self, count: usize) -> Result<Vec<bool>> {
        let end = self.end_after(count)?;
        let bits = self.buf.bits[self.buf.position..end].to_vec();
        self.buf.position = end;
        Ok(bits)
    }

    /// Read a `width`-bit unsigned integer, most-significant bit first.
    pub fn number(&mut self, width: usize) -> Result<u64> {
        ensure!(
            width <= MAX_BIT_WIDTH,
            InvalidBitWidthSnafu {
                width,
                max: MAX_BIT_WIDTH,
            }
        );
        let end = self.end_after(width)?;
        let value = self.buf.bits[self.buf.position..end]
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));
        self.buf.position = end;
        Ok(value)
    }

    /// Read 8 bits.
    #[inline]
    pub fn u8(&mut self) -> Result<u8> {
        self.number(8).map(|v| v as u8)
    }

    /// Read 16 bits.
    #[inline]
    pub fn u16(&mut self) -> Result<u16> {
        self.number(16).map(|v| v as u16)
    }

    /// Read 32 bits.
    #[inline]
    pub fn u32(&mut self) -> Result<u32> {
        self.number(32).map(|v| v as u32)
    }

    fn end_after(&self, count: usize) -> Result<usize> {
        let end = self.buf.position.saturating_add(count);
        ensure!(
            end <= self.buf.bits.len(),
            OutOfRangeSnafu {
                requested: end,
                capacity: self.buf.bits.len(),
            }
        );
        Ok(end)
    }
}
