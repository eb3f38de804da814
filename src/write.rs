//! Cursor writes.

use snafu::OptionExt;

use crate::endian::{LengthPrefix, NumberType};
use crate::error::{OutOfRangeSnafu, Result};
use crate::scalar::{Scalar, Uint24};
use crate::traits::Buffer;

/// Writes values at a buffer's cursor.
///
/// Integer writers up to 32 bits take an `i64` and keep only the low bits
/// that fit, so writing `256` as a `u8` stores `0` and `-1` stores `255`.
/// Out-of-range values are not an error.
///
/// Every call checks the whole span it needs, length prefix included, before
/// writing anything. On a fixed buffer a write that does not fit fails with
/// `OutOfRange` and changes nothing; a growable buffer grows instead.
///
/// Writers return `&mut Self` so calls chain:
///
/// ```
/// use byteset::{Buffer, Endianness, FixedBuffer};
///
/// let mut buf = FixedBuffer::new(3, Endianness::Little);
/// buf.write().u8(256)?.u8(-1)?.i8(127)?;
/// assert_eq!(buf.as_bytes(), &[0, 255, 127]);
/// # Ok::<(), byteset::CodecError>(())
/// ```
pub struct Writer<'a, B: Buffer + ?Sized> {
    buf: &'a mut B,
}

impl<'a, B: Buffer + ?Sized> Writer<'a, B> {
    /// Bind to `buf`.
    #[inline]
    pub fn new(buf: &'a mut B) -> Self {
        Self { buf }
    }

    /// The bound buffer.
    #[inline]
    pub fn buffer(&self) -> &B {
        self.buf
    }

    /// Write one value of type `T`.
    pub fn scalar<T: Scalar>(&mut self, value: T) -> Result<&mut Self> {
        let end = self.end_after(T::WIDTH)?;
        self.buf.reserve_to(end)?;
        self.put(value)?;
        Ok(self)
    }

    /// Write the low 8 bits of `value`.
    #[inline]
    pub fn u8(&mut self, value: i64) -> Result<&mut Self> {
        self.scalar(value as u8)
    }

    /// Write the low 8 bits of `value` as a signed byte.
    #[inline]
    pub fn i8(&mut self, value: i64) -> Result<&mut Self> {
        self.scalar(value as i8)
    }

    /// Write the low 16 bits of `value`.
    #[inline]
    pub fn u16(&mut self, value: i64) -> Result<&mut Self> {
        self.scalar(value as u16)
    }

    /// Write the low 16 bits of `value` as a signed integer.
    #[inline]
    pub fn i16(&mut self, value: i64) -> Result<&mut Self> {
        self.scalar(value as i16)
    }

    /// Write the low 24 bits of `value`.
    #[inline]
    pub fn u24(&mut self, value: i64) -> Result<&mut Self> {
        self.scalar(Uint24(value as u32 & Uint24::MAX))
    }

    /// Write the low 32 bits of `value`.
    #[inline]
    pub fn u32(&mut self, value: i64) -> Result<&mut Self> {
        self.scalar(value as u32)
    }

    /// Write the low 32 bits of `value` as a signed integer.
    #[inline]
    pub fn i32(&mut self, value: i64) -> Result<&mut Self> {
        self.scalar(value as i32)
    }

    /// Write an unsigned 64-bit integer.
    #[inline]
    pub fn u64(&mut self, value: u64) -> Result<&mut Self> {
        self.scalar(value)
    }

    /// Write a signed 64-bit integer.
    #[inline]
    pub fn i64(&mut self, value: i64) -> Result<&mut Self> {
        self.scalar(value)
    }

    /// Write an IEEE-754 single.
    #[inline]
    pub fn f32(&mut self, value: f32) -> Result<&mut Self> {
        self.scalar(value)
    }

    /// Write an IEEE-754 double.
    #[inline]
    pub fn f64(&mut self, value: f64) -> Result<&mut Self> {
        self.scalar(value)
    }

    /// Write `value` as an integer of the given kind, truncating.
    pub fn number(&mut self, kind: NumberType, value: i64) -> Result<&mut Self> {
        match kind {
            NumberType::Uint8 => self.u8(value),
            NumberType::Int8 => self.i8(value),
            NumberType::Uint16 => self.u16(value),
            NumberType::Int16 => self.i16(value),
            NumberType::Uint24 => self.u24(value),
            NumberType::Uint32 => self.u32(value),
            NumberType::Int32 => self.i32(value),
        }
    }

    /// Write `text` as UTF-8, preceded by its byte length if `prefix` asks
    /// for one.
    ///
    /// Fails with `LengthOverflow` if the byte length does not fit the prefix.
    pub fn string(&mut self, text: &str, prefix: LengthPrefix) -> Result<&mut Self> {
        self.array(text.as_bytes(), prefix)
    }

    /// Write `values`, preceded by their count if `prefix` asks for one.
    ///
    /// Fails with `LengthOverflow` if the count does not fit the prefix.
    pub fn array<T: Scalar>(&mut self, values: &[T], prefix: LengthPrefix) -> Result<&mut Self> {
        prefix.check(values.len())?;
        let payload = values.len().checked_mul(T::WIDTH).context(OutOfRangeSnafu {
            requested: usize::MAX,
            capacity: self.buf.capacity(),
        })?;
        let end = self.end_after(prefix.width().saturating_add(payload))?;
        self.buf.reserve_to(end)?;

        match prefix {
            LengthPrefix::None => {}
            LengthPrefix::U8 => self.put(values.len() as u8)?,
            LengthPrefix::U16 => self.put(values.len() as u16)?,
            LengthPrefix::U32 => self.put(values.len() as u32)?,
        }
        for &value in values {
            self.put(value)?;
        }
        Ok(self)
    }

    /// Write bytes.
    #[inline]
    pub fn u8_array(&mut self, values: &[u8], prefix: LengthPrefix) -> Result<&mut Self> {
        self.array(values, prefix)
    }

    /// Write signed bytes.
    #[inline]
    pub fn i8_array(&mut self, values: &[i8], prefix: LengthPrefix) -> Result<&mut Self> {
        self.array(values, prefix)
    }

    /// Write unsigned 16-bit integers.
    #[inline]
    pub fn u16_array(&mut self, values: &[u16], prefix: LengthPrefix) -> Result<&mut Self> {
        self.array(values, prefix)
    }

    /// Write signed 16-bit integers.
    #[inline]
    pub fn i16_array(&mut self, values: &[i16], prefix: LengthPrefix) -> Result<&mut Self> {
        self.array(values, prefix)
    }

    /// Write unsigned 32-bit integers.
    #[inline]
    pub fn u32_array(&mut self, values: &[u32], prefix: LengthPrefix) -> Result<&mut Self> {
        self.array(values, prefix)
    }

    /// Write signed 32-bit integers.
    #[inline]
    pub fn i32_array(&mut self, values: &[i32], prefix: LengthPrefix) -> Result<&mut Self> {
        self.array(values, prefix)
    }

    /// Write singles.
    #[inline]
    pub fn f32_array(&mut self, values: &[f32], prefix: LengthPrefix) -> Result<&mut Self> {
        self.array(values, prefix)
    }

    /// Write doubles.
    #[inline]
    pub fn f64_array(&mut self, values: &[f64], prefix: LengthPrefix) -> Result<&mut Self> {
        self.array(values, prefix)
    }

    fn end_after(&self, len: usize) -> Result<usize> {
        self.buf
            .position()
            .checked_add(len)
            .context(OutOfRangeSnafu {
                requested: usize::MAX,
                capacity: self.buf.capacity(),
            })
    }

    // Caller has already reserved the span.
    fn put<T: Scalar>(&mut self, value: T) -> Result<()> {
        let start = self.buf.position();
        let end = start + T::WIDTH;
        let order = self.buf.endianness();
        value.encode(order, &mut self.buf.as_bytes_mut()[start..end])?;
        self.buf.set_position(end)
    }
}
