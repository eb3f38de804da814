//! Cursor reads.

use alloc::string::String;
use alloc::vec::Vec;

use snafu::{OptionExt, ensure};

use crate::endian::{Length, LengthPrefix, NumberType};
use crate::error::{InvalidBitGroupingSnafu, OutOfRangeSnafu, Result};
use crate::scalar::{Scalar, Uint24};
use crate::traits::{Buffer, span_after};

/// Reads values at a buffer's cursor.
///
/// Holds no state of its own; every call decodes from the bound buffer and
/// advances its position. A failed call leaves the position where it was,
/// including when a length prefix was read before the payload turned out to
/// be short.
///
/// # Example
///
/// ```
/// use byteset::{Buffer, Endianness, FixedBuffer, LengthPrefix};
///
/// let mut buf = FixedBuffer::from_bytes(vec![3, b'H', b'i', b'!'], Endianness::Little);
/// assert_eq!(buf.read().string(LengthPrefix::U8).unwrap(), "Hi!");
/// assert_eq!(buf.position(), 4);
/// ```
pub struct Reader<'a, B: Buffer + ?Sized> {
    buf: &'a mut B,
}

impl<'a, B: Buffer + ?Sized> Reader<'a, B> {
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

    /// Read one value of type `T`.
    pub fn scalar<T: Scalar>(&mut self) -> Result<T> {
        let span = span_after(self.buf, T::WIDTH)?;
        let value = T::decode(&self.buf.as_bytes()[span.clone()], self.buf.endianness())?;
        self.buf.set_position(span.end)?;
        Ok(value)
    }

    /// Read an unsigned byte.
    #[inline]
    pub fn u8(&mut self) -> Result<u8> {
        self.scalar()
    }

    /// Read a signed byte.
    #[inline]
    pub fn i8(&mut self) -> Result<i8> {
        self.scalar()
    }

    /// Read an unsigned 16-bit integer.
    #[inline]
    pub fn u16(&mut self) -> Result<u16> {
        self.scalar()
    }

    /// Read a signed 16-bit integer.
    #[inline]
    pub fn i16(&mut self) -> Result<i16> {
        self.scalar()
    }

    /// Read an unsigned 24-bit integer, e.g. an RGB color.
    #[inline]
    pub fn u24(&mut self) -> Result<u32> {
        self.scalar::<Uint24>().map(u32::from)
    }

    /// Read an unsigned 32-bit integer.
    #[inline]
    pub fn u32(&mut self) -> Result<u32> {
        self.scalar()
    }

    /// Read a signed 32-bit integer.
    #[inline]
    pub fn i32(&mut self) -> Result<i32> {
        self.scalar()
    }

    /// Read an unsigned 64-bit integer.
    #[inline]
    pub fn u64(&mut self) -> Result<u64> {
        self.scalar()
    }

    /// Read a signed 64-bit integer.
    #[inline]
    pub fn i64(&mut self) -> Result<i64> {
        self.scalar()
    }

    /// Read an IEEE-754 single.
    #[inline]
    pub fn f32(&mut self) -> Result<f32> {
        self.scalar()
    }

    /// Read an IEEE-754 double.
    #[inline]
    pub fn f64(&mut self) -> Result<f64> {
        self.scalar()
    }

    /// Read one integer of the given kind, widened to `i64`.
    pub fn number(&mut self, kind: NumberType) -> Result<i64> {
        Ok(match kind {
            NumberType::Uint8 => self.u8()?.into(),
            NumberType::Int8 => self.i8()?.into(),
            NumberType::Uint16 => self.u16()?.into(),
            NumberType::Int16 => self.i16()?.into(),
            NumberType::Uint24 => self.u24()?.into(),
            NumberType::Uint32 => self.u32()?.into(),
            NumberType::Int32 => self.i32()?.into(),
        })
    }

    /// Read a UTF-8 string.
    ///
    /// `length` counts bytes, not characters. Invalid sequences decode to
    /// U+FFFD.
    pub fn string(&mut self, length: impl Into<Length>) -> Result<String> {
        let length = length.into();
        self.restoring(|r| {
            let len = r.count(length, 1)?;
            let span = span_after(r.buf, len)?;
            let text = String::from_utf8_lossy(&r.buf.as_bytes()[span.clone()]).into_owned();
            r.buf.set_position(span.end)?;
            Ok(text)
        })
    }

    /// Read a sequence of `T`.
    ///
    /// With an exact length or a stored prefix, fails with `OutOfRange` if
    /// the elements do not all fit in what remains.
    pub fn array<T: Scalar>(&mut self, length: impl Into<Length>) -> Result<Vec<T>> {
        let length = length.into();
        self.restoring(|r| {
            let count = r.count(length, T::WIDTH)?;
            let total = count.checked_mul(T::WIDTH).context(OutOfRangeSnafu {
                requested: usize::MAX,
                capacity: r.buf.capacity(),
            })?;
            let span = span_after(r.buf, total)?;
            let order = r.buf.endianness();
            let values = r.buf.as_bytes()[span.clone()]
                .chunks_exact(T::WIDTH)
                .map(|chunk| T::decode(chunk, order))
                .collect::<Result<Vec<T>>>()?;
            r.buf.set_position(span.end)?;
            Ok(values)
        })
    }

    /// Read bytes.
    #[inline]
    pub fn u8_array(&mut self, length: impl Into<Length>) -> Result<Vec<u8>> {
        self.array(length)
    }

    /// Read signed bytes.
    #[inline]
    pub fn i8_array(&mut self, length: impl Into<Length>) -> Result<Vec<i8>> {
        self.array(length)
    }

    /// Read unsigned 16-bit integers.
    #[inline]
    pub fn u16_array(&mut self, length: impl Into<Length>) -> Result<Vec<u16>> {
        self.array(length)
    }

    /// Read signed 16-bit integers.
    #[inline]
    pub fn i16_array(&mut self, length: impl Into<Length>) -> Result<Vec<i16>> {
        self.array(length)
    }

    /// Read unsigned 32-bit integers.
    #[inline]
    pub fn u32_array(&mut self, length: impl Into<Length>) -> Result<Vec<u32>> {
        self.array(length)
    }

    /// Read signed 32-bit integers.
    #[inline]
    pub fn i32_array(&mut self, length: impl Into<Length>) -> Result<Vec<i32>> {
        self.array(length)
    }

    /// Read singles.
    #[inline]
    pub fn f32_array(&mut self, length: impl Into<Length>) -> Result<Vec<f32>> {
        self.array(length)
    }

    /// Read doubles.
    #[inline]
    pub fn f64_array(&mut self, length: impl Into<Length>) -> Result<Vec<f64>> {
        self.array(length)
    }

    /// Read one byte and split it into bit groups.
    ///
    /// Groups are taken from the least-significant bit upward; within a group
    /// the first bit taken is the group's least-significant bit. So `[4, 4]`
    /// on `0xF2` gives `[0x2, 0xF]`. Widths must be non-zero and sum to at
    /// most 8; unused high bits are ignored.
    pub fn byte_by_bits(&mut self, widths: &[u8]) -> Result<Vec<u8>> {
        let sum: u32 = widths.iter().map(|&w| u32::from(w)).sum();
        ensure!(
            (1..=8).contains(&sum) && widths.iter().all(|&w| w > 0),
            InvalidBitGroupingSnafu { widths }
        );

        let mut byte = self.u8()?;
        Ok(widths
            .iter()
            .map(|&width| {
                let mask = ((1u16 << width) - 1) as u8;
                let group = byte & mask;
                byte = byte.checked_shr(u32::from(width)).unwrap_or(0);
                group
            })
            .collect())
    }

    /// Read integers of `kind` until the end of the buffer or until `limit`
    /// values have been read (`0` means no limit), passing each value and its
    /// index to `f`. Returns how many values were read.
    ///
    /// Fails with `OutOfRange`, before reading, if the bytes left are fewer
    /// than one value.
    pub fn each<F>(&mut self, kind: NumberType, limit: usize, mut f: F) -> Result<usize>
    where
        F: FnMut(i64, usize),
    {
        let mut read = 0;
        while !self.buf.is_end() {
            if limit > 0 && read >= limit {
                break;
            }
            f(self.number(kind)?, read);
            read += 1;
        }
        Ok(read)
    }

    fn count(&mut self, length: Length, width: usize) -> Result<usize> {
        Ok(match length {
            Length::Exact(count) => count,
            Length::Prefixed(LengthPrefix::None) => self.buf.remaining() / width.max(1),
            Length::Prefixed(LengthPrefix::U8) => self.u8()?.into(),
            Length::Prefixed(LengthPrefix::U16) => self.u16()?.into(),
            Length::Prefixed(LengthPrefix::U32) => self.u32()? as usize,
        })
    }

    fn restoring<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let start = self.buf.position();
        let result = op(self);
        if result.is_err() {
            self.buf.set_position(start)?;
        }
        result
    }
}
