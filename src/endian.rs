//! Byte order, length prefixes and number type tags.

use core::fmt;

use snafu::ensure;

use crate::error::{LengthOverflowSnafu, Result};

/// Byte order used for multi-byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

/// Width of the unsigned count stored ahead of a string or array payload.
///
/// Strings record their UTF-8 byte count, arrays their element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthPrefix {
    /// No count is stored.
    #[default]
    None,
    /// One byte, up to 255.
    U8,
    /// Two bytes, up to 65535.
    U16,
    /// Four bytes, up to 4294967295.
    U32,
}

impl LengthPrefix {
    /// Number of bytes the prefix occupies.
    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            LengthPrefix::None => 0,
            LengthPrefix::U8 => 1,
            LengthPrefix::U16 => 2,
            LengthPrefix::U32 => 4,
        }
    }

    /// Largest count the prefix can record.
    #[inline]
    #[must_use]
    pub const fn max(self) -> usize {
        match self {
            LengthPrefix::None => usize::MAX,
            LengthPrefix::U8 => u8::MAX as usize,
            LengthPrefix::U16 => u16::MAX as usize,
            LengthPrefix::U32 => u32::MAX as usize,
        }
    }

    /// Fails with `LengthOverflow` if `length` cannot be recorded.
    pub(crate) fn check(self, length: usize) -> Result<()> {
        let max = self.max();
        if length > max {
            tracing::debug!(length, prefix = %self, max, "length prefix overflow");
        }
        ensure!(
            length <= max,
            LengthOverflowSnafu {
                length,
                prefix: self,
                max,
            }
        );
        Ok(())
    }
}

impl fmt::Display for LengthPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LengthPrefix::None => "none",
            LengthPrefix::U8 => "u8",
            LengthPrefix::U16 => "u16",
            LengthPrefix::U32 => "u32",
        })
    }
}

/// How a reader finds the size of a variable-length payload.
///
/// Converts from a `usize` (an exact count) or a [`LengthPrefix`] (a count
/// stored in the buffer). Reading with [`LengthPrefix::None`] consumes
/// everything that remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Length {
    /// Exactly this many bytes (strings) or elements (arrays).
    Exact(usize),
    /// Count is stored ahead of the payload.
    Prefixed(LengthPrefix),
}

impl Default for Length {
    fn default() -> Self {
        Length::Prefixed(LengthPrefix::U32)
    }
}

impl From<usize> for Length {
    fn from(count: usize) -> Self {
        Length::Exact(count)
    }
}

impl From<LengthPrefix> for Length {
    fn from(prefix: LengthPrefix) -> Self {
        Length::Prefixed(prefix)
    }
}

/// Integer kinds that [`Reader::each`](crate::Reader::each) and
/// [`Reader::number`](crate::Reader::number) can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// 8-bit unsigned.
    Uint8,
    /// 8-bit signed.
    Int8,
    /// 16-bit unsigned.
    Uint16,
    /// 16-bit signed.
    Int16,
    /// 24-bit unsigned.
    Uint24,
    /// 32-bit unsigned.
    Uint32,
    /// 32-bit signed.
    Int32,
}

impl NumberType {
    /// Encoded width in bytes.
    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            NumberType::Uint8 | NumberType::Int8 => 1,
            NumberType::Uint16 | NumberType::Int16 => 2,
            NumberType::Uint24 => 3,
            NumberType::Uint32 | NumberType::Int32 => 4,
        }
    }
}
