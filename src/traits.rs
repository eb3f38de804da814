//! The interface shared by fixed and growable buffers.

use core::ops::Range;

use snafu::{OptionExt, ensure};

use crate::endian::Endianness;
use crate::error::{OutOfRangeSnafu, Result};
use crate::fixed::FixedBuffer;
use crate::read::Reader;
use crate::write::Writer;

/// A byte region with a cursor.
///
/// Implementors own the bytes and the position; [`Reader`] and [`Writer`]
/// borrow the buffer and advance the position as they go. The only behavior
/// that differs between implementors is what happens when a write runs past
/// the end, decided by [`Buffer::reserve_to`].
pub trait Buffer {
    /// Current cursor offset.
    fn position(&self) -> usize;

    /// Move the cursor.
    ///
    /// Fixed buffers reject positions past `capacity`; growable buffers
    /// extend to cover them.
    fn set_position(&mut self, position: usize) -> Result<()>;

    /// Logical length of the region.
    fn capacity(&self) -> usize;

    /// Byte order for multi-byte values.
    fn endianness(&self) -> Endianness;

    /// The logical region, `[0, capacity)`.
    fn as_bytes(&self) -> &[u8];

    /// The logical region, mutably.
    fn as_bytes_mut(&mut self) -> &mut [u8];

    /// Make `[0, end)` writable, or fail with `OutOfRange`.
    ///
    /// On success `capacity() >= end`.
    fn reserve_to(&mut self, end: usize) -> Result<()>;

    /// Whether the cursor sits at the end of the region.
    #[inline]
    fn is_end(&self) -> bool {
        self.position() == self.capacity()
    }

    /// Bytes between the cursor and the end.
    #[inline]
    fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.position())
    }

    /// Byte at `offset`, without moving the cursor.
    fn get_byte(&self, offset: usize) -> Result<u8> {
        self.as_bytes().get(offset).copied().context(OutOfRangeSnafu {
            requested: offset,
            capacity: self.capacity(),
        })
    }

    /// Overwrite the byte at `offset`, without moving the cursor.
    ///
    /// Never grows the buffer.
    fn set_byte(&mut self, offset: usize, value: u8) -> Result<()> {
        let capacity = self.capacity();
        let slot = self
            .as_bytes_mut()
            .get_mut(offset)
            .context(OutOfRangeSnafu {
                requested: offset,
                capacity,
            })?;
        *slot = value;
        Ok(())
    }

    /// Copy `[start, end)` into a new fixed buffer with the same byte order.
    fn slice(&self, start: usize, end: usize) -> Result<FixedBuffer> {
        ensure!(
            start <= end && end <= self.capacity(),
            OutOfRangeSnafu {
                requested: end.max(start),
                capacity: self.capacity(),
            }
        );
        Ok(FixedBuffer::from_bytes(
            &self.as_bytes()[start..end],
            self.endianness(),
        ))
    }

    /// Bind a reader to this buffer.
    #[inline]
    fn read(&mut self) -> Reader<'_, Self> {
        Reader::new(self)
    }

    /// Bind a writer to this buffer.
    #[inline]
    fn write(&mut self) -> Writer<'_, Self> {
        Writer::new(self)
    }
}

/// The `len` bytes after the cursor, if they lie inside the region.
pub(crate) fn span_after<B: Buffer + ?Sized>(buf: &B, len: usize) -> Result<Range<usize>> {
    let start = buf.position();
    let end = start.checked_add(len).context(OutOfRangeSnafu {
        requested: usize::MAX,
        capacity: buf.capacity(),
    })?;
    ensure!(
        end <= buf.capacity(),
        OutOfRangeSnafu {
            requested: end,
            capacity: buf.capacity(),
        }
    );
    Ok(start..end)
}
