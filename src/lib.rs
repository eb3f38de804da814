//! A `no_std` cursor over byte buffers, with endian-aware codecs for
//! integers, floats, length-prefixed strings and typed arrays.
//!
//! # Buffers
//!
//! - [`FixedBuffer`] - capacity set at construction; running past the end is
//!   an error.
//! - [`GrowableBuffer`] - starts empty and doubles its allocation as writes
//!   need it.
//! - [`BitBuffer`] - the same idea one bit at a time, most-significant bit
//!   first.
//!
//! Both byte buffers implement [`Buffer`], whose [`read`](Buffer::read) and
//! [`write`](Buffer::write) hand out a [`Reader`] or [`Writer`] bound to the
//! buffer. Each call advances the shared position.
//!
//! # Example
//!
//! ```
//! use byteset::{Buffer, Endianness, GrowableBuffer, LengthPrefix};
//!
//! let mut buf = GrowableBuffer::new(Endianness::Big);
//! buf.write()
//!     .u32(0x0102_0304)?
//!     .string("Hi!", LengthPrefix::U8)?
//!     .u16_array(&[7, 8], LengthPrefix::U16)?;
//! assert_eq!(&buf.as_bytes()[..4], &[1, 2, 3, 4]);
//!
//! buf.set_position(0)?;
//! let mut read = buf.read();
//! assert_eq!(read.u32()?, 0x0102_0304);
//! assert_eq!(read.string(LengthPrefix::U8)?, "Hi!");
//! assert_eq!(read.u16_array(LengthPrefix::U16)?, vec![7, 8]);
//! # Ok::<(), byteset::CodecError>(())
//! ```
//!
//! # Wire format
//!
//! Integers are fixed width, two's complement when signed, in the buffer's
//! byte order. Floats are IEEE-754. Strings and arrays carry an optional
//! unsigned length prefix of 0, 1, 2 or 4 bytes: the UTF-8 byte count for
//! strings, the element count for arrays.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bits;
mod endian;
mod error;
mod fixed;
mod growable;
mod read;
mod scalar;
mod traits;
mod write;

#[cfg(test)]
mod tests;

pub use bits::{BitBuffer, BitReader, BitWriter, MAX_BIT_WIDTH};
pub use endian::{Endianness, Length, LengthPrefix, NumberType};
pub use error::{CodecError, Result};
pub use fixed::FixedBuffer;
pub use growable::GrowableBuffer;
pub use read::Reader;
pub use scalar::{Scalar, Uint24};
pub use traits::Buffer;
pub use write::Writer;
