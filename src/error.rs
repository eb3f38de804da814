//! Error types for buffer cursor operations.

use alloc::vec::Vec;

use snafu::Snafu;

use crate::endian::LengthPrefix;

/// Error raised by a buffer, reader or writer.
///
/// Every fallible operation validates before it mutates, so a returned error
/// leaves the buffer's position and contents as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CodecError {
    /// A position, or the span implied by a read or write, lies past the end.
    #[snafu(display("out of range: position {requested} exceeds capacity {capacity}"))]
    OutOfRange {
        /// Position the operation needed to reach.
        requested: usize,
        /// Capacity available at the time of the call.
        capacity: usize,
    },

    /// A length does not fit the chosen length prefix.
    #[snafu(display("length {length} does not fit a {prefix} length prefix (max {max})"))]
    LengthOverflow {
        /// Byte count (strings) or element count (arrays) to record.
        length: usize,
        /// Prefix the caller asked for.
        prefix: LengthPrefix,
        /// Largest value the prefix can hold.
        max: usize,
    },

    /// Bit widths passed to `byte_by_bits` are zero or sum past one byte.
    #[snafu(display(
        "invalid bit grouping {widths:?}: widths must be non-zero and sum to 1..=8"
    ))]
    InvalidBitGrouping {
        /// The rejected widths.
        widths: Vec<u8>,
    },

    /// A bit-level integer is wider than the value type can carry.
    #[snafu(display("bit width {width} exceeds the maximum of {max}"))]
    InvalidBitWidth {
        /// Requested width in bits.
        width: usize,
        /// Widest supported integer in bits.
        max: usize,
    },
}

/// Result type for buffer operations.
pub type Result<T, E = CodecError> = core::result::Result<T, E>;
