//! Fixed-width values and their wire encoding.

use snafu::{OptionExt, ensure};
use zerocopy::byteorder::{BigEndian, F32, F64, I16, I32, I64, LittleEndian, U16, U32, U64};
use zerocopy::{FromBytes, IntoBytes};

use crate::endian::Endianness;
use crate::error::{OutOfRangeSnafu, Result};

/// A value with a fixed-width encoding in either byte order.
///
/// `decode` and `encode` are handed slices of exactly [`Scalar::WIDTH`]
/// bytes; any other length is rejected as `OutOfRange`.
pub trait Scalar: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Decode from exactly `WIDTH` bytes.
    fn decode(bytes: &[u8], order: Endianness) -> Result<Self>;

    /// Encode into exactly `WIDTH` bytes.
    fn encode(self, order: Endianness, out: &mut [u8]) -> Result<()>;
}

/// A 24-bit unsigned integer, stored in the low bits of a `u32`.
///
/// Encoding keeps only the low 24 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Uint24(pub u32);

impl Uint24 {
    /// Largest representable value.
    pub const MAX: u32 = 0x00FF_FFFF;
}

impl From<Uint24> for u32 {
    fn from(value: Uint24) -> Self {
        value.0
    }
}

// Single bytes have no byte order.
impl Scalar for u8 {
    const WIDTH: usize = 1;

    #[inline]
    fn decode(bytes: &[u8], _order: Endianness) -> Result<Self> {
        ensure!(
            bytes.len() == 1,
            OutOfRangeSnafu {
                requested: 1usize,
                capacity: bytes.len(),
            }
        );
        Ok(bytes[0])
    }

    #[inline]
    fn encode(self, _order: Endianness, out: &mut [u8]) -> Result<()> {
        ensure!(
            out.len() == 1,
            OutOfRangeSnafu {
                requested: 1usize,
                capacity: out.len(),
            }
        );
        out[0] = self;
        Ok(())
    }
}

impl Scalar for i8 {
    const WIDTH: usize = 1;

    #[inline]
    fn decode(bytes: &[u8], order: Endianness) -> Result<Self> {
        u8::decode(bytes, order).map(|b| b as i8)
    }

    #[inline]
    fn encode(self, order: Endianness, out: &mut [u8]) -> Result<()> {
        (self as u8).encode(order, out)
    }
}

impl Scalar for Uint24 {
    const WIDTH: usize = 3;

    fn decode(bytes: &[u8], order: Endianness) -> Result<Self> {
        let Ok(&[a, b, c]) = <&[u8; 3]>::try_from(bytes) else {
            return OutOfRangeSnafu {
                requested: Self::WIDTH,
                capacity: bytes.len(),
            }
            .fail();
        };
        let [lo, mid, hi] = match order {
            Endianness::Little => [a, b, c],
            Endianness::Big => [c, b, a],
        };
        Ok(Uint24(u32::from_le_bytes([lo, mid, hi, 0])))
    }

    fn encode(self, order: Endianness, out: &mut [u8]) -> Result<()> {
        ensure!(
            out.len() == Self::WIDTH,
            OutOfRangeSnafu {
                requested: Self::WIDTH,
                capacity: out.len(),
            }
        );
        let [lo, mid, hi, _] = self.0.to_le_bytes();
        let bytes = match order {
            Endianness::Little => [lo, mid, hi],
            Endianness::Big => [hi, mid, lo],
        };
        out.copy_from_slice(&bytes);
        Ok(())
    }
}

// Multi-byte integers and floats go through zerocopy's byte-order wrappers.
macro_rules! impl_scalar_for_wire {
    ($($ty:ty => $wire:ident),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();

                #[inline]
                fn decode(bytes: &[u8], order: Endianness) -> Result<Self> {
                    let value = match order {
                        Endianness::Little => $wire::<LittleEndian>::read_from_bytes(bytes)
                            .ok()
                            .map(|v| v.get()),
                        Endianness::Big => $wire::<BigEndian>::read_from_bytes(bytes)
                            .ok()
                            .map(|v| v.get()),
                    };
                    value.context(OutOfRangeSnafu {
                        requested: Self::WIDTH,
                        capacity: bytes.len(),
                    })
                }

                #[inline]
                fn encode(self, order: Endianness, out: &mut [u8]) -> Result<()> {
                    let capacity = out.len();
                    let written = match order {
                        Endianness::Little => $wire::<LittleEndian>::new(self).write_to(out).is_ok(),
                        Endianness::Big => $wire::<BigEndian>::new(self).write_to(out).is_ok(),
                    };
                    ensure!(
                        written,
                        OutOfRangeSnafu {
                            requested: Self::WIDTH,
                            capacity,
                        }
                    );
                    Ok(())
                }
            }
        )+
    };
}

impl_scalar_for_wire!(
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
);
