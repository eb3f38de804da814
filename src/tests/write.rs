extern crate std;

use std::string::String;
use std::vec;
use std::vec::Vec;

use crate::{Buffer, CodecError, Endianness, FixedBuffer, LengthPrefix, NumberType};

#[test]
fn u8_truncates_out_of_range_values() {
    let mut buf = FixedBuffer::new(6, Endianness::Little);
    buf.write()
        .u8(1)
        .and_then(|w| w.u8(250))
        .and_then(|w| w.u8(-1))
        .and_then(|w| w.u8(-2))
        .and_then(|w| w.u8(256))
        .and_then(|w| w.u8(257))
        .unwrap();
    assert_eq!(buf.as_bytes(), &[1, 250, 255, 254, 0, 1]);
}

#[test]
fn i8_wraps() {
    let mut buf = FixedBuffer::new(6, Endianness::Little);
    let mut write = buf.write();
    for value in [-1, 0, 256, 255, 127, 128] {
        write.i8(value).unwrap();
    }

    buf.set_position(0).unwrap();
    let mut read = buf.read();
    let values: Vec<i8> = (0..6).map(|_| read.i8().unwrap()).collect();
    assert_eq!(values, vec![-1, 0, 0, -1, 127, -128]);
}

#[test]
fn u16_wraps() {
    let mut buf = FixedBuffer::new(12, Endianness::Little);
    let mut write = buf.write();
    for value in [1024, 2048, 65535, 65536, -1, -2] {
        write.u16(value).unwrap();
    }

    buf.set_position(0).unwrap();
    let values = buf.read().u16_array(6).unwrap();
    assert_eq!(values, vec![1024, 2048, 65535, 0, 65535, 65534]);
}

#[test]
fn i16_wraps() {
    let mut buf = FixedBuffer::new(12, Endianness::Big);
    let mut write = buf.write();
    for value in [-1, -1000, -32768, 32767, 32768, 65535] {
        write.i16(value).unwrap();
    }

    buf.set_position(0).unwrap();
    let values = buf.read().i16_array(6).unwrap();
    assert_eq!(values, vec![-1, -1000, -32768, 32767, -32768, -1]);
}

#[test]
fn u32_wraps() {
    let mut buf = FixedBuffer::new(24, Endianness::Little);
    let mut write = buf.write();
    for value in [1024, 100_000, 4_294_967_295, 4_294_967_296, -1, -2] {
        write.u32(value).unwrap();
    }

    buf.set_position(0).unwrap();
    let values = buf.read().u32_array(6).unwrap();
    assert_eq!(
        values,
        vec![1024, 100_000, 4_294_967_295, 0, 4_294_967_295, 4_294_967_294]
    );
}

#[test]
fn i32_wraps() {
    let mut buf = FixedBuffer::new(24, Endianness::Big);
    let mut write = buf.write();
    for value in [
        -1,
        -1_073_741_825,
        -2_147_483_648,
        2_147_483_647,
        2_147_483_648,
        4_294_967_295,
    ] {
        write.i32(value).unwrap();
    }

    buf.set_position(0).unwrap();
    let values = buf.read().i32_array(6).unwrap();
    assert_eq!(
        values,
        vec![
            -1,
            -1_073_741_825,
            -2_147_483_648,
            2_147_483_647,
            -2_147_483_648,
            -1
        ]
    );
}

#[test]
fn u32_byte_order() {
    let mut big = FixedBuffer::new(4, Endianness::Big);
    big.write().u32(0x0102_0304).unwrap();
    assert_eq!(big.as_bytes(), &[1, 2, 3, 4]);

    let mut little = FixedBuffer::new(4, Endianness::Little);
    little.write().u32(0x0102_0304).unwrap();
    assert_eq!(little.as_bytes(), &[4, 3, 2, 1]);
}

#[test]
fn u16_and_u24_byte_order() {
    let mut big = FixedBuffer::new(5, Endianness::Big);
    big.write().u16(0x0102).unwrap().u24(0x0A0B0C).unwrap();
    assert_eq!(big.as_bytes(), &[1, 2, 0x0A, 0x0B, 0x0C]);

    let mut little = FixedBuffer::new(5, Endianness::Little);
    little.write().u16(0x0102).unwrap().u24(0x0A0B0C).unwrap();
    assert_eq!(little.as_bytes(), &[2, 1, 0x0C, 0x0B, 0x0A]);
}

#[test]
fn u24_keeps_low_bits() {
    let mut buf = FixedBuffer::new(6, Endianness::Little);
    buf.write().u24(0x0100_0001).unwrap().u24(-1).unwrap();

    buf.set_position(0).unwrap();
    let mut read = buf.read();
    assert_eq!(read.u24(), Ok(1));
    assert_eq!(read.u24(), Ok(0x00FF_FFFF));
}

#[test]
fn floats_round_trip() {
    for order in [Endianness::Little, Endianness::Big] {
        let mut buf = FixedBuffer::new(4 * 3 + 8 * 2, order);
        buf.write()
            .f32(1.5)
            .and_then(|w| w.f32(-4.5))
            .and_then(|w| w.f32(1.23))
            .and_then(|w| w.f64(0.0123456789))
            .and_then(|w| w.f64(-0.01234567891234567))
            .unwrap();
        assert!(buf.is_end());

        buf.set_position(0).unwrap();
        let mut read = buf.read();
        assert_eq!(read.f32(), Ok(1.5));
        assert_eq!(read.f32(), Ok(-4.5));
        assert!((read.f32().unwrap() - 1.23).abs() < 1e-6);
        assert_eq!(read.f64(), Ok(0.0123456789));
        assert_eq!(read.f64(), Ok(-0.01234567891234567));
    }
}

#[test]
fn f32_big_endian_bits() {
    let mut buf = FixedBuffer::new(4, Endianness::Big);
    buf.write().f32(1.0).unwrap();
    assert_eq!(buf.as_bytes(), &[0x3F, 0x80, 0x00, 0x00]);
}

#[test]
fn sixty_four_bit_integers_round_trip() {
    for order in [Endianness::Little, Endianness::Big] {
        let mut buf = FixedBuffer::new(16, order);
        buf.write()
            .u64(0x0102_0304_0506_0708)
            .and_then(|w| w.i64(i64::MIN))
            .unwrap();

        buf.set_position(0).unwrap();
        let mut read = buf.read();
        assert_eq!(read.u64(), Ok(0x0102_0304_0506_0708));
        assert_eq!(read.i64(), Ok(i64::MIN));
    }

    let mut buf = FixedBuffer::new(8, Endianness::Big);
    buf.write().u64(0x0102_0304_0506_0708).unwrap();
    assert_eq!(buf.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn write_past_end_changes_nothing() {
    let mut buf = FixedBuffer::new(3, Endianness::Little);
    assert_eq!(
        buf.write().u32(0x0102_0304).err(),
        Some(CodecError::OutOfRange {
            requested: 4,
            capacity: 3,
        })
    );
    assert_eq!(buf.position(), 0);
    assert_eq!(buf.as_bytes(), &[0, 0, 0]);
}

#[test]
fn number_writes_by_kind() {
    let mut buf = FixedBuffer::new(6, Endianness::Big);
    buf.write()
        .number(NumberType::Uint24, 0xABCDEF)
        .and_then(|w| w.number(NumberType::Int8, -2))
        .and_then(|w| w.number(NumberType::Uint16, 0x1234))
        .unwrap();
    assert_eq!(buf.as_bytes(), &[0xAB, 0xCD, 0xEF, 0xFE, 0x12, 0x34]);
}

#[test]
fn string_with_u8_prefix() {
    let mut buf = FixedBuffer::new(4, Endianness::Little);
    buf.write().string("Hi!", LengthPrefix::U8).unwrap();
    assert_eq!(buf.as_bytes(), &[3, b'H', b'i', b'!']);
    assert_eq!(buf.position(), 4);
}

#[test]
fn string_without_prefix() {
    let mut buf = FixedBuffer::new(3, Endianness::Little);
    buf.write().string("Hi!", LengthPrefix::None).unwrap();
    assert_eq!(buf.as_bytes(), b"Hi!");
}

#[test]
fn empty_string_into_empty_buffer() {
    let mut buf = FixedBuffer::new(0, Endianness::Little);
    buf.write().string("", LengthPrefix::None).unwrap();
    assert_eq!(buf.position(), 0);
}

#[test]
fn string_prefix_counts_utf8_bytes() {
    let text = "привет";
    let mut buf = FixedBuffer::new(2 + 12, Endianness::Big);
    buf.write().string(text, LengthPrefix::U16).unwrap();
    assert_eq!(&buf.as_bytes()[..2], &[0, 12]);
    assert!(buf.is_end());
}

#[test]
fn string_prefix_overflow_writes_nothing() {
    let text: String = "A".repeat(300);
    let mut buf = FixedBuffer::new(512, Endianness::Little);
    assert_eq!(
        buf.write().string(&text, LengthPrefix::U8).err(),
        Some(CodecError::LengthOverflow {
            length: 300,
            prefix: LengthPrefix::U8,
            max: 255,
        })
    );
    assert_eq!(buf.position(), 0);
    assert!(buf.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn string_u16_prefix_overflow() {
    let text: String = "A".repeat(100_000);
    let mut buf = FixedBuffer::new(100_100, Endianness::Little);
    assert!(matches!(
        buf.write().string(&text, LengthPrefix::U16),
        Err(CodecError::LengthOverflow { length: 100_000, .. })
    ));
    assert_eq!(buf.position(), 0);

    buf.write().string(&text, LengthPrefix::U32).unwrap();
    assert_eq!(buf.position(), 100_004);
}

#[test]
fn array_prefix_counts_elements() {
    let mut buf = FixedBuffer::new(7, Endianness::Little);
    buf.write().u16_array(&[1, 2, 3], LengthPrefix::U8).unwrap();
    assert_eq!(buf.as_bytes(), &[3, 1, 0, 2, 0, 3, 0]);
}

#[test]
fn array_prefix_overflow() {
    let values = [0u8; 256];
    let mut buf = FixedBuffer::new(512, Endianness::Little);
    assert_eq!(
        buf.write().u8_array(&values, LengthPrefix::U8).err(),
        Some(CodecError::LengthOverflow {
            length: 256,
            prefix: LengthPrefix::U8,
            max: 255,
        })
    );
    assert_eq!(buf.position(), 0);
}

#[test]
fn array_that_does_not_fit_writes_no_prefix() {
    let mut buf = FixedBuffer::new(4, Endianness::Little);
    assert_eq!(
        buf.write().u16_array(&[1, 2], LengthPrefix::U8).err(),
        Some(CodecError::OutOfRange {
            requested: 5,
            capacity: 4,
        })
    );
    assert_eq!(buf.position(), 0);
    assert_eq!(buf.as_bytes(), &[0, 0, 0, 0]);
}

#[test]
fn length_overflow_display() {
    let err = CodecError::LengthOverflow {
        length: 300,
        prefix: LengthPrefix::U8,
        max: 255,
    };
    assert_eq!(
        std::format!("{err}"),
        "length 300 does not fit a u8 length prefix (max 255)"
    );
}
