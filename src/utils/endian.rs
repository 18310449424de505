// src/utils/endian.rs
use byteorder::{BigEndian, ByteOrder};

/// Largest value a 24-bit field can carry.
pub const U24_MAX: u32 = 0x00FF_FFFF;

/// Read a 24-bit big-endian unsigned integer from the first 3 bytes of `buf`.
#[inline]
pub fn read_u24_be(buf: &[u8]) -> u32 {
    BigEndian::read_u24(&buf[..3])
}

/// Write the low 24 bits of `value` as 3 big-endian bytes into `buf`.
///
/// Bits above the 24th are discarded; callers that must not lose them
/// check against [`U24_MAX`] first.
#[inline]
pub fn write_u24_be(buf: &mut [u8], value: u32) {
    BigEndian::write_u24(&mut buf[..3], value & U24_MAX);
}
