// src/tag/header.rs
use crate::packet::SizedPacket;
use crate::types::TagFlags;
use crate::utils::{read_u24_be, write_u24_be, U24_MAX};

/// The fixed 11-byte FLV tag header
///
/// ```text
/// offset  size  field
///      0     1  reserved(2) | filter(1) | tag type(5)
///      1     3  data size           (big-endian)
///      4     3  timestamp, low 24   (big-endian)
///      7     1  timestamp, high 8
///      8     3  stream id           (big-endian, always 0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagHeader {
    pub flags: TagFlags,
    pub data_size: u32,
    pub timestamp: u32,
    pub timestamp_extended: u8,
    pub stream_id: u32,
}

impl TagHeader {
    pub const SIZE: usize = 11;
    pub const MAX_DATA_SIZE: u32 = U24_MAX;

    const DATA_SIZE_OFFSET: usize = 1;
    const TIMESTAMP_OFFSET: usize = 4;
    const TIMESTAMP_EXTENDED_OFFSET: usize = 7;
    const STREAM_ID_OFFSET: usize = 8;

    /// Split a header out of its wire bytes. Never fails: reserved bits,
    /// stream id and unknown tag types are taken as they are.
    pub fn parse(bytes: &[u8; TagHeader::SIZE]) -> Self {
        TagHeader {
            flags: TagFlags::new(bytes[0]),
            data_size: read_u24_be(&bytes[Self::DATA_SIZE_OFFSET..]),
            timestamp: read_u24_be(&bytes[Self::TIMESTAMP_OFFSET..]),
            timestamp_extended: bytes[Self::TIMESTAMP_EXTENDED_OFFSET],
            stream_id: read_u24_be(&bytes[Self::STREAM_ID_OFFSET..]),
        }
    }

    /// Serialize the header. 24-bit fields keep only their low 24 bits;
    /// range checks belong to the encoder.
    pub fn to_bytes(&self) -> [u8; TagHeader::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0] = self.flags.raw_value();
        write_u24_be(&mut bytes[Self::DATA_SIZE_OFFSET..], self.data_size);
        write_u24_be(&mut bytes[Self::TIMESTAMP_OFFSET..], self.timestamp);
        bytes[Self::TIMESTAMP_EXTENDED_OFFSET] = self.timestamp_extended;
        write_u24_be(&mut bytes[Self::STREAM_ID_OFFSET..], self.stream_id);
        bytes
    }

    /// Full 32-bit timestamp in milliseconds
    pub fn logical_timestamp(&self) -> u32 {
        (self.timestamp_extended as u32) << 24 | (self.timestamp & U24_MAX)
    }
}

impl SizedPacket for TagHeader {
    fn size(&self) -> usize {
        Self::SIZE + self.data_size as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 11] = [
        0x09, // video, unencrypted
        0x00, 0x01, 0x2C, // 300 bytes
        0x0A, 0x0B, 0x0C, // timestamp low
        0x7F, // timestamp high
        0x00, 0x00, 0x00, // stream id
    ];

    #[test]
    fn test_parse_fields() {
        let header = TagHeader::parse(&SAMPLE);
        assert_eq!(header.flags.tag_type(), 9);
        assert_eq!(header.flags.filter(), 0);
        assert_eq!(header.flags.reserved(), 0);
        assert_eq!(header.data_size, 300);
        assert_eq!(header.timestamp, 0x0A0B0C);
        assert_eq!(header.timestamp_extended, 0x7F);
        assert_eq!(header.stream_id, 0);
        assert_eq!(header.logical_timestamp(), 0x7F0A0B0C);
    }

    #[test]
    fn test_to_bytes_matches_wire() {
        assert_eq!(TagHeader::parse(&SAMPLE).to_bytes(), SAMPLE);
    }

    #[test]
    fn test_stream_id_not_mixed_with_extended_timestamp() {
        let mut raw = SAMPLE;
        raw[7] = 0xEE;
        raw[8..].copy_from_slice(&[0x00, 0x00, 0x01]);
        let header = TagHeader::parse(&raw);
        assert_eq!(header.timestamp_extended, 0xEE);
        assert_eq!(header.stream_id, 1);
    }

    #[test]
    fn test_header_size() {
        let header = TagHeader::parse(&SAMPLE);
        assert_eq!(header.size(), 311);
        assert_eq!(header.previous_tag_size(), 311);
        assert_eq!(TagHeader::default().size(), TagHeader::SIZE);
    }
}
