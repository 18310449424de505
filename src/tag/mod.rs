// src/tag/mod.rs
mod header;

pub use header::TagHeader;

use crate::error::Result;
use crate::packet::SizedPacket;
use crate::types::{TagFlags, TagType};
use crate::utils::U24_MAX;
use bytes::{Bytes, BytesMut, BufMut};
use std::io::{Read, Write};

/// One FLV tag: header fields plus an opaque payload
///
/// `data_size` mirrors `data.len()`. Decoding keeps them equal; encoding
/// always recomputes the size from `data` and ignores the stored field.
///
/// # Example
///
/// ```
/// use flvtag_rs::{Tag, TagType, SizedPacket};
///
/// let tag = Tag::new(TagType::Video, 0x01FF_FFFF, vec![0x17, 0x01, 0x00]);
/// assert_eq!(tag.timestamp, 0xFF_FFFF);
/// assert_eq!(tag.timestamp_extended, 0x01);
/// assert_eq!(tag.size(), 14);
///
/// let bytes = tag.to_bytes().unwrap();
/// let decoded = Tag::from_bytes(&bytes).unwrap();
/// assert_eq!(decoded, tag);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tag {
    pub reserved: u8,
    pub filter: u8,
    pub tag_type: u8,
    pub data_size: u32,
    pub timestamp: u32,
    pub timestamp_extended: u8,
    pub stream_id: u32,
    pub data: Vec<u8>,
}

impl Tag {
    /// Header size of every tag in bytes
    pub const HEADER_SIZE: usize = TagHeader::SIZE;

    pub fn new(tag_type: TagType, logical_timestamp: u32, data: Vec<u8>) -> Self {
        Self::with_raw_type(tag_type.as_u8(), logical_timestamp, data)
    }

    /// Build a tag from a raw 5-bit type value, known to [`TagType`] or not
    pub fn with_raw_type(tag_type: u8, logical_timestamp: u32, data: Vec<u8>) -> Self {
        let mut tag = Tag {
            tag_type: tag_type & TagFlags::TAG_TYPE_MASK,
            data_size: data.len().min(U24_MAX as usize) as u32,
            data,
            ..Default::default()
        };
        tag.set_logical_timestamp(logical_timestamp);
        tag
    }

    /// Build a tag from a decoded header and the payload read after it
    pub(crate) fn from_parts(header: TagHeader, data: Vec<u8>) -> Self {
        Tag {
            reserved: header.flags.reserved(),
            filter: header.flags.filter(),
            tag_type: header.flags.tag_type(),
            data_size: header.data_size,
            timestamp: header.timestamp,
            timestamp_extended: header.timestamp_extended,
            stream_id: header.stream_id,
            data,
        }
    }

    /// The recognized tag type, or `None` for values outside audio/video/script
    pub fn kind(&self) -> Option<TagType> {
        TagType::from_u8(self.tag_type)
    }

    pub fn is_encrypted(&self) -> bool {
        self.filter & TagFlags::FILTER_MASK != 0
    }

    /// Full 32-bit timestamp in milliseconds: extended byte on top, 24-bit field below
    pub fn logical_timestamp(&self) -> u32 {
        (self.timestamp_extended as u32) << 24 | (self.timestamp & U24_MAX)
    }

    pub fn set_logical_timestamp(&mut self, millis: u32) {
        self.timestamp = millis & U24_MAX;
        self.timestamp_extended = (millis >> 24) as u8;
    }

    /// Header view of this tag with `data_size` taken from the payload.
    ///
    /// Fields are copied as they are (reserved included); encode policy is
    /// applied by the writer, not here.
    pub fn header(&self) -> TagHeader {
        TagHeader {
            flags: TagFlags::pack(self.reserved, self.filter, self.tag_type),
            data_size: self.data.len().min(U24_MAX as usize) as u32,
            timestamp: self.timestamp,
            timestamp_extended: self.timestamp_extended,
            stream_id: self.stream_id,
        }
    }

    /// Decode one tag from `reader`. See [`crate::reader::decode`].
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        crate::reader::decode(reader)
    }

    /// Encode this tag into `writer`. See [`crate::writer::encode`].
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        crate::writer::encode(self, writer)
    }

    /// Decode one tag from the front of `bytes`; anything after the payload is ignored
    pub fn from_bytes(mut bytes: &[u8]) -> Result<Self> {
        crate::reader::decode(&mut bytes)
    }

    /// Encode into a freshly allocated buffer of exactly [`SizedPacket::size`] bytes
    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut buffer = BytesMut::with_capacity(self.size()).writer();
        crate::writer::encode(self, &mut buffer)?;
        Ok(buffer.into_inner().freeze())
    }
}

impl SizedPacket for Tag {
    fn size(&self) -> usize {
        Self::HEADER_SIZE + self.data.len()
    }
}
