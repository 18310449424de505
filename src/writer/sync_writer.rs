// src/writer/sync_writer.rs
use crate::error::{FlvError, Result};
use crate::tag::{Tag, TagHeader};
use std::io::Write;

/// Encode `tag` (header + payload) into `writer`.
///
/// `data_size` on the wire always comes from `tag.data.len()`; the stored
/// field is ignored. The reserved bits are written as zero whatever the tag
/// holds, and a nonzero stream id is refused.
///
/// Validation runs before anything is written, so a validation error leaves
/// `writer` untouched. An I/O error may leave a partial record behind and
/// the sink must then be considered unusable for further tags.
///
/// # Errors
///
/// * [`FlvError::PayloadTooLarge`] if the payload exceeds 16,777,215 bytes
/// * [`FlvError::InvalidStreamId`] if `tag.stream_id` is not 0
/// * [`FlvError::Io`] if the writer fails
pub fn encode<W: Write + ?Sized>(tag: &Tag, writer: &mut W) -> Result<()> {
    let header = encode_header(tag)?;
    writer.write_all(&header)?;
    writer.write_all(&tag.data)?;
    Ok(())
}

/// Validate `tag` and produce its 11 header bytes
pub(crate) fn encode_header(tag: &Tag) -> Result<[u8; TagHeader::SIZE]> {
    if tag.data.len() > TagHeader::MAX_DATA_SIZE as usize {
        return Err(FlvError::PayloadTooLarge(tag.data.len()));
    }
    if tag.stream_id != 0 {
        return Err(FlvError::InvalidStreamId(tag.stream_id));
    }
    if tag.reserved != 0 {
        log::warn!(
            "dropping nonzero reserved bits {:#04b} on tag type {}",
            tag.reserved,
            tag.tag_type
        );
    }

    let header = tag.header();
    let header = TagHeader {
        flags: header.flags.without_reserved(),
        ..header
    };
    log::trace!(
        "encoding tag header: type={} filter={} size={} timestamp={}",
        header.flags.tag_type(),
        header.flags.filter(),
        header.data_size,
        header.logical_timestamp(),
    );
    Ok(header.to_bytes())
}
