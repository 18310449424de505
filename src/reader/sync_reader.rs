// src/reader/sync_reader.rs
use crate::error::{FlvError, Result};
use crate::tag::{Tag, TagHeader};
use crate::utils::read_full;
use std::io::Read;

/// Decode one tag (header + payload) from `reader`.
///
/// Reads exactly `11 + data_size` bytes and nothing more. Header fields are
/// taken as they appear on the wire: reserved bits, a nonzero stream id and
/// unknown tag types all pass through for the caller to judge.
///
/// On error the stream position is unspecified; the caller cannot assume
/// the next byte starts a tag.
///
/// # Errors
///
/// * [`FlvError::TruncatedHeader`] if the stream ends inside the 11-byte header
/// * [`FlvError::TruncatedPayload`] if it ends before `data_size` payload bytes
/// * [`FlvError::Io`] for any other read failure
pub fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Tag> {
    let header = read_header(reader)?;
    let data = read_payload(reader, &header)?;
    Ok(Tag::from_parts(header, data))
}

/// Read and parse only the fixed header, leaving the payload in the stream
pub fn read_header<R: Read + ?Sized>(reader: &mut R) -> Result<TagHeader> {
    let mut raw = [0u8; TagHeader::SIZE];
    let available = read_full(reader, &mut raw)?;
    parse_header(&raw, available)
}

/// Read the payload that `header` announces into a new buffer
fn read_payload<R: Read + ?Sized>(reader: &mut R, header: &TagHeader) -> Result<Vec<u8>> {
    let mut data = vec![0u8; header.data_size as usize];
    let available = read_full(reader, &mut data)?;
    check_payload(header, available)?;
    Ok(data)
}

/// Turn a header buffer filled with `available` bytes into a header
pub(crate) fn parse_header(raw: &[u8; TagHeader::SIZE], available: usize) -> Result<TagHeader> {
    if available < TagHeader::SIZE {
        log::debug!("tag header truncated after {} bytes", available);
        return Err(FlvError::TruncatedHeader { available });
    }

    let header = TagHeader::parse(raw);
    log::trace!(
        "decoded tag header: type={} filter={} size={} timestamp={}",
        header.flags.tag_type(),
        header.flags.filter(),
        header.data_size,
        header.logical_timestamp(),
    );
    Ok(header)
}

pub(crate) fn check_payload(header: &TagHeader, available: usize) -> Result<()> {
    if available < header.data_size as usize {
        log::debug!("tag payload truncated: {} of {} bytes", available, header.data_size);
        return Err(FlvError::TruncatedPayload {
            expected: header.data_size,
            available,
        });
    }
    Ok(())
}
