// src/reader/async_reader.rs
use crate::error::Result;
use crate::reader::sync_reader::{check_payload, parse_header};
use crate::tag::{Tag, TagHeader};
use crate::utils::read_full_async;
use tokio::io::AsyncRead;

/// Async version of [`decode`](super::decode) over tokio's `AsyncRead`.
///
/// Same reads, same errors. Dropping the future mid-read leaves the stream
/// position unspecified, as does any error.
pub async fn decode_async<R: AsyncRead + Unpin + ?Sized>(reader: &mut R) -> Result<Tag> {
    let mut raw = [0u8; TagHeader::SIZE];
    let available = read_full_async(reader, &mut raw).await?;
    let header = parse_header(&raw, available)?;

    let mut data = vec![0u8; header.data_size as usize];
    let available = read_full_async(reader, &mut data).await?;
    check_payload(&header, available)?;

    Ok(Tag::from_parts(header, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlvError;

    #[tokio::test]
    async fn test_decode_async_from_slice() {
        let raw: &[u8] = &[0x09, 0x00, 0x00, 0x01, 0x00, 0x00, 0x21, 0x00, 0x00, 0x00, 0x00, 0x17];
        let mut reader = raw;
        let tag = decode_async(&mut reader).await.unwrap();
        assert_eq!(tag.tag_type, 9);
        assert_eq!(tag.timestamp, 0x21);
        assert_eq!(tag.data, vec![0x17]);
    }

    #[tokio::test]
    async fn test_decode_async_truncated_payload() {
        let raw: &[u8] = &[0x08, 0x00, 0x00, 0x64, 0, 0, 0, 0, 0, 0, 0, 0xAF, 0x01];
        let mut reader = raw;
        let err = decode_async(&mut reader).await.unwrap_err();
        assert!(matches!(err, FlvError::TruncatedPayload { expected: 100, available: 2 }));
    }
}
