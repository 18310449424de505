// src/writer/async_writer.rs
use crate::error::Result;
use crate::tag::Tag;
use crate::writer::sync_writer::encode_header;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Async version of [`encode`](super::encode) over tokio's `AsyncWrite`.
///
/// Validation happens before the first await, so a rejected tag writes
/// nothing. The writer is not flushed.
pub async fn encode_async<W: AsyncWrite + Unpin + ?Sized>(tag: &Tag, writer: &mut W) -> Result<()> {
    let header = encode_header(tag)?;
    writer.write_all(&header).await?;
    writer.write_all(&tag.data).await?;
    Ok(())
}
