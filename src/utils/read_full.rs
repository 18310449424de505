// src/utils/read_full.rs
use std::io::{self, ErrorKind, Read};

/// Read into `buf` until it is full or the stream reports end-of-stream.
///
/// Returns the number of bytes read. Unlike `read_exact`, a short count is
/// not an error, so callers can report how much of a record was available.
/// `Interrupted` is retried.
pub fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Async counterpart of [`read_full`] over tokio's `AsyncRead`.
#[cfg(feature = "async")]
pub async fn read_full_async<R>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize>
where
    R: tokio::io::AsyncRead + Unpin + ?Sized,
{
    use tokio::io::AsyncReadExt;

    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
