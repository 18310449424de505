// src/packet.rs

/// A record that knows its own size on the wire.
///
/// Outer framing code uses this to emit the "previous tag size" trailer that
/// follows every tag in a stream. Nothing in this crate writes that trailer.
pub trait SizedPacket {
    /// Total encoded length in bytes, header included
    fn size(&self) -> usize;

    /// The trailer value a sequencing layer writes after this record
    fn previous_tag_size(&self) -> u32 {
        self.size() as u32
    }
}
