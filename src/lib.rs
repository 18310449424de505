// src/lib.rs
//! # flvtag-rs
//!
//! Bit-exact reading and writing of single FLV tags: the 11-byte tag header
//! followed by an opaque payload.
//!
//! ## Features
//!
//! - 🎯 **Exact layout**: named masks for the packed first byte, one shared helper for every 24-bit field
//! - 🔒 **No silent truncation**: oversized payloads and nonzero stream ids are rejected before anything is written
//! - 📦 **Owned payloads**: every decoded tag owns a freshly allocated buffer
//! - ⚡ **Sync and async**: `std::io` and, with the `async` feature, tokio I/O
//!
//! The crate deals with one tag at a time. The FLV file header, the
//! "previous tag size" trailers between tags and the meaning of audio/video
//! payloads belong to the layer above.
//!
//! ## Quick Start
//!
//! ```rust
//! use flvtag_rs::*;
//!
//! fn main() -> Result<()> {
//!     let tag = Tag::new(TagType::Video, 40, vec![0x17, 0x01, 0x00, 0x00, 0x00]);
//!
//!     let mut wire = Vec::new();
//!     encode(&tag, &mut wire)?;
//!     assert_eq!(wire.len(), tag.size());
//!
//!     let decoded = decode(&mut wire.as_slice())?;
//!     assert_eq!(decoded.kind(), Some(TagType::Video));
//!     assert_eq!(decoded.data_size as usize, decoded.data.len());
//!     Ok(())
//! }
//! ```
//!
//! ### Async
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! use flvtag_rs::*;
//!
//! # #[cfg(feature = "async")]
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut stream = tokio::net::TcpStream::connect("127.0.0.1:1935").await?;
//!     let tag = decode_async(&mut stream).await?;
//!     println!("{} ms, {} bytes", tag.logical_timestamp(), tag.data.len());
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod packet;
pub mod tag;
pub mod reader;
pub mod writer;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{FlvError, Result};

pub use types::{TagType, TagFlags};

pub use packet::SizedPacket;

pub use tag::{Tag, TagHeader};

pub use reader::{decode, read_header};
pub use writer::encode;

#[cfg(feature = "async")]
pub use reader::decode_async;
#[cfg(feature = "async")]
pub use writer::encode_async;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use flvtag_rs::prelude::*;
    //! ```

    pub use crate::error::{FlvError, Result};
    pub use crate::packet::SizedPacket;
    pub use crate::tag::Tag;
    pub use crate::types::TagType;
    pub use crate::reader::decode;
    pub use crate::writer::encode;

    #[cfg(feature = "async")]
    pub use crate::reader::decode_async;
    #[cfg(feature = "async")]
    pub use crate::writer::encode_async;
}

/// Size of the fixed tag header in bytes
pub const TAG_HEADER_SIZE: usize = TagHeader::SIZE;

/// Largest payload a tag can carry (24-bit size field)
pub const MAX_TAG_DATA_SIZE: u32 = TagHeader::MAX_DATA_SIZE;

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(TAG_HEADER_SIZE, 11);
        assert_eq!(MAX_TAG_DATA_SIZE, 16_777_215);
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_tag_type_codes() {
        assert_eq!(TagType::Audio.as_u8(), 0x08);
        assert_eq!(TagType::Video.as_u8(), 0x09);
        assert_eq!(TagType::ScriptData.as_u8(), 0x12);
    }

    #[test]
    fn test_video_scenario() {
        let tag = Tag::new(TagType::Video, 0, vec![0x17, 0x01, 0x00, 0x00, 0x00, 0x01]);
        let mut wire = Vec::new();
        encode(&tag, &mut wire).unwrap();

        let decoded = decode(&mut wire.as_slice()).unwrap();
        assert_eq!(decoded.data_size as usize, tag.data.len());
        assert_eq!(decoded.tag_type, 9);
        assert_eq!(decoded.logical_timestamp(), 0);
        assert_eq!(decoded, tag);
    }

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;
        let tag = Tag::new(TagType::Audio, 0, Vec::new());
        assert_eq!(tag.size(), 11);
    }
}
