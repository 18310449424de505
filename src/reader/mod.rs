// src/reader/mod.rs
mod sync_reader;

#[cfg(feature = "async")]
mod async_reader;

pub use sync_reader::{decode, read_header};

#[cfg(feature = "async")]
pub use async_reader::decode_async;
