// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlvError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Truncated tag header: expected 11 bytes, stream ended after {available}")]
    TruncatedHeader { available: usize },

    #[error("Truncated tag payload: header declares {expected} bytes, stream ended after {available}")]
    TruncatedPayload { expected: u32, available: usize },

    #[error("Payload too large: {0} bytes does not fit the 24-bit data size field")]
    PayloadTooLarge(usize),

    #[error("Invalid stream id: {0:#08x} (must be 0)")]
    InvalidStreamId(u32),
}

impl FlvError {
    /// True for the two truncation variants, i.e. the stream ended early.
    pub fn is_truncation(&self) -> bool {
        matches!(self, FlvError::TruncatedHeader { .. } | FlvError::TruncatedPayload { .. })
    }
}

pub type Result<T> = std::result::Result<T, FlvError>;
