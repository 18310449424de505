// src/utils/mod.rs
mod endian;
mod read_full;

pub(crate) use endian::*;
pub(crate) use read_full::*;
