//! codec/mod.rs
//! Single-page GDeflate decompression.
//!
//! - `types`: page views, status codes, the `PageCodec`/`Decompressor` seam.
//! - `native`: the libdeflate GDeflate build, loaded at runtime.
//!
//! One page per call is a fixed constraint: there is no multi-page or
//! streaming path, and no encoder.

#[allow(unsafe_code)]
pub mod native;
pub mod types;

pub use native::{GDeflateDecompressor, GDeflateLibrary, NativeGDeflate};
pub use types::*;
