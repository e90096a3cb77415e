//! scs-native-core
//!
//! Native boundary for a managed host: CityHash64 over text and single-page
//! GDeflate decompression into a caller-owned buffer.
//! No Python, no PyO3. Bindings live in the `python` crate.
//! Raw-pointer code is confined to `codec::native` and `boundary::host`.

#![deny(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;

// Capabilities
pub mod codec;
pub mod hash;

// Host-facing entry points
pub mod boundary;

// -----------------------------------------------------------------------------
// Prelude (binding crates)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::boundary::{city64, gdeflate, gdeflate_into, HostValue, RawBuffer};
    pub use crate::codec::{CodecStatus, GDeflateResult, NativeGDeflate, PageCodec, PageOutcome};
    pub use crate::config::BoundaryConfig;
    pub use crate::hash::HashResult;
    pub use crate::types::{BoundaryError, BoundaryResult, Entry};
}
