//! types.rs
//! Boundary error taxonomy shared by every entry point.
//!
//! Argument-shape problems and an unusable native codec are raised as
//! `BoundaryError`. Codec statuses are data and never appear here; see
//! `codec::CodecStatus`.

use std::fmt;

use thiserror::Error;

/// Exported entry points, used to label validation failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Entry {
    City64,
    GDeflate,
    GDeflateInto,
}

impl Entry {
    /// Number of host arguments the entry point accepts.
    pub const fn arity(self) -> usize {
        match self {
            Entry::City64 => 1,
            Entry::GDeflate | Entry::GDeflateInto => 2,
        }
    }

    /// Host-visible function name.
    pub const fn name(self) -> &'static str {
        match self {
            Entry::City64       => "city64",
            Entry::GDeflate     => "gdeflate",
            Entry::GDeflateInto => "gdeflate_into",
        }
    }

    pub fn check_arity(self, given: usize) -> BoundaryResult<()> {
        if given == self.arity() {
            Ok(())
        } else {
            Err(BoundaryError::Arity { entry: self, expected: self.arity(), given })
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unified boundary error.
/// - `Arity` and `Type` are programmer errors raised before any native call.
/// - `Overlap` guards the zero-copy views: input and output may not share bytes.
/// - `CodecUnavailable` means the native library or its decompressor could not be obtained.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("{entry}() takes exactly {expected} argument(s) ({given} given)")]
    Arity { entry: Entry, expected: usize, given: usize },

    #[error("{entry}() argument {position} must be {expected}, not {found}")]
    Type {
        entry: Entry,
        /// 1-based, as the host caller counts.
        position: usize,
        expected: &'static str,
        found: String,
    },

    #[error("{entry}() input and output buffers overlap")]
    Overlap { entry: Entry },

    #[error("gdeflate codec unavailable: {reason}")]
    CodecUnavailable {
        reason: String,
        #[source]
        source: Option<libloading::Error>,
    },
}

/// Result alias used throughout the crate.
pub type BoundaryResult<T> = Result<T, BoundaryError>;

impl BoundaryError {
    pub fn codec_unavailable(reason: impl Into<String>) -> Self {
        BoundaryError::CodecUnavailable { reason: reason.into(), source: None }
    }

    pub fn loader(reason: impl Into<String>, source: libloading::Error) -> Self {
        BoundaryError::CodecUnavailable { reason: reason.into(), source: Some(source) }
    }

    /// True for the errors a well-formed call can never produce.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            BoundaryError::Arity { .. } | BoundaryError::Type { .. } | BoundaryError::Overlap { .. }
        )
    }
}
