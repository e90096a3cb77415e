//! codec/types.rs
//! Page views, status codes and the decompressor seam.

use std::fmt;

use num_enum::TryFromPrimitive;

use crate::constants::status_codes;
use crate::types::BoundaryResult;

/// Known libdeflate result values. Anything else is still carried verbatim by `CodecStatus`.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum GDeflateResult {
    Success           = status_codes::SUCCESS,
    BadData           = status_codes::BAD_DATA,
    ShortOutput       = status_codes::SHORT_OUTPUT,
    InsufficientSpace = status_codes::INSUFFICIENT_SPACE,
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Raw codec status, returned to the caller untranslated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodecStatus(i32);

impl CodecStatus {
    pub const SUCCESS: CodecStatus = CodecStatus(status_codes::SUCCESS);

    pub const fn from_raw(code: i32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == status_codes::SUCCESS
    }

    pub fn known(self) -> Option<GDeflateResult> {
        GDeflateResult::try_from_primitive(self.0).ok()
    }

    /// `"Success"`, `"BadData"`, ... or `"0x2a"` for codes libdeflate does not define.
    pub fn name(self) -> String {
        enum_name_or_hex::<GDeflateResult>(self.0)
    }
}

impl From<CodecStatus> for i32 {
    fn from(s: CodecStatus) -> Self {
        s.0
    }
}

impl fmt::Display for CodecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}

/// Result of one page decompression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageOutcome {
    pub status: CodecStatus,
    /// Codec-reported output size. Forced to 0 unless `status` is success.
    pub written: usize,
}

impl PageOutcome {
    pub fn new(status: CodecStatus, written: usize) -> Self {
        let written = if status.is_success() { written } else { 0 };
        Self { status, written }
    }
}

/// Read-only view over the caller's compressed page. Never copied.
#[derive(Debug)]
pub struct InputPage<'a> {
    bytes: &'a [u8],
}

impl<'a> InputPage<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Mutable view over the caller's output region. Written up to capacity, never grown.
#[derive(Debug)]
pub struct OutputBuffer<'a> {
    bytes: &'a mut [u8],
}

impl<'a> OutputBuffer<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr()
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes[..]
    }
}

/// Per-call codec working state. Released by `Drop`.
pub trait Decompressor {
    /// Decompress exactly one page into `out`, bounded by its capacity.
    fn decompress_page(&mut self, page: InputPage<'_>, out: OutputBuffer<'_>) -> PageOutcome;
}

/// Source of fresh decompressors. Shared across threads; holds no per-call state.
pub trait PageCodec: Sync {
    fn name(&self) -> &'static str;

    /// Create a decompressor owned by the caller's scope.
    fn acquire(&self) -> BoundaryResult<Box<dyn Decompressor + '_>>;
}
