//! boundary/host.rs
//! Host-independent argument model.
//!
//! A binding layer turns each host argument into a `HostValue` and hands the
//! list to the entry points in `boundary`. Nothing here copies buffer
//! contents; a `RawBuffer` is only an address, a length and two flags.
//! All raw-pointer access of the crate's argument path lives in this file.

use std::borrow::Cow;
use std::marker::PhantomData;

/// One host argument.
#[derive(Debug)]
pub enum HostValue<'a> {
    /// Host text, already available as UTF-8.
    Text(Cow<'a, str>),
    /// Host binary buffer export.
    Buffer(RawBuffer<'a>),
    /// Anything else; only the type name survives, for the error message.
    Other { type_name: Cow<'a, str> },
}

impl<'a> HostValue<'a> {
    pub fn text(s: impl Into<Cow<'a, str>>) -> Self {
        HostValue::Text(s.into())
    }

    pub fn other(type_name: impl Into<Cow<'a, str>>) -> Self {
        HostValue::Other { type_name: type_name.into() }
    }

    /// Name used in `TypeError` messages. Buffers report their host type
    /// when the binding supplied one.
    pub fn kind(&self) -> &str {
        match self {
            HostValue::Text(_) => "str",
            HostValue::Buffer(b) => match b.type_name() {
                Some(name) => name,
                None if !b.is_contiguous() => "non-contiguous buffer",
                None if b.is_writable() => "writable buffer",
                None => "read-only buffer",
            },
            HostValue::Other { type_name } => type_name,
        }
    }
}

/// Base address and byte length of a caller-owned buffer.
///
/// Caller contract: for `'a` the region stays allocated and is neither
/// resized nor mutated by anyone else. The boundary takes no lock and makes
/// no copy.
///
/// A `RawBuffer` is `Send` but not `Sync`, so one argument list cannot be
/// decoded into from two threads at once:
///
/// ```compile_fail
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<scs_native_core::boundary::RawBuffer<'static>>();
/// ```
#[derive(Debug)]
pub struct RawBuffer<'a> {
    ptr: *mut u8,
    len: usize,
    writable: bool,
    contiguous: bool,
    type_name: Option<Cow<'a, str>>,
    _region: PhantomData<&'a mut [u8]>,
}

// Moving the handle between threads moves the only access path with it.
unsafe impl Send for RawBuffer<'_> {}

impl<'a> RawBuffer<'a> {
    /// # Safety
    /// `ptr..ptr+len` must be valid for reads for `'a` (and for writes when
    /// `writable`), and must not be accessed through any other path while a
    /// call using this buffer is in flight. When `contiguous` is false the
    /// region is never dereferenced.
    pub unsafe fn new(ptr: *mut u8, len: usize, writable: bool, contiguous: bool) -> Self {
        Self { ptr, len, writable, contiguous, type_name: None, _region: PhantomData }
    }

    /// Read-only buffer over a Rust slice.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self {
            ptr: bytes.as_ptr() as *mut u8,
            len: bytes.len(),
            writable: false,
            contiguous: true,
            type_name: None,
            _region: PhantomData,
        }
    }

    /// Writable buffer over a Rust slice.
    pub fn from_mut_slice(bytes: &'a mut [u8]) -> Self {
        Self {
            ptr: bytes.as_mut_ptr(),
            len: bytes.len(),
            writable: true,
            contiguous: true,
            type_name: None,
            _region: PhantomData,
        }
    }

    /// Attach the host type name (`bytes`, `bytearray`, ...) for error messages.
    pub fn named(mut self, type_name: impl Into<Cow<'a, str>>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    pub fn is_contiguous(&self) -> bool {
        self.contiguous
    }

    pub fn addr(&self) -> usize {
        self.ptr as usize
    }

    /// Whether the two byte ranges share at least one byte.
    pub fn overlaps(&self, other: &RawBuffer<'_>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a, b) = (self.addr(), other.addr());
        a < b.saturating_add(other.len) && b < a.saturating_add(self.len)
    }

    /// Byte views for one decompression call.
    ///
    /// `None` unless both regions are contiguous, the output is writable and
    /// the two share no byte. The output is borrowed exclusively for the
    /// lifetime of its view.
    pub(crate) fn split_views<'v>(
        input: &'v RawBuffer<'_>,
        output: &'v mut RawBuffer<'_>,
    ) -> Option<(&'v [u8], &'v mut [u8])> {
        if !input.contiguous || !output.contiguous || !output.writable || input.overlaps(output) {
            return None;
        }
        // Valid per the constructor contract; disjoint; `output` held by `&mut`.
        let input_view: &[u8] = if input.len == 0 || input.ptr.is_null() {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(input.ptr as *const u8, input.len) }
        };
        let output_view: &mut [u8] = if output.len == 0 || output.ptr.is_null() {
            &mut []
        } else {
            unsafe { std::slice::from_raw_parts_mut(output.ptr, output.len) }
        };
        Some((input_view, output_view))
    }
}
