//! codec/native.rs
//! libdeflate GDeflate decompressor, resolved from a shared library at runtime.
//!
//! Only the three decode symbols are bound. The library handle is immutable
//! once loaded and may be shared by any number of threads; every call gets
//! its own `libdeflate_gdeflate_decompressor`, freed when the guard drops.

use std::path::{Path, PathBuf};
use std::ptr::NonNull;
use std::sync::OnceLock;

use libc::{c_int, c_void, size_t};
use libloading::Library;

use crate::codec::types::{CodecStatus, Decompressor, InputPage, OutputBuffer, PageCodec, PageOutcome};
use crate::config::BoundaryConfig;
use crate::constants::{symbols, PAGES_PER_CALL};
use crate::types::{BoundaryError, BoundaryResult};

/// `struct libdeflate_gdeflate_in_page`
#[repr(C)]
struct GDeflateInPage {
    data: *const c_void,
    nbytes: size_t,
}

type AllocDecompressorFn = unsafe extern "C" fn() -> *mut c_void;
type DecompressFn = unsafe extern "C" fn(
    decompressor: *mut c_void,
    in_pages: *mut GDeflateInPage,
    in_npages: size_t,
    out: *mut c_void,
    out_nbytes_avail: size_t,
    actual_out_nbytes_ret: *mut size_t,
) -> c_int;
type FreeDecompressorFn = unsafe extern "C" fn(decompressor: *mut c_void);

/// Loaded library plus its resolved decode entry points.
pub struct GDeflateLibrary {
    path: PathBuf,
    alloc: AllocDecompressorFn,
    decompress: DecompressFn,
    free: FreeDecompressorFn,
    // Must outlive the function pointers above.
    _lib: Library,
}

impl std::fmt::Debug for GDeflateLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GDeflateLibrary").field("path", &self.path).finish_non_exhaustive()
    }
}

unsafe fn resolve<T: Copy>(lib: &Library, name: &[u8]) -> BoundaryResult<T> {
    match unsafe { lib.get::<T>(name) } {
        Ok(symbol) => Ok(*symbol),
        Err(e) => {
            let printable = String::from_utf8_lossy(name.strip_suffix(b"\0").unwrap_or(name)).into_owned();
            Err(BoundaryError::loader(format!("missing symbol {printable}"), e))
        }
    }
}

impl GDeflateLibrary {
    /// Load `path` and bind the GDeflate decode API.
    pub fn open(path: &Path) -> BoundaryResult<Self> {
        // Library initialisers run here; libdeflate has none with side effects.
        let lib = unsafe { Library::new(path) }
            .map_err(|e| BoundaryError::loader(format!("cannot load {}", path.display()), e))?;

        // The declared signatures mirror libdeflate.h of the GDeflate-enabled build.
        let alloc = unsafe { resolve::<AllocDecompressorFn>(&lib, symbols::ALLOC_DECOMPRESSOR)? };
        let decompress = unsafe { resolve::<DecompressFn>(&lib, symbols::DECOMPRESS)? };
        let free = unsafe { resolve::<FreeDecompressorFn>(&lib, symbols::FREE_DECOMPRESSOR)? };

        tracing::debug!(path = %path.display(), "loaded gdeflate library");
        Ok(Self { path: path.to_path_buf(), alloc, decompress, free, _lib: lib })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Allocate a decompressor whose lifetime is bounded by this library.
    pub fn decompressor(&self) -> BoundaryResult<GDeflateDecompressor<'_>> {
        let raw = unsafe { (self.alloc)() };
        match NonNull::new(raw) {
            Some(raw) => Ok(GDeflateDecompressor { lib: self, raw }),
            None => Err(BoundaryError::codec_unavailable("libdeflate_alloc_gdeflate_decompressor returned null")),
        }
    }
}

impl PageCodec for GDeflateLibrary {
    fn name(&self) -> &'static str {
        "gdeflate"
    }

    fn acquire(&self) -> BoundaryResult<Box<dyn Decompressor + '_>> {
        Ok(Box::new(self.decompressor()?))
    }
}

/// Owning guard over one `libdeflate_gdeflate_decompressor`.
pub struct GDeflateDecompressor<'lib> {
    lib: &'lib GDeflateLibrary,
    raw: NonNull<c_void>,
}

impl Decompressor for GDeflateDecompressor<'_> {
    fn decompress_page(&mut self, page: InputPage<'_>, mut out: OutputBuffer<'_>) -> PageOutcome {
        let mut in_page = GDeflateInPage {
            data: page.as_ptr().cast(),
            nbytes: page.len(),
        };
        let mut written: size_t = 0;

        // `in_page` borrows the caller's bytes; `out` covers exactly `capacity` writable bytes.
        let code = unsafe {
            (self.lib.decompress)(
                self.raw.as_ptr(),
                &mut in_page,
                PAGES_PER_CALL,
                out.as_mut_ptr().cast(),
                out.capacity(),
                &mut written,
            )
        };
        PageOutcome::new(CodecStatus::from_raw(code), written)
    }
}

impl Drop for GDeflateDecompressor<'_> {
    fn drop(&mut self) {
        unsafe { (self.lib.free)(self.raw.as_ptr()) }
    }
}

/// Lazily loaded codec driven by `BoundaryConfig`.
///
/// Loading happens on the first `acquire`, i.e. only after a call has passed
/// validation. A failed load is not cached; the next call tries again.
#[derive(Debug)]
pub struct NativeGDeflate {
    config: BoundaryConfig,
    library: OnceLock<GDeflateLibrary>,
}

impl NativeGDeflate {
    pub fn new(config: BoundaryConfig) -> Self {
        Self { config, library: OnceLock::new() }
    }

    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.library.get().is_some()
    }

    pub fn library(&self) -> BoundaryResult<&GDeflateLibrary> {
        if let Some(lib) = self.library.get() {
            return Ok(lib);
        }
        let path = self.config.gdeflate_lib_path();
        match GDeflateLibrary::open(&path) {
            // A racing thread may have won; its handle is kept and ours dropped.
            Ok(lib) => Ok(self.library.get_or_init(|| lib)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "gdeflate library unavailable");
                Err(e)
            }
        }
    }
}

impl PageCodec for NativeGDeflate {
    fn name(&self) -> &'static str {
        "gdeflate"
    }

    fn acquire(&self) -> BoundaryResult<Box<dyn Decompressor + '_>> {
        Ok(Box::new(self.library()?.decompressor()?))
    }
}
