/// Environment variable naming the libdeflate build that exports the GDeflate API.
pub const ENV_GDEFLATE_LIB: &str = "SCS_NATIVE_GDEFLATE_LIB";

/// Environment variable holding the `tracing` filter directive for the bindings.
pub const ENV_LOG: &str = "SCS_NATIVE_LOG";

/// Filter used when `SCS_NATIVE_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Stem handed to `libloading::library_filename` when no explicit path is configured.
pub const DEFAULT_GDEFLATE_LIB_STEM: &str = "deflate";

/// Exactly one page per decompression call.
pub const PAGES_PER_CALL: usize = 1;

/// libdeflate result codes (mirrored from `enum libdeflate_result`).
pub mod status_codes {
    pub const SUCCESS: i32            = 0;
    pub const BAD_DATA: i32           = 1;
    pub const SHORT_OUTPUT: i32       = 2;
    pub const INSUFFICIENT_SPACE: i32 = 3;
}

/// Exported GDeflate symbol names (NUL-terminated for `libloading`).
pub mod symbols {
    pub const ALLOC_DECOMPRESSOR: &[u8] = b"libdeflate_alloc_gdeflate_decompressor\0";
    pub const DECOMPRESS: &[u8]         = b"libdeflate_gdeflate_decompress\0";
    pub const FREE_DECOMPRESSOR: &[u8]  = b"libdeflate_free_gdeflate_decompressor\0";
}
