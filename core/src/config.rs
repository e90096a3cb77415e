//! config.rs
//! Environment-sourced settings for the boundary.
//!
//! Only two knobs exist: where the native GDeflate library lives and how
//! chatty the bindings' log output is. Empty values count as unset.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::constants::{DEFAULT_GDEFLATE_LIB_STEM, DEFAULT_LOG_FILTER, ENV_GDEFLATE_LIB, ENV_LOG};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryConfig {
    /// Explicit library path or file name.
    /// - `None` → platform default for `deflate` (`libdeflate.so`, `libdeflate.dylib`, `deflate.dll`).
    pub gdeflate_lib: Option<PathBuf>,

    /// `tracing` env-filter directive.
    /// - `None` → `DEFAULT_LOG_FILTER`.
    pub log_filter: Option<String>,
}

impl BoundaryConfig {
    pub fn new(gdeflate_lib: Option<PathBuf>, log_filter: Option<String>) -> Self {
        Self { gdeflate_lib, log_filter }
    }

    /// Snapshot of the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            gdeflate_lib: non_empty(ENV_GDEFLATE_LIB).map(PathBuf::from),
            log_filter: non_empty(ENV_LOG),
        }
    }

    /// Path handed to the dynamic loader.
    pub fn gdeflate_lib_path(&self) -> PathBuf {
        match &self.gdeflate_lib {
            Some(path) => path.clone(),
            None => PathBuf::from(default_library_name()),
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn default_library_name() -> OsString {
    libloading::library_filename(DEFAULT_GDEFLATE_LIB_STEM)
}
