//! scs-native-python
//!
//! Python bindings for scs-native-core (PyO3).

use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

use scs_native_core::config::BoundaryConfig;
use scs_native_core::constants::DEFAULT_LOG_FILTER;

mod args;
mod ffi;

/// Install a stderr subscriber once per process. A host that already set one wins.
fn init_logging(config: &BoundaryConfig) {
    let filter = EnvFilter::try_new(config.log_filter()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Python module entry point
#[pymodule]
fn scs_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let config = BoundaryConfig::from_env();
    init_logging(&config);
    ffi::register(m)?;
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        gdeflate_lib = %config.gdeflate_lib_path().display(),
        "scs_native initialised"
    );
    Ok(())
}
