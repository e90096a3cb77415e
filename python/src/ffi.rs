//! ffi.rs
//! Python-facing functions and exceptions.
//!
//! Every function takes `*args` so the argument count is checked here,
//! before any conversion, with the same message the core produces.

use std::error::Error as _;
use std::sync::OnceLock;

use pyo3::create_exception;
use pyo3::exceptions::{PyRuntimeError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyTuple;

use scs_native_core::boundary;
use scs_native_core::codec::{CodecStatus, NativeGDeflate, PageOutcome};
use scs_native_core::config::BoundaryConfig;
use scs_native_core::constants::status_codes;
use scs_native_core::types::{BoundaryError, BoundaryResult, Entry};

use crate::args::Marshalled;

create_exception!(scs_native, ArityError, PyTypeError, "Wrong number of arguments.");
create_exception!(scs_native, OverlapError, PyValueError, "Input and output buffers share memory.");
create_exception!(scs_native, CodecUnavailable, PyRuntimeError, "The GDeflate library could not be loaded.");

static NATIVE: OnceLock<NativeGDeflate> = OnceLock::new();

fn native() -> &'static NativeGDeflate {
    NATIVE.get_or_init(|| NativeGDeflate::new(BoundaryConfig::from_env()))
}

/// Map core errors to Python exceptions
pub(crate) fn to_py_err(err: BoundaryError) -> PyErr {
    let mut msg = err.to_string();
    if let Some(source) = err.source() {
        msg.push_str(": ");
        msg.push_str(&source.to_string());
    }
    match err {
        BoundaryError::Arity { .. } => ArityError::new_err(msg),
        BoundaryError::Type { .. } => PyTypeError::new_err(msg),
        BoundaryError::Overlap { .. } => OverlapError::new_err(msg),
        BoundaryError::CodecUnavailable { .. } => CodecUnavailable::new_err(msg),
    }
}

/// Check arity, pin the arguments, then run `f` without the GIL.
fn call<T, F>(py: Python<'_>, entry: Entry, args: &Bound<'_, PyTuple>, f: F) -> PyResult<T>
where
    T: Send,
    F: Send + for<'v> FnOnce(&mut [boundary::HostValue<'v>]) -> BoundaryResult<T>,
{
    entry.check_arity(args.len()).map_err(to_py_err)?;

    let items: Vec<Bound<'_, PyAny>> = args.iter().collect();
    let marshalled = Marshalled::from_items(&items)?;
    let mut values = marshalled.values();

    py.allow_threads(|| f(&mut values)).map_err(to_py_err)
}

/// city64(text) -> int
///
/// CityHash64 of the UTF-8 bytes of `text`, as an unsigned 64-bit int.
#[pyfunction]
#[pyo3(signature = (*args))]
fn city64(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<u64> {
    call(py, Entry::City64, args, |values| boundary::city64(values).map(u64::from))
}

/// gdeflate(input, output) -> int
///
/// Decompress one GDeflate page from `input` into `output`.
/// Returns the libdeflate status; 0 means success.
#[pyfunction]
#[pyo3(signature = (*args))]
fn gdeflate(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<i32> {
    call(py, Entry::GDeflate, args, |values| {
        boundary::gdeflate(native(), values).map(|outcome| outcome.status.code())
    })
}

/// gdeflate_into(input, output) -> (int, int)
///
/// Like `gdeflate`, also returning the number of bytes written.
#[pyfunction]
#[pyo3(signature = (*args))]
fn gdeflate_into(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<(i32, usize)> {
    call(py, Entry::GDeflateInto, args, |values| {
        boundary::gdeflate_into(native(), values)
            .map(|PageOutcome { status, written }| (status.code(), written))
    })
}

/// status_name(code) -> str
#[pyfunction]
fn status_name(code: i32) -> String {
    CodecStatus::from_raw(code).name()
}

// -----------------------------------------------------------------------------
// Module registration
// -----------------------------------------------------------------------------
pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    m.add_function(wrap_pyfunction!(city64, m)?)?;
    m.add_function(wrap_pyfunction!(gdeflate, m)?)?;
    m.add_function(wrap_pyfunction!(gdeflate_into, m)?)?;
    m.add_function(wrap_pyfunction!(status_name, m)?)?;

    m.add("ArityError", py.get_type_bound::<ArityError>())?;
    m.add("OverlapError", py.get_type_bound::<OverlapError>())?;
    m.add("CodecUnavailable", py.get_type_bound::<CodecUnavailable>())?;

    m.add("GDEFLATE_SUCCESS", status_codes::SUCCESS)?;
    m.add("GDEFLATE_BAD_DATA", status_codes::BAD_DATA)?;
    m.add("GDEFLATE_SHORT_OUTPUT", status_codes::SHORT_OUTPUT)?;
    m.add("GDEFLATE_INSUFFICIENT_SPACE", status_codes::INSUFFICIENT_SPACE)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
