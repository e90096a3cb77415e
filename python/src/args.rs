//! args.rs
//! Python arguments → `HostValue`.
//!
//! Each argument is classified once, with the GIL held. Buffer exports are
//! kept alive in `Marshalled` so the memory stays pinned (no `bytearray`
//! resize) while the views are used without the GIL.

use std::borrow::Cow;

use pyo3::buffer::PyBuffer;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyString};

use scs_native_core::boundary::{HostValue, RawBuffer};

enum Slot<'a> {
    Text(Cow<'a, str>),
    Buffer { export: PyBuffer<u8>, type_name: String },
    Other(String),
}

impl<'a> Slot<'a> {
    fn from_item(item: &'a Bound<'_, PyAny>) -> PyResult<Self> {
        if let Ok(text) = item.downcast::<PyString>() {
            return Ok(Slot::Text(text_lossy(text)?));
        }
        Ok(match PyBuffer::<u8>::get_bound(item) {
            Ok(export) => Slot::Buffer { export, type_name: type_name(item) },
            Err(_) => Slot::Other(type_name(item)),
        })
    }

    fn value(&self) -> HostValue<'_> {
        match self {
            Slot::Text(text) => HostValue::text(text.as_ref()),
            Slot::Buffer { export, type_name } => {
                // The export keeps ptr..ptr+len valid and unresized.
                let raw = unsafe {
                    RawBuffer::new(
                        export.buf_ptr().cast(),
                        export.len_bytes(),
                        !export.readonly(),
                        export.is_c_contiguous(),
                    )
                };
                HostValue::Buffer(raw.named(type_name.as_str()))
            }
            Slot::Other(name) => HostValue::other(name.as_str()),
        }
    }
}

/// UTF-8 view of a `str`. Each lone surrogate becomes one U+FFFD.
fn text_lossy<'a>(text: &'a Bound<'_, PyString>) -> PyResult<Cow<'a, str>> {
    if let Ok(utf8) = text.to_cow() {
        return Ok(utf8);
    }
    let encoded = text.call_method1("encode", ("utf-16-le", "surrogatepass"))?;
    let units: Vec<u16> = encoded
        .downcast::<PyBytes>()?
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    Ok(Cow::Owned(String::from_utf16_lossy(&units)))
}

fn type_name(item: &Bound<'_, PyAny>) -> String {
    item.get_type()
        .name()
        .map(|n| n.to_string())
        .unwrap_or_else(|_| "object".to_string())
}

/// Arguments of one call, classified and pinned.
pub(crate) struct Marshalled<'a> {
    slots: Vec<Slot<'a>>,
}

impl<'a> Marshalled<'a> {
    pub(crate) fn from_items(items: &'a [Bound<'_, PyAny>]) -> PyResult<Self> {
        let slots = items.iter().map(Slot::from_item).collect::<PyResult<Vec<_>>>()?;
        Ok(Self { slots })
    }

    pub(crate) fn values(&self) -> Vec<HostValue<'_>> {
        self.slots.iter().map(Slot::value).collect()
    }
}
