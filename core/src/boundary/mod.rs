//! boundary/mod.rs
//! Entry points as the host sees them.
//!
//! Every call is one linear sequence:
//! validate arity → validate kinds → build views → acquire → invoke → release → return.
//! Argument errors are returned before any decompressor exists. Codec
//! statuses come back inside `PageOutcome`, never as `Err`.

#[allow(unsafe_code)]
pub mod host;

pub use host::{HostValue, RawBuffer};

use crate::codec::{InputPage, OutputBuffer, PageCodec, PageOutcome};
use crate::hash::{hash_text, HashResult};
use crate::types::{BoundaryError, BoundaryResult, Entry};

fn type_error(entry: Entry, index: usize, expected: &'static str, found: &HostValue<'_>) -> BoundaryError {
    BoundaryError::Type {
        entry,
        position: index + 1,
        expected,
        found: found.kind().to_string(),
    }
}

/// `city64(text) -> u64`
pub fn city64(args: &[HostValue<'_>]) -> BoundaryResult<HashResult> {
    Entry::City64.check_arity(args.len())?;
    match &args[0] {
        HostValue::Text(text) => {
            let hash = hash_text(text);
            tracing::trace!(entry = %Entry::City64, len = text.len(), hash = %hash, "hashed");
            Ok(hash)
        }
        other => Err(type_error(Entry::City64, 0, "str", other)),
    }
}

/// `gdeflate(input, output) -> status`
///
/// The argument list is borrowed exclusively: the output view built from it
/// is the only live path to those bytes for the duration of the call.
pub fn gdeflate<C>(codec: &C, args: &mut [HostValue<'_>]) -> BoundaryResult<PageOutcome>
where
    C: PageCodec + ?Sized,
{
    run_page(Entry::GDeflate, codec, args)
}

/// `gdeflate_into(input, output) -> (status, written)`
pub fn gdeflate_into<C>(codec: &C, args: &mut [HostValue<'_>]) -> BoundaryResult<PageOutcome>
where
    C: PageCodec + ?Sized,
{
    run_page(Entry::GDeflateInto, codec, args)
}

fn run_page<C>(entry: Entry, codec: &C, args: &mut [HostValue<'_>]) -> BoundaryResult<PageOutcome>
where
    C: PageCodec + ?Sized,
{
    let (input, output) = page_views(entry, args)?;
    decompress_page(codec, input, output)
}

/// Validate the two buffer arguments and build the zero-copy views.
fn page_views<'a>(
    entry: Entry,
    args: &'a mut [HostValue<'_>],
) -> BoundaryResult<(InputPage<'a>, OutputBuffer<'a>)> {
    let given = args.len();
    let [input, output] = args else {
        return Err(BoundaryError::Arity { entry, expected: entry.arity(), given });
    };

    if !matches!(input, HostValue::Buffer(b) if b.is_contiguous()) {
        return Err(type_error(entry, 0, "a contiguous buffer", input));
    }
    if !matches!(output, HostValue::Buffer(b) if b.is_contiguous() && b.is_writable()) {
        return Err(type_error(entry, 1, "a writable contiguous buffer", output));
    }
    let (HostValue::Buffer(input), HostValue::Buffer(output)) = (input, output) else {
        unreachable!("kinds checked above")
    };

    // Kinds are settled above; the only remaining refusal is shared bytes.
    let (input, output) = RawBuffer::split_views(input, output).ok_or(BoundaryError::Overlap { entry })?;
    Ok((InputPage::new(input), OutputBuffer::new(output)))
}

/// Decompress one page with a decompressor scoped to this call.
pub fn decompress_page<C>(codec: &C, input: InputPage<'_>, output: OutputBuffer<'_>) -> BoundaryResult<PageOutcome>
where
    C: PageCodec + ?Sized,
{
    let (input_len, capacity) = (input.len(), output.capacity());

    let mut decompressor = codec.acquire()?;
    let outcome = decompressor.decompress_page(input, output);
    drop(decompressor);

    tracing::trace!(
        codec = codec.name(),
        input_len,
        capacity,
        status = outcome.status.code(),
        written = outcome.written,
        "page decompressed"
    );
    Ok(outcome)
}
