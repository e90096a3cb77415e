//! hash/mod.rs
//! Text hashing for the `city64` entry point.
//!
//! The hash is computed over the UTF-8 bytes of the text, borrowed for the
//! duration of the call. The result is a plain `u64`; it is the host layer's
//! job to surface it without narrowing.
//!
//! The algorithm is Google CityHash v1.1 `CityHash64`, provided by `cityhasher`.

use std::fmt;

/// UTF-8 view of the text argument. Borrowed, never retained.
#[derive(Copy, Clone, Debug)]
pub struct ByteSequence<'a>(&'a [u8]);

impl<'a> ByteSequence<'a> {
    pub fn from_text(text: &'a str) -> Self {
        Self(text.as_bytes())
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Full-precision 64-bit hash value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashResult(u64);

impl HashResult {
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<HashResult> for u64 {
    fn from(h: HashResult) -> Self {
        h.0
    }
}

impl fmt::Display for HashResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

pub fn hash_bytes(bytes: ByteSequence<'_>) -> HashResult {
    HashResult(cityhasher::hash::<u64>(bytes.as_bytes()))
}

pub fn hash_text(text: &str) -> HashResult {
    hash_bytes(ByteSequence::from_text(text))
}
