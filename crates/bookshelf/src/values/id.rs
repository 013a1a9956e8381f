use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Number of characters in a generated id.
pub const BOOK_ID_LEN: usize = 16;

/// URL-safe id alphabet: 64 symbols, so each character carries 6 bits.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Opaque, server-assigned identifier of a book.
///
/// Generated ids are 16 characters drawn uniformly from a 64-symbol
/// URL-safe alphabet (96 bits of randomness), so collisions are negligible
/// for an in-memory collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..BOOK_ID_LEN)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BookId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
