//! Identifier generation for fleeting notes
//!
//! Identifiers are short random strings over `[0-9a-z]`, 4 to 11 characters
//! long. They only need to be collision resistant within one directory, so a
//! non-cryptographic RNG is fine. Uniqueness is enforced at allocation time
//! by probing the store until an unused name comes up.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};

/// Characters identifiers are drawn from
pub const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Shortest identifier length accepted by configuration
pub const MIN_LEN: usize = 4;

/// Longest identifier length accepted by configuration
pub const MAX_LEN: usize = 11;

/// A validated note identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier from a raw string (with validation)
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Identifier(id))
    }

    fn validate(id: &str) -> Result<()> {
        if !(MIN_LEN..=MAX_LEN).contains(&id.len()) {
            return Err(FleetError::invalid_value("identifier length", id.len()));
        }
        if !id.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(FleetError::invalid_value("identifier", id));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the note backing this identifier
    pub fn file_name(&self) -> String {
        format!("{}.md", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Produces candidate identifiers.
pub trait CandidateSource {
    fn candidate(&mut self, len: usize) -> String;
}

/// Uniform random candidates from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSource;

impl CandidateSource for RandomSource {
    fn candidate(&mut self, len: usize) -> String {
        generate(len)
    }
}

/// Generate `len` characters uniformly sampled from [`ALPHABET`].
pub fn generate(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Draw candidates until `exists` reports one as unused.
///
/// There is no retry bound; with length >= 4 the expected number of retries
/// is negligible. An error from `exists` aborts allocation and is returned
/// as-is.
pub fn allocate_unique<S, F>(source: &mut S, len: usize, mut exists: F) -> Result<Identifier>
where
    S: CandidateSource + ?Sized,
    F: FnMut(&Identifier) -> Result<bool>,
{
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(FleetError::invalid_value("identifier length", len));
    }

    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let candidate = Identifier::new(source.candidate(len))?;
        if !exists(&candidate)? {
            tracing::debug!(id = %candidate, attempts, "allocate_identifier");
            return Ok(candidate);
        }
        tracing::debug!(id = %candidate, "identifier_collision");
    }
}
