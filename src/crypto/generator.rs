//! Random password generation.
//!
//! Passwords are drawn uniformly, with replacement, from the 62-character
//! alphanumeric alphabet.  The random source is injected so callers can
//! pick between a fast PRNG and the thread-local CSPRNG.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Characters a generated password may contain.
pub const ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length used when none is given.
pub const DEFAULT_LENGTH: usize = 8;

/// Random sources selectable from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Small non-cryptographic PRNG seeded once from the OS.
    #[default]
    Fast,
    /// Thread-local cryptographically secure generator.
    Secure,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => f.write_str("fast"),
            Self::Secure => f.write_str("secure"),
        }
    }
}

/// Generates passwords from an owned random source.
pub struct PasswordGenerator {
    rng: Box<dyn RngCore>,
}

impl PasswordGenerator {
    /// Wrap an arbitrary random source.
    pub fn new(rng: Box<dyn RngCore>) -> Self {
        Self { rng }
    }

    /// Non-cryptographic PRNG.  Fine for throwaway values, not for secrets.
    pub fn fast() -> Self {
        Self::new(Box::new(SmallRng::from_os_rng()))
    }

    /// Thread-local CSPRNG.
    pub fn secure() -> Self {
        Self::new(Box::new(rand::rng()))
    }

    /// Deterministic generator for reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(SmallRng::seed_from_u64(seed)))
    }

    /// Build the generator for `kind`.
    pub fn for_kind(kind: GeneratorKind) -> Self {
        match kind {
            GeneratorKind::Fast => Self::fast(),
            GeneratorKind::Secure => Self::secure(),
        }
    }

    /// Produce `length` characters from `ALPHABET`.  Zero yields "".
    pub fn generate(&mut self, length: usize) -> String {
        let rng: &mut dyn RngCore = &mut *self.rng;
        (0..length)
            .map(|_| {
                let idx = rng.random_range(0..ALPHABET.len());
                char::from(ALPHABET[idx])
            })
            .collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::fast()
    }
}
