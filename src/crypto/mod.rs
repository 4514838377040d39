//! Cryptographic capabilities for credstore.
//!
//! This module provides:
//! - Pluggable password digests: MD5 and Argon2id (`hash`)
//! - Random alphanumeric password generation (`generator`)

pub mod generator;
pub mod hash;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{Md5Hasher, PasswordGenerator, ...};
pub use generator::{GeneratorKind, PasswordGenerator, ALPHABET, DEFAULT_LENGTH};
pub use hash::{hasher_for, Argon2Hasher, Argon2Params, HashAlgorithm, Md5Hasher, PasswordHasher};
