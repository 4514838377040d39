//! Password digests.
//!
//! The store never calls a hash function directly; it holds a boxed
//! `PasswordHasher` so the algorithm can be chosen from `.credstore.toml`.
//!
//! - `Md5Hasher` (default): unsalted MD5, lowercase hex.  Kept so digests
//!   match existing backup files bit-for-bit.  MD5 is broken; do not use it
//!   for anything new.
//! - `Argon2Hasher`: salted Argon2id, stored as a PHC string
//!   (`$argon2id$v=19$m=...`).

use std::fmt;

use argon2::password_hash::{
    PasswordHash, PasswordHasher as PhcHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use md5::{Digest, Md5};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::errors::{CredStoreError, Result};

/// Length of the random Argon2 salt in bytes.
const SALT_LEN: usize = 16;

/// Computes and checks password digests.
pub trait PasswordHasher {
    /// Which algorithm this hasher implements.
    fn algorithm(&self) -> HashAlgorithm;

    /// Compute the digest of `password`.
    fn hash(&self, password: &str) -> Result<String>;

    /// Check `password` against a previously stored `digest`.
    ///
    /// The default recomputes the digest and compares in constant time,
    /// which is correct for any deterministic hasher.
    fn verify(&self, password: &str, digest: &str) -> bool {
        match self.hash(password) {
            Ok(computed) => computed.as_bytes().ct_eq(digest.as_bytes()).into(),
            Err(_) => false,
        }
    }
}

/// Hash algorithms selectable from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Md5,
    Argon2,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md5 => f.write_str("md5"),
            Self::Argon2 => f.write_str("argon2"),
        }
    }
}

// ---------------------------------------------------------------------------
// MD5
// ---------------------------------------------------------------------------

/// Unsalted MD5, 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hasher;

impl PasswordHasher for Md5Hasher {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Md5
    }

    fn hash(&self, password: &str) -> Result<String> {
        Ok(format!("{:x}", Md5::digest(password.as_bytes())))
    }
}

// ---------------------------------------------------------------------------
// Argon2id
// ---------------------------------------------------------------------------

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Parallelism lanes.
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        // OWASP minimum for Argon2id.
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Salted Argon2id producing PHC strings.
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// Build a hasher with explicit cost parameters.
    pub fn new(params: &Argon2Params) -> Result<Self> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| CredStoreError::HashingFailed(format!("invalid Argon2 params: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordHasher for Argon2Hasher {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Argon2
    }

    fn hash(&self, password: &str) -> Result<String> {
        let mut salt_bytes = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt_bytes);

        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| CredStoreError::HashingFailed(format!("salt encoding: {e}")))?;

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredStoreError::HashingFailed(format!("Argon2id hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Parses the stored PHC string and re-derives with its own salt and
    /// parameters.  Anything that is not a PHC string (e.g. a legacy MD5
    /// digest) never verifies.
    fn verify(&self, password: &str, digest: &str) -> bool {
        match PasswordHash::new(digest) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// Build the boxed hasher for `algorithm`.
pub fn hasher_for(
    algorithm: HashAlgorithm,
    argon2_params: &Argon2Params,
) -> Result<Box<dyn PasswordHasher>> {
    match algorithm {
        HashAlgorithm::Md5 => Ok(Box::new(Md5Hasher)),
        HashAlgorithm::Argon2 => Ok(Box::new(Argon2Hasher::new(argon2_params)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cheap parameters so the tests stay fast.
    fn fast_params() -> Argon2Params {
        Argon2Params {
            memory_kib: 1_024,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn md5_matches_known_vectors() {
        let h = Md5Hasher;
        assert_eq!(h.hash("").unwrap(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(h.hash("hunter2").unwrap(), "2ab96390c7dbe3439de74d0c9b0b1767");
        assert_eq!(h.hash("password").unwrap(), "5f4dcc3b5aa765d61d8327deb882cf99");
    }

    #[test]
    fn md5_is_deterministic_lowercase_hex() {
        let h = Md5Hasher;
        let a = h.hash("some input").unwrap();
        let b = h.hash("some input").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.bytes().all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c)));
    }

    #[test]
    fn md5_verify_uses_digest_equality() {
        let h = Md5Hasher;
        assert!(h.verify("hunter2", "2ab96390c7dbe3439de74d0c9b0b1767"));
        assert!(!h.verify("hunter3", "2ab96390c7dbe3439de74d0c9b0b1767"));
        assert!(!h.verify("hunter2", "2ab96390"));
    }

    #[test]
    fn argon2_hashes_are_salted() {
        let h = Argon2Hasher::new(&fast_params()).unwrap();
        let a = h.hash("hunter2").unwrap();
        let b = h.hash("hunter2").unwrap();
        assert_ne!(a, b, "two hashes of the same password must differ");
        assert!(a.starts_with("$argon2id$"));
    }

    #[test]
    fn argon2_verify_roundtrip() {
        let h = Argon2Hasher::new(&fast_params()).unwrap();
        let digest = h.hash("correct horse").unwrap();
        assert!(h.verify("correct horse", &digest));
        assert!(!h.verify("wrong horse", &digest));
    }

    #[test]
    fn argon2_rejects_non_phc_digest() {
        let h = Argon2Hasher::new(&fast_params()).unwrap();
        assert!(!h.verify("hunter2", "2ab96390c7dbe3439de74d0c9b0b1767"));
    }

    #[test]
    fn argon2_rejects_invalid_params() {
        let params = Argon2Params {
            memory_kib: 1,
            iterations: 0,
            parallelism: 0,
        };
        assert!(Argon2Hasher::new(&params).is_err());
    }

    #[test]
    fn hasher_for_selects_algorithm() {
        let md5 = hasher_for(HashAlgorithm::Md5, &fast_params()).unwrap();
        assert_eq!(md5.algorithm(), HashAlgorithm::Md5);
        let argon = hasher_for(HashAlgorithm::Argon2, &fast_params()).unwrap();
        assert_eq!(argon.algorithm(), HashAlgorithm::Argon2);
    }
}
