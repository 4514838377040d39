//! The in-memory credential store.
//!
//! `CredentialStore` maps usernames to password digests and can dump
//! itself to, or merge itself from, a flat backup file.  Hashing and
//! password generation are delegated to the capabilities it was built
//! with, so callers pick the algorithms (see `Settings::build_store`).

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use indexmap::IndexMap;

use crate::crypto::{
    HashAlgorithm, Md5Hasher, PasswordGenerator, PasswordHasher, DEFAULT_LENGTH,
};
use crate::errors::Result;

use super::backup;

/// Username -> digest map in insertion order.
pub type PasswordMap = IndexMap<String, String>;

/// Username/digest store with pluggable hashing and generation.
pub struct CredentialStore {
    /// Username -> digest.  Overwriting a user keeps its original position.
    passwords: PasswordMap,

    /// Computes and checks digests.
    hasher: Box<dyn PasswordHasher>,

    /// Source for `generate_password`.
    generator: PasswordGenerator,
}

impl CredentialStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Empty store using MD5 digests and the fast generator.
    pub fn new() -> Self {
        Self::with_capabilities(Box::new(Md5Hasher), PasswordGenerator::fast())
    }

    /// Empty store using the given hasher and generator.
    pub fn with_capabilities(
        hasher: Box<dyn PasswordHasher>,
        generator: PasswordGenerator,
    ) -> Self {
        Self {
            passwords: PasswordMap::new(),
            hasher,
            generator,
        }
    }

    // ------------------------------------------------------------------
    // Passwords
    // ------------------------------------------------------------------

    /// Generate a random alphanumeric password of `length` characters.
    ///
    /// The result is not stored.
    pub fn generate_password(&mut self, length: usize) -> String {
        self.generator.generate(length)
    }

    /// `generate_password` with the default length of 8.
    pub fn generate_default_password(&mut self) -> String {
        self.generate_password(DEFAULT_LENGTH)
    }

    /// Digest of `password` under this store's hasher.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        self.hasher.hash(password)
    }

    /// Hash `password` and record it for `username`, replacing any
    /// previous digest.  No validation is applied to either argument.
    pub fn store_password(&mut self, username: &str, password: &str) -> Result<()> {
        let digest = self.hash_password(password)?;
        self.passwords.insert(username.to_string(), digest);
        Ok(())
    }

    /// `true` iff `username` is known and `password` matches its digest.
    ///
    /// An unknown user and a wrong password are indistinguishable.
    pub fn verify_password(&self, username: &str, password: &str) -> bool {
        self.passwords
            .get(username)
            .is_some_and(|digest| self.hasher.verify(password, digest))
    }

    /// Live view of the whole map; no copy is made.
    pub fn get_all_passwords(&self) -> &PasswordMap {
        &self.passwords
    }

    /// Live mutable handle on the map.  Changes made through it are changes
    /// to the store; digests inserted here are not checked.
    pub fn get_all_passwords_mut(&mut self) -> &mut PasswordMap {
        &mut self.passwords
    }

    /// Remove `username`.  Returns `true` if it was present.
    pub fn remove_user(&mut self, username: &str) -> bool {
        self.passwords.shift_remove(username).is_some()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Write every entry to `path` as `username:digest` lines.
    ///
    /// The file is truncated first and written in place.  If writing fails
    /// halfway the file is left as-is.
    pub fn backup_passwords(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        backup::write_records(
            &mut writer,
            self.passwords
                .iter()
                .map(|(user, digest)| (user.as_str(), digest.as_str())),
        )
    }

    /// Merge the entries in `path` into the store.
    ///
    /// Later lines override earlier ones and existing users.  Loading stops
    /// at the first malformed line; entries before it are kept.  Returns the
    /// number of lines loaded.
    pub fn load_passwords(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let file = File::open(path.as_ref())?;
        let passwords = &mut self.passwords;

        backup::read_records(BufReader::new(file), |user, digest| {
            passwords.insert(user.to_string(), digest.to_string());
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    /// `true` if no users are stored.
    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }

    /// `true` if `username` has a stored digest.
    pub fn contains_user(&self, username: &str) -> bool {
        self.passwords.contains_key(username)
    }

    /// Usernames in iteration order.
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.passwords.keys().map(String::as_str)
    }

    /// The algorithm new digests are computed with.
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hasher.algorithm()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("users", &self.passwords.len())
            .field("hash_algorithm", &self.hasher.algorithm())
            .finish_non_exhaustive()
    }
}
