use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::{hasher_for, Argon2Params, GeneratorKind, HashAlgorithm, PasswordGenerator};
use crate::crypto::{PasswordHasher, DEFAULT_LENGTH};
use crate::errors::{CredStoreError, Result};
use crate::store::CredentialStore;

/// Project-level configuration, loaded from `.credstore.toml`.
///
/// Every field has a default, so credstore works without any config
/// file at all.  The defaults reproduce the legacy behaviour (MD5
/// digests, fast generator); switch `hash_algorithm` to `argon2` and
/// `generator` to `secure` for anything real.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Backing file (relative to the project dir) the CLI reads and writes.
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Length used by `generate` when `--length` is not given.
    #[serde(default = "default_password_length")]
    pub password_length: usize,

    /// Digest algorithm for new passwords: "md5" or "argon2".
    #[serde(default)]
    pub hash_algorithm: HashAlgorithm,

    /// Random source for generated passwords: "fast" or "secure".
    #[serde(default)]
    pub generator: GeneratorKind,

    /// Argon2 memory cost in KiB (default: 19 MiB).
    #[serde(default = "default_argon2_memory_kib")]
    pub argon2_memory_kib: u32,

    /// Argon2 iteration count (default: 2).
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,

    /// Argon2 parallelism degree (default: 1).
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_store_file() -> String {
    "passwords.txt".to_string()
}

fn default_password_length() -> usize {
    DEFAULT_LENGTH
}

fn default_argon2_memory_kib() -> u32 {
    19_456 // 19 MiB
}

fn default_argon2_iterations() -> u32 {
    2
}

fn default_argon2_parallelism() -> u32 {
    1
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            password_length: default_password_length(),
            hash_algorithm: HashAlgorithm::default(),
            generator: GeneratorKind::default(),
            argon2_memory_kib: default_argon2_memory_kib(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".credstore.toml";

    /// Load settings from `<project_dir>/.credstore.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            CredStoreError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Full path of the backing store file.
    ///
    /// Example: `project_dir/passwords.txt`
    pub fn store_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.store_file)
    }

    /// Convert the Argon2 settings into crypto-layer params.
    pub fn argon2_params(&self) -> Argon2Params {
        Argon2Params {
            memory_kib: self.argon2_memory_kib,
            iterations: self.argon2_iterations,
            parallelism: self.argon2_parallelism,
        }
    }

    /// The configured hasher.
    pub fn hasher(&self) -> Result<Box<dyn PasswordHasher>> {
        hasher_for(self.hash_algorithm, &self.argon2_params())
    }

    /// The configured password generator.
    pub fn generator(&self) -> PasswordGenerator {
        PasswordGenerator::for_kind(self.generator)
    }

    /// An empty store wired with the configured capabilities.
    pub fn build_store(&self) -> Result<CredentialStore> {
        Ok(CredentialStore::with_capabilities(
            self.hasher()?,
            self.generator(),
        ))
    }
}

// ── Tests ────────────────────────────────────────────────────────────
