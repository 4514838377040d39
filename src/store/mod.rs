//! Store module: username to digest mapping and its backup file.
//!
//! This module provides:
//! - The line-oriented `username:digest` file codec (`backup`)
//! - The in-memory `CredentialStore` (`credentials`)

pub mod backup;
pub mod credentials;

// Re-export the most commonly used items.
pub use credentials::{CredentialStore, PasswordMap};
