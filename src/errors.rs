use thiserror::Error;

/// All errors that can occur in credstore.
#[derive(Debug, Error)]
pub enum CredStoreError {
    // --- Store errors ---
    #[error("Malformed backup line {line}: expected `username:digest`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("Password verification failed for '{0}'")]
    VerificationFailed(String),

    // --- Crypto errors ---
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Audit errors ---
    #[error("Audit error: {0}")]
    AuditError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for credstore results.
pub type Result<T> = std::result::Result<T, CredStoreError>;
