//! Centralized custody engine error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustodyError {
    /// Registration attempted for an identifier that already holds a credential.
    #[error("Custodian '{0}' is already registered")]
    AlreadyRegistered(String),
    /// Custodian identifier is not present in the registry.
    #[error("Custodian '{0}' is not registered")]
    NotFound(String),
    /// Presented credential does not match the stored one.
    #[error("Invalid credential for custodian '{0}'")]
    InvalidCredential(String),
    /// Caller-supplied hash differs from the server computation.
    #[error("Share hash mismatch: computed {expected}, supplied {supplied}")]
    HashMismatch { expected: String, supplied: String },
    /// Input validation error (wrong submission shape, malformed script line).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl CustodyError {
    /// True for the errors caused by caller input. These are never retried and
    /// leave registry and ledger untouched.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CustodyError::AlreadyRegistered(_)
                | CustodyError::NotFound(_)
                | CustodyError::InvalidCredential(_)
                | CustodyError::HashMismatch { .. }
                | CustodyError::InvalidInput(_)
        )
    }

    /// Stable snake_case name used in API error bodies and audit messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CustodyError::AlreadyRegistered(_) => "already_registered",
            CustodyError::NotFound(_) => "not_found",
            CustodyError::InvalidCredential(_) => "invalid_credential",
            CustodyError::HashMismatch { .. } => "hash_mismatch",
            CustodyError::InvalidInput(_) => "invalid_input",
            CustodyError::Config(_) => "config",
            CustodyError::Io(_) => "io",
            CustodyError::Serde(_) => "serialization",
        }
    }
}
