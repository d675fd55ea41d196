//! Error types for storage and use-case operations.

use thiserror::Error;

/// Failures of the underlying key-value slot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend refused the operation (storage unavailable, quota exceeded).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// I/O error in the file-backed store.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The database could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Recipe form field that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    Title,
    Ingredients,
    Instructions,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::Title => "title",
            Field::Ingredients => "ingredients",
            Field::Instructions => "instructions",
        };
        f.write_str(name)
    }
}

/// Recoverable errors surfaced to the originating form.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("this e-mail is already in use")]
    DuplicateEmail,

    #[error("this username is already in use")]
    DuplicateUsername,

    #[error("invalid e-mail or password")]
    InvalidCredentials,

    #[error("missing or empty field: {0}")]
    ValidationFailed(Field),

    /// Only PNG and JPEG are accepted.
    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),

    #[error("image is too large: {size} bytes (limit {limit})")]
    ImageTooLarge { size: usize, limit: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for use-case results.
pub type Result<T> = std::result::Result<T, AppError>;
