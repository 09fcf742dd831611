//! Error types for the storage layer.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection error.
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// User profile not found.
    #[error("user profile not found for user: {0}")]
    ProfileNotFound(Uuid),

    /// Book not found.
    #[error("book not found: {0}")]
    BookNotFound(Uuid),

    /// Section not found.
    #[error("section not found: {0}")]
    SectionNotFound(Uuid),

    /// Subsection not found.
    #[error("subsection not found: {0}")]
    SubsectionNotFound(Uuid),

    /// Collaboration not found.
    #[error("collaboration not found: {0}")]
    CollaborationNotFound(Uuid),

    /// Username already taken.
    #[error("username already exists: {0}")]
    DuplicateUsername(String),

    /// A parent section must belong to the same book as its child.
    #[error("parent section {section} does not belong to book {book}")]
    ParentSectionMismatch { section: Uuid, book: Uuid },

    /// Stored role string does not parse into the Role enum.
    #[error("invalid role stored in profile: {0:?}")]
    InvalidRole(String),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
