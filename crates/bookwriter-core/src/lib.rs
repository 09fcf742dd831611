//! bookwriter-core: Core domain types for the bookwriter API
//!
//! This crate provides:
//! - Typed UUID identifiers for every persisted record
//! - The closed `Role` enum used by the authorization policy
//! - Field validation for registration and resource payloads
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

pub mod types;
pub mod validate;

pub use types::{
    BookId, CollaborationId, Role, RoleParseError, SectionId, SubsectionId, UserId,
};
pub use validate::{validate_email, validate_title, validate_username, ValidationError};
