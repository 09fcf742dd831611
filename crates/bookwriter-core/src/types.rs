//! Core data types for the bookwriter API.
//!
//! This module defines the typed identifiers used throughout the system and
//! the closed `Role` enum the authorization policy is evaluated against.
//! Wrapping UUIDs in per-record newtypes keeps a `SectionId` from being
//! passed where a `BookId` is expected; on the wire they serialize as plain
//! UUID strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random identifier using UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id! {
    /// Unique identifier for a user (the token subject).
    UserId
}

define_id! {
    /// Unique identifier for a book.
    BookId
}

define_id! {
    /// Unique identifier for a section within a book.
    SectionId
}

define_id! {
    /// Unique identifier for a subsection within a section.
    SubsectionId
}

define_id! {
    /// Unique identifier for a collaboration record.
    ///
    /// Note: the grant/revoke wire contract calls this value
    /// `collaborator_id` for compatibility, but it always denotes a
    /// collaboration record, never a user.
    CollaborationId
}

// ============================================================================
// Role
// ============================================================================

/// The access role stored on a user's profile.
///
/// The permission checks are evaluated against this closed enum rather than
/// ad-hoc string comparisons. Parsing accepts any capitalization
/// ("Author", "author", "COLLABORATOR", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May create sections and manage collaboration access on books.
    Author,
    /// May read and edit shared content but not manage access grants.
    Collaborator,
}

impl Role {
    /// The canonical lowercase form, as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Collaborator => "collaborator",
        }
    }

    /// Whether this role carries author capabilities.
    #[must_use]
    pub const fn is_author(self) -> bool {
        matches!(self, Self::Author)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("author") {
            Ok(Self::Author)
        } else if s.eq_ignore_ascii_case("collaborator") {
            Ok(Self::Collaborator)
        } else {
            Err(RoleParseError(s.to_string()))
        }
    }
}

/// Error type for parsing a Role from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleParseError(pub String);

impl fmt::Display for RoleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid role {:?}: expected \"author\" or \"collaborator\"",
            self.0
        )
    }
}

impl std::error::Error for RoleParseError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_id_roundtrip() {
        let id = BookId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: BookId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn book_id_serializes_as_bare_uuid() {
        let id = BookId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.0));
    }

    #[test]
    fn section_id_display_fromstr() {
        let id = SectionId::new();
        let s = id.to_string();
        let parsed: SectionId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn user_id_rejects_garbage() {
        let result: Result<UserId, _> = "not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("author".parse::<Role>().unwrap(), Role::Author);
        assert_eq!("Author".parse::<Role>().unwrap(), Role::Author);
        assert_eq!("AUTHOR".parse::<Role>().unwrap(), Role::Author);
        assert_eq!("collaborator".parse::<Role>().unwrap(), Role::Collaborator);
        assert_eq!("Collaborator".parse::<Role>().unwrap(), Role::Collaborator);
    }

    #[test]
    fn role_rejects_unknown_strings() {
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        assert!("-".parse::<Role>().is_err());
    }

    #[test]
    fn role_json_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Author).unwrap(), "\"author\"");
        assert_eq!(
            serde_json::to_string(&Role::Collaborator).unwrap(),
            "\"collaborator\""
        );
        let parsed: Role = serde_json::from_str("\"collaborator\"").unwrap();
        assert_eq!(parsed, Role::Collaborator);
    }

    #[test]
    fn role_capabilities() {
        assert!(Role::Author.is_author());
        assert!(!Role::Collaborator.is_author());
    }

    #[test]
    fn role_as_str_matches_storage_form() {
        assert_eq!(Role::Author.as_str(), "author");
        assert_eq!(Role::Collaborator.as_str(), "collaborator");
    }
}
