//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx queries.
//! They are separate from the wire types in the server crate so the HTTP
//! contract can evolve without touching the schema.

use bookwriter_core::Role;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `users` table.
///
/// Carries the password hash; the server layer must never serialize this
/// type directly.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created: DateTime<Utc>,
}

/// Database row for the `user_profiles` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserProfileRow {
    pub user_id: Uuid,
    /// Role as stored text ("author" or "collaborator").
    pub role: String,
    pub created: DateTime<Utc>,
}

/// Database row for the `books` table.
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub created: DateTime<Utc>,
}

/// Database row for the `sections` table.
#[derive(Debug, Clone, FromRow)]
pub struct SectionRow {
    pub id: Uuid,
    pub title: String,
    pub book_id: Uuid,
    pub parent_section_id: Option<Uuid>,
    pub created: DateTime<Utc>,
}

/// Database row for the `subsections` table.
#[derive(Debug, Clone, FromRow)]
pub struct SubsectionRow {
    pub id: Uuid,
    pub title: String,
    pub section_id: Uuid,
    pub created: DateTime<Utc>,
}

/// Database row for the `collaborations` table.
#[derive(Debug, Clone, FromRow)]
pub struct CollaborationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub role: String,
    pub can_edit: bool,
    pub created: DateTime<Utc>,
}

/// Input for creating a new user together with its profile.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewUser {
    pub fn new(username: String, email: String, password_hash: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            role,
        }
    }
}

/// Input for creating a new book.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
}

impl NewBook {
    pub fn new(title: String, author_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author_id,
        }
    }
}

/// Input for creating a new section.
#[derive(Debug, Clone)]
pub struct NewSection {
    pub id: Uuid,
    pub title: String,
    pub book_id: Uuid,
    pub parent_section_id: Option<Uuid>,
}

impl NewSection {
    pub fn new(title: String, book_id: Uuid, parent_section_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            book_id,
            parent_section_id,
        }
    }
}

/// Input for creating a new subsection.
#[derive(Debug, Clone)]
pub struct NewSubsection {
    pub id: Uuid,
    pub title: String,
    pub section_id: Uuid,
}

impl NewSubsection {
    pub fn new(title: String, section_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            section_id,
        }
    }
}

/// Input for creating a new collaboration.
#[derive(Debug, Clone)]
pub struct NewCollaboration {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub role: String,
    pub can_edit: bool,
}

impl NewCollaboration {
    pub fn new(user_id: Uuid, book_id: Uuid, role: String, can_edit: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            book_id,
            role,
            can_edit,
        }
    }
}

/// Partial update for a book. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct BookChanges {
    pub title: Option<String>,
}

/// Partial update for a section. `None` keeps the stored value;
/// `parent_section_id: Some(None)` clears the parent.
#[derive(Debug, Clone, Default)]
pub struct SectionChanges {
    pub title: Option<String>,
    pub book_id: Option<Uuid>,
    pub parent_section_id: Option<Option<Uuid>>,
}

/// Partial update for a subsection. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct SubsectionChanges {
    pub title: Option<String>,
    pub section_id: Option<Uuid>,
}

/// Partial update for a collaboration. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct CollaborationChanges {
    pub role: Option<String>,
    pub can_edit: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_generates_distinct_ids() {
        let a = NewUser::new(
            "bob".into(),
            "b@x.com".into(),
            "hash".into(),
            Role::Author,
        );
        let b = NewUser::new(
            "alice".into(),
            "a@x.com".into(),
            "hash".into(),
            Role::Collaborator,
        );
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_section_carries_optional_parent() {
        let book = Uuid::new_v4();
        let parent = Uuid::new_v4();
        let root = NewSection::new("Intro".into(), book, None);
        let child = NewSection::new("Details".into(), book, Some(parent));
        assert!(root.parent_section_id.is_none());
        assert_eq!(child.parent_section_id, Some(parent));
    }

    #[test]
    fn changes_default_to_no_op() {
        let changes = SectionChanges::default();
        assert!(changes.title.is_none());
        assert!(changes.book_id.is_none());
        assert!(changes.parent_section_id.is_none());
    }
}
