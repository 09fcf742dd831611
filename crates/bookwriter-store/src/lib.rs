//! bookwriter-store: PostgreSQL storage layer for the bookwriter API
//!
//! This crate provides:
//! - Relational storage for users, profiles, books, sections, subsections,
//!   and collaborations
//! - Migration management with an embedded, idempotent schema
//! - Type-safe database operations via sqlx
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookwriter_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! // Insert a book
//! let row = store.insert_book(&NewBook::new("Title".into(), author_id)).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::*;
pub use store::{Store, StoreConfig};

// Re-export bookwriter-core for downstream crates
pub use bookwriter_core;
