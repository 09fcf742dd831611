//! Schema definitions and migration utilities.
//!
//! This module provides the embedded SQL schema definition and utilities
//! for managing database migrations.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the core schema (001_schema.sql).
pub const SCHEMA_MIGRATION: &str = include_str!("../../../migrations/001_schema.sql");

/// Run all pending migrations against the database.
///
/// This function is idempotent - it can be run multiple times safely.
/// Migrations check for existing objects before creating them.
///
/// # Errors
///
/// Returns an error if the migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running schema migration (001_schema.sql)...");
    sqlx::raw_sql(SCHEMA_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Schema migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `users` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'users'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_migration_embedded() {
        // Verify the migration SQL is properly embedded
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS user_profiles"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS books"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS sections"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS subsections"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS collaborations"));
    }

    #[test]
    fn test_schema_migration_role_constraint() {
        assert!(SCHEMA_MIGRATION.contains("CHECK (role IN ('author', 'collaborator'))"));
    }

    #[test]
    fn test_schema_migration_cascades() {
        // Books own sections; sections own subsections and child sections;
        // collaborations cascade from either side.
        assert!(SCHEMA_MIGRATION.contains("REFERENCES books(id) ON DELETE CASCADE"));
        assert!(SCHEMA_MIGRATION.contains("REFERENCES sections(id) ON DELETE CASCADE"));
        assert!(SCHEMA_MIGRATION.contains("REFERENCES users(id) ON DELETE CASCADE"));
    }
}
