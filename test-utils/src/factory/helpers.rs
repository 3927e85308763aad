//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// Each factory-created entity draws from this counter so default names,
/// emails and student IDs never collide within a test run.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a project owned by that user.
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific fields.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, project))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_project_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::project::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let project = crate::factory::project::create_project(db, user.id).await?;

    Ok((user, project))
}
