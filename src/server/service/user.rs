//! User service for business logic.
//!
//! This module provides the `UserService` for managing user-related business logic.
//! It validates input, verifies that target users exist and maps repository results
//! into domain models and application errors.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{
        CreateUserParam, GetAllUsersParam, PaginatedUsers, PatchUserParam, UpdateUserParam, User,
    },
    util::validate::require_page_window,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user after validating its fields.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its generated ID
    /// - `Err(AppError::BadRequest)` - A field failed validation
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        param.validate()?;

        let user = UserRepository::new(self.db).create(param).await?;

        tracing::debug!("Created user {}", user.id);

        Ok(user)
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The requested user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Retrieves all users with pagination.
    ///
    /// Calculates total pages based on the per_page parameter and total user count.
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::BadRequest)` - `per_page` outside `1..=100` or page offset overflows
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        require_page_window(param.page, param.per_page)?;

        let (users, total_items) = UserRepository::new(self.db)
            .get_all_paginated(param.page, param.per_page)
            .await?;

        let total_pages = total_items.div_ceil(param.per_page);

        Ok(PaginatedUsers {
            users,
            total: total_items,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Replaces every field of an existing user.
    ///
    /// # Returns
    /// - `Ok(User)` - The replaced user
    /// - `Err(AppError::BadRequest)` - A field failed validation
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn replace(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        param.validate()?;

        UserRepository::new(self.db)
            .replace(id, param)
            .await
            .map_err(|err| missing_user_as_not_found(id, err))
    }

    /// Applies a partial update to an existing user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - A present field failed validation
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, param: PatchUserParam) -> Result<User, AppError> {
        param.validate()?;

        UserRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(|err| missing_user_as_not_found(id, err))
    }

    /// Deletes a user along with the projects it owns.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(user_not_found(id));
        }

        tracing::debug!("Deleted user {}", id);

        Ok(())
    }
}

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}

/// Maps the errors SeaORM raises when the target row is gone to `NotFound`.
fn missing_user_as_not_found(id: i32, err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => user_not_found(id),
        err => err.into(),
    }
}
