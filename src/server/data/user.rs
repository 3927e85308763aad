//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, replacement, partial updates, queries and deletion with
//! conversion from entity models to domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, PatchUserParam, UpdateUserParam, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user and returns it with its generated ID.
    ///
    /// # Arguments
    /// - `param` - Field values for the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            age: ActiveValue::Set(param.age),
            student_id: ActiveValue::Set(param.student_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether a user with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all users with pagination.
    ///
    /// Users are ordered by ascending ID so pages are stable across requests.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Vector of users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Overwrites every column of an existing user.
    ///
    /// # Arguments
    /// - `id` - ID of the user to replace
    /// - `param` - New values for every user field
    ///
    /// # Returns
    /// - `Ok(User)` - The replaced user
    /// - `Err(DbErr::RecordNotUpdated)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn replace(&self, id: i32, param: UpdateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            age: ActiveValue::Set(param.age),
            student_id: ActiveValue::Set(param.student_id),
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Writes only the fields present in the patch.
    ///
    /// A patch without any fields returns the stored user without issuing an update.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, param: PatchUserParam) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.clone().into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(age) = param.age {
            active_model.age = ActiveValue::Set(age);
        }
        if let Some(student_id) = param.student_id {
            active_model.student_id = ActiveValue::Set(student_id);
        }

        if !active_model.is_changed() {
            return Ok(User::from_entity(user));
        }

        let updated = active_model.update(self.db).await?;

        Ok(User::from_entity(updated))
    }

    /// Deletes the user with the provided ID.
    ///
    /// Projects owned by the user are removed by the `ON DELETE CASCADE` foreign key.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was deleted
    /// - `Ok(false)` - No user with that ID existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
