//! Project data repository for database operations
//!
//! Provides the `ProjectRepository` for managing projects in the database.
//! Provides methods to create, get, replace, update, and delete projects as well as handles
//! the conversion of database entity models into domain models for usage within services
//! & controllers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::project::{
    CreateProjectParam, PatchProjectParam, Project, UpdateProjectParam,
};

/// Repository providing database operations for project management.
pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    /// Creates a new ProjectRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProjectRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new project
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the project creation data
    ///
    /// # Returns
    /// - `Ok(Project)` - The created project as a domain model
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateProjectParam) -> Result<Project, DbErr> {
        let entity = entity::project::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            owner_id: ActiveValue::Set(param.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Project::from_entity(entity))
    }

    /// Finds a project by ID
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - The requested project if found
    /// - `Ok(None)` - The requested project does not exist
    /// - `Err(DbErr)` - Database error during get operation
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let entity = entity::prelude::Project::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Project::from_entity))
    }

    /// Gets all projects with pagination, ordered by ascending ID
    ///
    /// # Returns
    /// - `Ok((projects, total))` - Projects for the requested page and total project count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Project>, u64), DbErr> {
        let paginator = entity::prelude::Project::find()
            .order_by_asc(entity::project::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let projects = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Project::from_entity)
            .collect();

        Ok((projects, total))
    }

    /// Gets every project owned by the provided user, ordered by ascending ID
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Project>, DbErr> {
        let entities = entity::prelude::Project::find()
            .filter(entity::project::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Project::from_entity).collect())
    }

    /// Overwrites every column of an existing project
    ///
    /// # Returns
    /// - `Ok(Project)` - The replaced project
    /// - `Err(DbErr::RecordNotUpdated)` - No project with that ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn replace(&self, id: i32, param: UpdateProjectParam) -> Result<Project, DbErr> {
        let entity = entity::project::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            owner_id: ActiveValue::Set(param.owner_id),
        }
        .update(self.db)
        .await?;

        Ok(Project::from_entity(entity))
    }

    /// Updates the project fields present in the patch
    ///
    /// # Returns
    /// - `Ok(Project)` - The updated project
    /// - `Err(DbErr::RecordNotFound)` - No project with that ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(&self, id: i32, param: PatchProjectParam) -> Result<Project, DbErr> {
        let project = entity::prelude::Project::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Project {} not found", id)))?;

        let mut active_model: entity::project::ActiveModel = project.clone().into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(owner_id) = param.owner_id {
            active_model.owner_id = ActiveValue::Set(owner_id);
        }

        if !active_model.is_changed() {
            return Ok(Project::from_entity(project));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Project::from_entity(updated))
    }

    /// Deletes project of the provided ID
    ///
    /// # Returns
    /// - `Ok(true)` - The project was deleted
    /// - `Ok(false)` - No project with that ID existed
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Project::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
