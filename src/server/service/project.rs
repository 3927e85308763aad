//! Project service for business logic.
//!
//! Validates project input, enforces that the owning user exists and maps missing
//! projects into `NotFound` errors.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{project::ProjectRepository, user::UserRepository},
    error::AppError,
    model::project::{
        CreateProjectParam, GetAllProjectsParam, PaginatedProjects, PatchProjectParam, Project,
        UpdateProjectParam,
    },
    util::validate::require_page_window,
};

/// Service providing business logic for project management.
pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a project owned by an existing user.
    ///
    /// # Returns
    /// - `Ok(Project)` - The created project
    /// - `Err(AppError::BadRequest)` - Invalid name or owner does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateProjectParam) -> Result<Project, AppError> {
        param.validate()?;
        self.require_owner(param.owner_id).await?;

        let project = ProjectRepository::new(self.db).create(param).await?;

        tracing::debug!("Created project {} for user {}", project.id, project.owner_id);

        Ok(project)
    }

    /// Retrieves a project by ID.
    ///
    /// # Returns
    /// - `Ok(Project)` - The requested project
    /// - `Err(AppError::NotFound)` - No project with that ID
    pub async fn get(&self, id: i32) -> Result<Project, AppError> {
        ProjectRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| project_not_found(id))
    }

    /// Retrieves all projects with pagination.
    ///
    /// # Returns
    /// - `Ok(PaginatedProjects)` - Projects for the requested page with pagination metadata
    /// - `Err(AppError::BadRequest)` - `per_page` outside `1..=100` or page offset overflows
    pub async fn get_all(
        &self,
        param: GetAllProjectsParam,
    ) -> Result<PaginatedProjects, AppError> {
        require_page_window(param.page, param.per_page)?;

        let (projects, total) = ProjectRepository::new(self.db)
            .get_all_paginated(param.page, param.per_page)
            .await?;

        Ok(PaginatedProjects {
            projects,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total.div_ceil(param.per_page),
        })
    }

    /// Retrieves the projects owned by a user.
    ///
    /// # Returns
    /// - `Ok(Vec<Project>)` - Projects owned by the user, possibly empty
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Project>, AppError> {
        if !UserRepository::new(self.db).exists(owner_id).await? {
            return Err(AppError::NotFound(format!("User {} not found", owner_id)));
        }

        let projects = ProjectRepository::new(self.db)
            .get_by_owner(owner_id)
            .await?;

        Ok(projects)
    }

    /// Replaces every field of an existing project.
    ///
    /// # Returns
    /// - `Ok(Project)` - The replaced project
    /// - `Err(AppError::BadRequest)` - Invalid name or owner does not exist
    /// - `Err(AppError::NotFound)` - No project with that ID
    pub async fn replace(&self, id: i32, param: UpdateProjectParam) -> Result<Project, AppError> {
        param.validate()?;

        let project_repo = ProjectRepository::new(self.db);

        if project_repo.find_by_id(id).await?.is_none() {
            return Err(project_not_found(id));
        }

        self.require_owner(param.owner_id).await?;

        let project = project_repo
            .replace(id, param)
            .await
            .map_err(|err| missing_project_as_not_found(id, err))?;

        Ok(project)
    }

    /// Applies a partial update to an existing project.
    ///
    /// The owner is only checked when the patch moves the project to another user.
    ///
    /// # Returns
    /// - `Ok(Project)` - The updated project
    /// - `Err(AppError::BadRequest)` - Invalid name or new owner does not exist
    /// - `Err(AppError::NotFound)` - No project with that ID
    pub async fn update(&self, id: i32, param: PatchProjectParam) -> Result<Project, AppError> {
        param.validate()?;

        let project_repo = ProjectRepository::new(self.db);

        if project_repo.find_by_id(id).await?.is_none() {
            return Err(project_not_found(id));
        }

        if let Some(owner_id) = param.owner_id {
            self.require_owner(owner_id).await?;
        }

        let project = project_repo
            .update(id, param)
            .await
            .map_err(|err| missing_project_as_not_found(id, err))?;

        Ok(project)
    }

    /// Deletes a project.
    ///
    /// # Returns
    /// - `Ok(())` - Project deleted
    /// - `Err(AppError::NotFound)` - No project with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ProjectRepository::new(self.db).delete(id).await? {
            return Err(project_not_found(id));
        }

        Ok(())
    }

    async fn require_owner(&self, owner_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).exists(owner_id).await? {
            return Err(AppError::BadRequest(format!(
                "Owner user {} does not exist",
                owner_id
            )));
        }

        Ok(())
    }
}

fn project_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Project {} not found", id))
}

/// Maps the errors SeaORM raises when the project vanished after the existence check.
fn missing_project_as_not_found(id: i32, err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => project_not_found(id),
        err => err.into(),
    }
}
