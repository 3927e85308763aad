//! Project factory for creating test project entities.
//!
//! Projects always reference an owning user, so the owner's ID must be
//! supplied when constructing the factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::project::ProjectFactory;
///
/// let project = ProjectFactory::new(&db, user.id)
///     .name("Proj1")
///     .description(None)
///     .build()
///     .await?;
/// ```
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    owner_id: i32,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Project {id}"` where id is auto-incremented
    /// - description: `Some("Test project description")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the user owning the project
    ///
    /// # Returns
    /// - `ProjectFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Project {}", id),
            description: Some("Test project description".to_string()),
            owner_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the project entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::project::Model)` - Created project entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values owned by the provided user.
///
/// Shorthand for `ProjectFactory::new(db, owner_id).build().await`.
pub async fn create_project(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db, owner_id).build().await
}
