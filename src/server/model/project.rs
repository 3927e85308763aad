//! Domain & parameter models for project operations
//!
//! Defines the project domain model, the project parameter models, and provides
//! methods to convert the project domain model from entity and into Dtos

use crate::{
    model::project::{
        CreateProjectDto, PaginatedProjectsDto, PatchProjectDto, ProjectDto, UpdateProjectDto,
    },
    server::{error::AppError, util::validate::require_not_blank},
};

/// The project domain model
///
/// A named project with an optional description, owned by a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

impl Project {
    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            name: self.name,
            description: self.description,
            owner_id: self.owner_id,
        }
    }

    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            owner_id: entity.owner_id,
        }
    }
}

/// Parameters for creating a new project
#[derive(Debug, Clone)]
pub struct CreateProjectParam {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

impl CreateProjectParam {
    pub fn validate(&self) -> Result<(), AppError> {
        require_not_blank("name", &self.name)
    }
}

impl From<CreateProjectDto> for CreateProjectParam {
    fn from(dto: CreateProjectDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            owner_id: dto.owner_id,
        }
    }
}

/// Parameters for replacing every field of an existing project
#[derive(Debug, Clone)]
pub struct UpdateProjectParam {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

impl UpdateProjectParam {
    pub fn validate(&self) -> Result<(), AppError> {
        require_not_blank("name", &self.name)
    }
}

impl From<UpdateProjectDto> for UpdateProjectParam {
    fn from(dto: UpdateProjectDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            owner_id: dto.owner_id,
        }
    }
}

/// Parameters for partially updating a project
///
/// `description` is `Some(None)` when the client explicitly cleared it.
#[derive(Debug, Clone, Default)]
pub struct PatchProjectParam {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub owner_id: Option<i32>,
}

impl PatchProjectParam {
    pub fn validate(&self) -> Result<(), AppError> {
        match &self.name {
            Some(name) => require_not_blank("name", name),
            None => Ok(()),
        }
    }
}

impl From<PatchProjectDto> for PatchProjectParam {
    fn from(dto: PatchProjectDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            owner_id: dto.owner_id,
        }
    }
}

/// Parameters for paginated project queries
#[derive(Debug, Clone)]
pub struct GetAllProjectsParam {
    pub page: u64,
    pub per_page: u64,
}

/// Paginated collection of projects with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProjects {
    pub projects: Vec<Project>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProjects {
    pub fn into_dto(self) -> PaginatedProjectsDto {
        PaginatedProjectsDto {
            projects: self.projects.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
