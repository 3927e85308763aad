use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_double_option;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateProjectDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner_id: i32,
}

/// Full replacement of a project. An omitted description clears it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateProjectDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner_id: i32,
}

/// Partial update of a project.
///
/// `description` is tri-state: absent leaves it untouched, `null` clears it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct PatchProjectDto {
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub owner_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedProjectsDto {
    pub projects: Vec<ProjectDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
