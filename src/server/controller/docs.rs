use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        project::{
            CreateProjectDto, PaginatedProjectsDto, PatchProjectDto, ProjectDto, UpdateProjectDto,
        },
        user::{CreateUserDto, PaginatedUsersDto, PatchUserDto, UpdateUserDto, UserDto},
    },
    server::controller::{project, user},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Roster API", description = "User and project management"),
    paths(
        user::create_user,
        user::get_users,
        user::get_user,
        user::replace_user,
        user::update_user,
        user::delete_user,
        user::get_user_projects,
        project::create_project,
        project::get_projects,
        project::get_project,
        project::replace_project,
        project::update_project,
        project::delete_project,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        PatchUserDto,
        PaginatedUsersDto,
        ProjectDto,
        CreateProjectDto,
        UpdateProjectDto,
        PatchProjectDto,
        PaginatedProjectsDto,
    )),
    tags(
        (name = "user", description = "User management"),
        (name = "project", description = "Project management"),
    )
)]
pub struct ApiDoc;

/// GET /api/openapi.json - Serves the generated OpenAPI document
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
