use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        project::{
            CreateProjectDto, PaginatedProjectsDto, PatchProjectDto, ProjectDto, UpdateProjectDto,
        },
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::project::{
            CreateProjectParam, GetAllProjectsParam, PatchProjectParam, UpdateProjectParam,
        },
        service::project::ProjectService,
        state::AppState,
    },
};

pub static PROJECT_TAG: &str = "project";

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Successfully created project", body = ProjectDto),
        (status = 400, description = "Invalid project data or unknown owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let project = ProjectService::new(&state.db)
        .create(CreateProjectParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(project.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved projects", body = PaginatedProjectsDto),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = ProjectService::new(&state.db)
        .get_all(GetAllProjectsParam {
            page: pagination.page,
            per_page: pagination.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved project", body = ProjectDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let project = ProjectService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Successfully replaced project", body = ProjectDto),
        (status = 400, description = "Invalid project data or unknown owner", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let project = ProjectService::new(&state.db)
        .replace(id, UpdateProjectParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = PatchProjectDto,
    responses(
        (status = 200, description = "Successfully updated project", body = ProjectDto),
        (status = 400, description = "Invalid project data or unknown owner", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PatchProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let project = ProjectService::new(&state.db)
        .update(id, PatchProjectParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted project"),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ProjectService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
