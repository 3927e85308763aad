use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::{
        docs::openapi,
        project::{
            create_project, delete_project, get_project, get_projects, replace_project,
            update_project,
        },
        user::{
            create_user, delete_user, get_user, get_user_projects, get_users, replace_user,
            update_user,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(get_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user)
                .put(replace_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .route("/api/users/{id}/projects", get(get_user_projects))
        .route("/api/projects", get(get_projects).post(create_project))
        .route(
            "/api/projects/{id}",
            get(get_project)
                .put(replace_project)
                .patch(update_project)
                .delete(delete_project),
        )
        .route("/api/openapi.json", get(openapi))
}

/// Builds the complete application with state and middleware layers applied.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
