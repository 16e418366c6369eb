use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, post};
use axum::{Json, Router};

use hireboard_users::{CreateRoleDto, DeleteRoleDto};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_role))
        .route("/:id", delete(delete_role))
}

pub async fn create_role(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CreateRoleDto>, JsonRejection>,
) -> Response {
    let Json(dto) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::rejected_body(rejection),
    };
    services.create_role.dispatch(dto).await.into_response()
}

pub async fn delete_role(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    services
        .delete_role
        .dispatch(DeleteRoleDto { role_id: id })
        .await
        .into_response()
}
