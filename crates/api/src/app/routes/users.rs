use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use hireboard_users::{CreateUserDto, GetUserDto};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user))
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CreateUserDto>, JsonRejection>,
) -> Response {
    let Json(dto) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::rejected_body(rejection),
    };
    services.create_user.dispatch(dto).await.into_response()
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    services
        .get_user
        .dispatch(GetUserDto { user_id: id })
        .await
        .into_response()
}
