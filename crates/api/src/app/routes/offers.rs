use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use hireboard_offers::{CreateOfferDto, DeleteOfferDto, GetOfferDto};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_offer))
        .route("/:id", get(get_offer).delete(delete_offer))
}

pub async fn create_offer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CreateOfferDto>, JsonRejection>,
) -> Response {
    let Json(dto) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::rejected_body(rejection),
    };
    services.create_offer.dispatch(dto).await.into_response()
}

pub async fn get_offer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    services
        .get_offer
        .dispatch(GetOfferDto { offer_id: id })
        .await
        .into_response()
}

pub async fn delete_offer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    services
        .delete_offer
        .dispatch(DeleteOfferDto { offer_id: id })
        .await
        .into_response()
}
