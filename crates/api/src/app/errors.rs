use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Reply for a request body that could not be read as the command DTO.
pub fn rejected_body(rejection: JsonRejection) -> Response {
    tracing::debug!(%rejection, "request body rejected");
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}
