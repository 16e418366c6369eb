//! Transport-neutral response categories and their HTTP rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value as JsonValue, json};

pub const UNEXPECTED_CODE: &str = "unexpected_error";
pub const UNEXPECTED_MESSAGE: &str = "an unexpected error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCategory {
    Success,
    ClientError,
    NotFound,
    GenericFailure,
}

impl ResponseCategory {
    pub fn status(self) -> StatusCode {
        match self {
            ResponseCategory::Success => StatusCode::OK,
            ResponseCategory::ClientError => StatusCode::BAD_REQUEST,
            ResponseCategory::NotFound => StatusCode::NOT_FOUND,
            ResponseCategory::GenericFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The single reply emitted for one command.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    category: ResponseCategory,
    body: Option<JsonValue>,
}

impl ApiResponse {
    pub fn success(payload: Option<JsonValue>) -> Self {
        Self {
            category: ResponseCategory::Success,
            body: payload,
        }
    }

    /// Failure body `{ "error", "message" }`, plus `"details"` when given.
    pub fn failure(
        category: ResponseCategory,
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<JsonValue>,
    ) -> Self {
        let mut body = json!({
            "error": code.into(),
            "message": message.into(),
        });
        if let (Some(details), Some(map)) = (details, body.as_object_mut()) {
            map.insert("details".to_string(), details);
        }
        Self {
            category,
            body: Some(body),
        }
    }

    /// Opaque generic failure; never carries internal detail.
    pub fn unexpected() -> Self {
        Self::failure(
            ResponseCategory::GenericFailure,
            UNEXPECTED_CODE,
            UNEXPECTED_MESSAGE,
            None,
        )
    }

    pub fn category(&self) -> ResponseCategory {
        self.category
    }

    pub fn body(&self) -> Option<&JsonValue> {
        self.body.as_ref()
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = self.category.status();
        match self.body {
            Some(body) => (status, axum::Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}
