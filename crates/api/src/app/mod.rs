//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: repositories, use cases and command handlers
//! - `handler.rs`: commands with a reply sink and the generic command handler
//! - `translate.rs`: per-use-case failure to response category
//! - `response.rs`: response categories and their HTTP rendering
//! - `routes/`: HTTP routes (one file per feature)
//! - `dto.rs`: success payloads
//! - `errors.rs`: errors raised before a command exists

use std::sync::Arc;

use axum::{Extension, Router};

pub mod dto;
pub mod errors;
pub mod handler;
pub mod response;
pub mod routes;
pub mod services;
pub mod translate;

use services::AppServices;

/// Build the full HTTP router over already wired services.
pub fn build_app(services: Arc<AppServices>) -> Router {
    routes::router().layer(Extension(services))
}
