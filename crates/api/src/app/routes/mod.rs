use axum::Router;
use axum::routing::get;

pub mod offers;
pub mod roles;
pub mod system;
pub mod users;

/// Router for every use-case endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/users", users::router())
        .nest("/roles", roles::router())
        .nest("/offers", offers::router())
}
