use axum::{routing::get, Router};

pub mod items;
pub mod system;

/// Router for all caller-aware endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/items", items::router())
}
