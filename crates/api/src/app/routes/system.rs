use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use depot_auth::AuthorizationPort;

use crate::app::errors;
use crate::context::CallerContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(caller): Extension<CallerContext>) -> axum::response::Response {
    let Some(principal) = caller.principal() else {
        return errors::json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "bearer token required");
    };

    Json(serde_json::json!({
        "user_id": principal.user_id(),
        "workplace_id": principal.workplace_id(),
        "roles": principal.roles().iter().map(|r| r.as_str()).collect::<Vec<_>>(),
        "permissions": principal.permissions().map(|p| p.as_str()).collect::<Vec<_>>(),
    }))
    .into_response()
}
