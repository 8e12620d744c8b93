use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use depot_inventory::ItemError;

/// Forbidden carries no body; the other outcomes carry their message.
pub fn item_error_to_response(err: ItemError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        ItemError::Forbidden => StatusCode::FORBIDDEN.into_response(),
        ItemError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", message),
        ItemError::BadInput(_) => json_error(StatusCode::BAD_REQUEST, "bad_input", message),
    }
}

/// Unreadable request bodies (bad JSON, wrong types, missing content type)
/// are bad input like any other.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "bad_input", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::ItemId;

    #[test]
    fn outcomes_map_to_status_codes() {
        assert_eq!(item_error_to_response(ItemError::Forbidden).status(), StatusCode::FORBIDDEN);
        assert_eq!(
            item_error_to_response(ItemError::NotFound(ItemId::new(1))).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            item_error_to_response(ItemError::bad_input("nope")).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
