use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use depot_core::ItemId;
use depot_inventory::ItemRequest;

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::CallerContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
        .route("/:id/price", get(get_item_price))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
) -> axum::response::Response {
    match services.items.list_items(&caller).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::item_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path(id): Path<ItemId>,
) -> axum::response::Response {
    match services.items.get_item(&caller, id).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::item_error_to_response(e),
    }
}

pub async fn get_item_price(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path(id): Path<ItemId>,
) -> axum::response::Response {
    match services.items.get_item_price(&caller, id).await {
        Ok(price) => (StatusCode::OK, Json(price)).into_response(),
        Err(e) => errors::item_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    body: Result<Json<ItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let item = match services.items.add_item(&caller, &body).await {
        Ok(item) => item,
        Err(e) => return errors::item_error_to_response(e),
    };

    // Location points at the get-by-id route.
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/items/{}", item.id))],
        Json(item),
    )
        .into_response()
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path(id): Path<ItemId>,
    body: Result<Json<ItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.items.update_item(&caller, id, &body).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::item_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path(id): Path<ItemId>,
) -> axum::response::Response {
    match services.items.delete_item(&caller, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::item_error_to_response(e),
    }
}
