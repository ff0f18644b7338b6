use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use toolshop_core::{Item, ItemId};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

fn parse_id(raw: &str) -> Result<ItemId, axum::response::Response> {
    raw.parse::<ItemId>()
        .map_err(errors::domain_error_to_response)
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.items_list() {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    match services.items_get(id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Item>, JsonRejection>,
) -> axum::response::Response {
    let Json(item) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let id = item.id;

    match services.items_create(item) {
        Ok(created) => {
            tracing::info!(item_id = %id, "item created");
            (StatusCode::OK, Json(created)).into_response()
        }
        Err(e) => {
            tracing::warn!(item_id = %id, "create rejected: {e}");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<Item>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Json(item) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.items_update(id, item) {
        Ok(updated) => {
            tracing::info!(item_id = %id, "item updated");
            (StatusCode::OK, Json(updated)).into_response()
        }
        Err(e) => {
            tracing::warn!(item_id = %id, "update rejected: {e}");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.items_delete(id) {
        Ok(_) => {
            tracing::info!(item_id = %id, "item deleted");
            (
                StatusCode::OK,
                Json(dto::MessageResponse::new(format!("Item with id {id} deleted"))),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(item_id = %id, "delete rejected: {e}");
            errors::domain_error_to_response(e)
        }
    }
}
