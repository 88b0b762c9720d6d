use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use catalog_products::{PageRequest, ProductDraft, SortDirection};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    let sort = match query.sort_by.as_deref() {
        Some(s) => match errors::parse_sort_field(s) {
            Ok(field) => Some(field),
            Err(resp) => return resp,
        },
        None => None,
    };
    let direction = query.sort_dir.as_deref().map(SortDirection::from_param);

    let request = PageRequest::new(query.page, query.size, sort, direction);

    match services.products_list(request).await {
        Ok(page) => {
            let page = page.map(|product| dto::product_to_json(&product));
            (StatusCode::OK, Json(page)).into_response()
        }
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let draft = ProductDraft {
        name: body.name,
        description: body.description,
        price: body.price,
    };

    match services.products_create(draft).await {
        Ok(product) => (StatusCode::CREATED, Json(dto::product_to_json(&product))).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.products_get(id).await {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let patch = ProductDraft {
        name: body.name,
        description: body.description,
        price: body.price,
    };

    match services.products_update(id, patch).await {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.products_delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}
