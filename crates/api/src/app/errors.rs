use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::ProductId;
use catalog_products::{ProductError, SortField};

pub fn product_error_to_response(err: ProductError) -> axum::response::Response {
    match &err {
        ProductError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        ProductError::Store(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            format!("{e:?}"),
        ),
    }
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

pub fn parse_product_id(s: &str) -> Result<ProductId, axum::response::Response> {
    s.parse().map_err(|_| {
        json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
    })
}

pub fn parse_sort_field(s: &str) -> Result<SortField, axum::response::Response> {
    s.parse().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            "invalid_sort",
            "sortBy must be one of: id, name, description, price",
        )
    })
}
