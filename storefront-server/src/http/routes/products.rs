//! Product endpoints

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use storefront_core::{Product, ProductCreateRequest, ProductUpdateRequest, ValidationError};

use crate::db::repos::ProductRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// GET /products - list all products, newest first
async fn list_products(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Envelope<Vec<Product>>>), ApiError> {
    let products = ProductRepo::new(state.pool()).list().await?;
    Ok(Envelope::ok("Products fetched successfully", products))
}

/// GET /products/search?q= - keyword search, checked before storage
async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<(StatusCode, Json<Envelope<Vec<Product>>>), ApiError> {
    if params.q.is_empty() {
        return Err(ApiError::Validation(ValidationError::Empty {
            field: "search keyword",
        }));
    }
    let products = ProductRepo::new(state.pool()).search(&params.q).await?;
    Ok(Envelope::ok("Search completed", products))
}

/// GET /products/{id}
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Envelope<Product>>), ApiError> {
    let product = ProductRepo::new(state.pool()).get(&id).await?;
    Ok(Envelope::ok("Product fetched successfully", product))
}

/// POST /products - create with a caller-chosen id
async fn create_product(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProductCreateRequest>,
) -> Result<(StatusCode, Json<Envelope<Product>>), ApiError> {
    req.validate()?;
    let product = ProductRepo::new(state.pool()).create(&req).await?;
    Ok(Envelope::created("Product created successfully", product))
}

/// PUT /products/{id} - full overwrite of the mutable columns
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ProductUpdateRequest>,
) -> Result<(StatusCode, Json<Envelope<serde_json::Value>>), ApiError> {
    ProductRepo::new(state.pool()).update(&id, &req).await?;
    Ok(Envelope::ok_empty("Product updated successfully"))
}

/// DELETE /products/{id}
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Envelope<serde_json::Value>>), ApiError> {
    ProductRepo::new(state.pool()).delete(&id).await?;
    Ok(Envelope::ok_empty("Product deleted successfully"))
}

/// Product routes. The static /products/search segment takes
/// precedence over the {id} capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/search", get(search_products))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
