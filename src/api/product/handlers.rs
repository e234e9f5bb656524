use crate::api::models::*;
use crate::storage::Product;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

/// List every product as an indented JSON array
pub async fn list_products_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let products = state.store.list().await?;

    info!(count = products.len(), "Listed products");

    let body = serde_json::to_string_pretty(&products)
        .map_err(|e| AppError::Internal(format!("Serialize products failed: {}", e)))?;

    Ok((
        StatusCode::FOUND,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Insert a product from a JSON body; any `id` in the payload is ignored
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = match body {
        Ok(bytes) if !bytes.is_empty() => bytes,
        Ok(_) => return Err(AppError::EmptyBody),
        Err(rejection) => {
            warn!(%rejection, "Unreadable request body");
            return Err(AppError::EmptyBody);
        }
    };

    let product = parse_product(&body)?;

    let id = state.store.create(product.into()).await?;

    info!(id, "Product added");

    Ok((StatusCode::CREATED, format!("Added new product [id: {}]", id)))
}

/// A product must be a single JSON object; arrays and scalars are rejected
fn parse_product(body: &[u8]) -> Result<Product, AppError> {
    let reject = |e: serde_json::Error| {
        warn!(error = %e, "Rejected product payload");
        AppError::InvalidFormat
    };

    let value: Value = serde_json::from_slice(body).map_err(reject)?;
    if !value.is_object() {
        warn!("Rejected product payload: not a JSON object");
        return Err(AppError::InvalidFormat);
    }

    Product::deserialize(value).map_err(reject)
}
