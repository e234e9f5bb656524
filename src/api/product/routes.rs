use crate::api::models::AppState;
use crate::api::product::handlers::{create_product_handler, list_products_handler};
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products_handler).post(create_product_handler))
}
