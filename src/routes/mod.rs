mod health;
mod products;
mod root;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::greeting))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/product", product_router())
}

fn product_router() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create_product).get(products::list_products))
        .route(
            "/{id}",
            put(products::update_product).delete(products::delete_product),
        )
}
