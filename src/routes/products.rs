use axum::{extract::State, Json};
use http::StatusCode;

use crate::{
    error::Result,
    models::{CreateProduct, Envelope, Product, UpdateProduct},
    utils::extractors::{AppJson, AppPath},
    AppState,
};

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProduct>,
) -> Result<(StatusCode, Json<Envelope<Product>>)> {
    payload.validate()?;

    let product = state.products.create(payload).await?;
    tracing::debug!("Created product {}", product.id);

    Ok((StatusCode::CREATED, Json(Envelope::data(product))))
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Product>>>> {
    let products = state.products.list_all().await?;
    tracing::debug!("Fetched {} products", products.len());

    Ok(Json(Envelope::data(products)))
}

pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateProduct>,
) -> Result<Json<Envelope<u64>>> {
    payload.validate()?;

    let affected = state.products.update_by_id(id, payload).await?;
    tracing::debug!("Updated product {}: {} rows affected", id, affected);

    Ok(Json(Envelope::data(affected)))
}

pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    let affected = state.products.delete_by_id(id).await?;
    tracing::debug!("Deleted product {}: {} rows affected", id, affected);

    Ok(StatusCode::NO_CONTENT)
}
