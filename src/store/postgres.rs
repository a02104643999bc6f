use async_trait::async_trait;
use sqlx::PgPool;

use super::ProductStore;
use crate::{
    error::Result,
    models::{CreateProduct, Product, UpdateProduct},
    queries::product_queries,
};

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create(&self, req: CreateProduct) -> Result<Product> {
        product_queries::create(&self.pool, &req).await
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        product_queries::get_all(&self.pool).await
    }

    async fn update_by_id(&self, id: i32, req: UpdateProduct) -> Result<u64> {
        product_queries::update_by_id(&self.pool, id, &req).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64> {
        product_queries::delete_by_id(&self.pool, id).await
    }
}
