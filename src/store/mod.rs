mod memory;
mod postgres;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{CreateProduct, Product, UpdateProduct},
};

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

/// Persistence operations the product handlers depend on.
///
/// `update_by_id` and `delete_by_id` return the number of affected rows; a
/// missing id yields `Ok(0)`, not an error.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, req: CreateProduct) -> Result<Product>;

    async fn list_all(&self) -> Result<Vec<Product>>;

    async fn update_by_id(&self, id: i32, req: UpdateProduct) -> Result<u64>;

    async fn delete_by_id(&self, id: i32) -> Result<u64>;
}
