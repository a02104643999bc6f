use std::{
    io,
    sync::atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::ProductStore;
use crate::{
    error::{AppError, Result},
    models::{CreateProduct, Product, UpdateProduct},
};

/// In-process [`ProductStore`] used as a test double.
///
/// Ids are assigned from 1 upward like a fresh `SERIAL` column. While
/// `fail` is set every operation returns a dropped-connection error.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: Mutex<Inner>,
    fail: AtomicBool,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Product>,
    next_id: i32,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::Io(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection to server was lost",
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, req: CreateProduct) -> Result<Product> {
        self.check()?;
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;

        let product = Product {
            id: inner.next_id,
            name: Some(req.name),
            price: Some(req.price),
        };
        inner.rows.push(product.clone());

        Ok(product)
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        self.check()?;
        Ok(self.inner.lock().await.rows.clone())
    }

    async fn update_by_id(&self, id: i32, req: UpdateProduct) -> Result<u64> {
        self.check()?;
        let mut inner = self.inner.lock().await;

        let mut affected = 0;
        for row in inner.rows.iter_mut().filter(|row| row.id == id) {
            if let Some(name) = &req.name {
                row.name = Some(name.clone());
            }
            if let Some(price) = req.price {
                row.price = Some(price);
            }
            affected += 1;
        }

        Ok(affected)
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64> {
        self.check()?;
        let mut inner = self.inner.lock().await;

        let before = inner.rows.len();
        inner.rows.retain(|row| row.id != id);

        Ok((before - inner.rows.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn widget(name: &str, price: i64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price: Decimal::from(price),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = MemoryProductStore::new();

        let first = store.create(widget("Widget", 10)).await.unwrap();
        let second = store.create(widget("Gadget", 20)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.list_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn missing_ids_affect_zero_rows() {
        let store = MemoryProductStore::new();
        store.create(widget("Widget", 10)).await.unwrap();

        let update = UpdateProduct {
            name: Some("Gadget".to_string()),
            price: None,
        };
        assert_eq!(store.update_by_id(99, update).await.unwrap(), 0);
        assert_eq!(store.delete_by_id(99).await.unwrap(), 0);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_keeps_untouched_fields() {
        let store = MemoryProductStore::new();
        let created = store.create(widget("Widget", 10)).await.unwrap();

        let update = UpdateProduct {
            name: None,
            price: Some(Decimal::from(12)),
        };
        assert_eq!(store.update_by_id(created.id, update).await.unwrap(), 1);

        let rows = store.list_all().await.unwrap();
        assert_eq!(rows[0].name.as_deref(), Some("Widget"));
        assert_eq!(rows[0].price, Some(Decimal::from(12)));
    }

    #[tokio::test]
    async fn failing_store_rejects_every_operation() {
        let store = MemoryProductStore::failing();

        assert!(matches!(
            store.create(widget("Widget", 1)).await,
            Err(AppError::Database(_))
        ));
        assert!(store.list_all().await.is_err());
        assert!(store.update_by_id(1, UpdateProduct::default()).await.is_err());
        assert!(store.delete_by_id(1).await.is_err());

        store.set_failing(false);
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
