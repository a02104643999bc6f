use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{CreateProduct, Product, UpdateProduct},
};

pub async fn create(pool: &PgPool, req: &CreateProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO product (name, price) VALUES ($1, $2) RETURNING id, name, price",
    )
    .bind(&req.name)
    .bind(req.price)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Every row, in whatever order Postgres returns them.
pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT id, name, price FROM product")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

pub async fn update_by_id(pool: &PgPool, id: i32, req: &UpdateProduct) -> Result<u64> {
    let result = update_query(id, req).build().execute(pool).await?;

    Ok(result.rows_affected())
}

pub async fn delete_by_id(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM product WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// `UPDATE` touching only the fields present in `req`. Callers validate that
/// at least one field is set.
fn update_query(id: i32, req: &UpdateProduct) -> QueryBuilder<'_, Postgres> {
    let mut query_builder = QueryBuilder::<Postgres>::new("UPDATE product SET ");
    let mut fields = query_builder.separated(", ");

    if let Some(name) = &req.name {
        fields.push("name = ");
        fields.push_bind_unseparated(name);
    }

    if let Some(price) = req.price {
        fields.push("price = ");
        fields.push_bind_unseparated(price);
    }

    query_builder.push(" WHERE id = ");
    query_builder.push_bind(id);

    query_builder
}
