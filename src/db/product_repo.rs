// src/db/product_repo.rs

use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    models::product::{NewProduct, Product, ProductFilter},
};

const PRODUCT_COLUMNS: &str =
    "SELECT id, name, type, cost_price, selling_price, created_at, updated_at FROM products";

#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        let mut query = QueryBuilder::<Sqlite>::new(PRODUCT_COLUMNS);
        query.push(" WHERE 1=1");

        if let Some(product_type) = filter.product_type {
            query.push(" AND type = ").push_bind(product_type);
        }

        query.push(" ORDER BY name ASC");

        let products = query
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!("{PRODUCT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    /// Existence check used before Production/Sales rows are written.
    pub async fn exists<'e, E>(&self, executor: E, id: i64) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(found.is_some())
    }

    pub async fn count<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    pub async fn create<'e, E>(&self, executor: E, product: &NewProduct) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "INSERT INTO products (name, type, cost_price, selling_price) VALUES (?, ?, ?, ?)",
        )
        .bind(&product.name)
        .bind(product.product_type)
        .bind(product.cost_price)
        .bind(product.selling_price)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Full replace. Returns the number of rows touched (0 when the id is unknown).
    pub async fn update(&self, id: i64, product: &NewProduct) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?, type = ?, cost_price = ?, selling_price = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(product.product_type)
        .bind(product.cost_price)
        .bind(product.selling_price)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// How many production and sale rows point at this product.
    pub async fn count_references<'e, E>(&self, executor: E, id: i64) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT (SELECT COUNT(*) FROM production WHERE product_id = ?)
                 + (SELECT COUNT(*) FROM sales WHERE product_id = ?)
            "#,
        )
        .bind(id)
        .bind(id)
        .fetch_one(executor)
        .await?;
        Ok(count)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
