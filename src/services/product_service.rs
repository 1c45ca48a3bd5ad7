// src/services/product_service.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::ProductRepository,
    models::product::{NewProduct, Product, ProductFilter},
};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
const PRODUCT_IN_USE: &str =
    "Cannot delete product because it is referenced in production or sales records";

#[derive(Clone)]
pub struct ProductService {
    pool: SqlitePool,
    product_repo: ProductRepository,
}

impl ProductService {
    pub fn new(pool: SqlitePool, product_repo: ProductRepository) -> Self {
        Self { pool, product_repo }
    }

    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        self.product_repo.list(filter).await
    }

    #[tracing::instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, product: &NewProduct) -> Result<i64, AppError> {
        self.product_repo.create(&self.pool, product).await
    }

    pub async fn get(&self, id: i64) -> Result<Product, AppError> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))
    }

    #[tracing::instrument(skip(self, product))]
    pub async fn update(&self, id: i64, product: &NewProduct) -> Result<(), AppError> {
        if self.product_repo.update(id, product).await? == 0 {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND));
        }
        Ok(())
    }

    /// Refuses while any production or sale row still points at the product.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let references = self.product_repo.count_references(&mut *tx, id).await?;
        if references > 0 {
            tracing::info!(references, "Product delete blocked by existing records");
            return Err(AppError::Conflict(PRODUCT_IN_USE));
        }

        if self.product_repo.delete(&mut *tx, id).await? == 0 {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND));
        }

        tx.commit().await?;
        Ok(())
    }
}
