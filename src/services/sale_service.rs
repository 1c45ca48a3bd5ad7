// src/services/sale_service.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::{ProductRepository, SaleRepository},
    models::sale::{NewSale, Sale, SaleFilter},
    services::product_service::PRODUCT_NOT_FOUND,
};

const SALE_NOT_FOUND: &str = "Sale record not found";

// Same policy as production: not owner-scoped, last write wins.
// `total_amount` is stored as given, never recomputed from the product price.
#[derive(Clone)]
pub struct SaleService {
    pool: SqlitePool,
    sale_repo: SaleRepository,
    product_repo: ProductRepository,
}

impl SaleService {
    pub fn new(pool: SqlitePool, sale_repo: SaleRepository, product_repo: ProductRepository) -> Self {
        Self {
            pool,
            sale_repo,
            product_repo,
        }
    }

    pub async fn list(&self, filter: &SaleFilter) -> Result<Vec<Sale>, AppError> {
        self.sale_repo.list(filter).await
    }

    #[tracing::instrument(skip(self, sale), fields(product_id = sale.product_id))]
    pub async fn create(&self, user_id: i64, sale: &NewSale) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        if !self.product_repo.exists(&mut *tx, sale.product_id).await? {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND));
        }
        let id = self.sale_repo.create(&mut *tx, user_id, sale).await?;

        tx.commit().await?;
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<Sale, AppError> {
        self.sale_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(SALE_NOT_FOUND))
    }

    #[tracing::instrument(skip(self, sale), fields(product_id = sale.product_id))]
    pub async fn update(&self, id: i64, sale: &NewSale) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        if !self.product_repo.exists(&mut *tx, sale.product_id).await? {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND));
        }
        if self.sale_repo.update(&mut *tx, id, sale).await? == 0 {
            return Err(AppError::NotFound(SALE_NOT_FOUND));
        }

        tx.commit().await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.sale_repo.delete(id).await? == 0 {
            return Err(AppError::NotFound(SALE_NOT_FOUND));
        }
        Ok(())
    }
}
