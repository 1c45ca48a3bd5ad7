// src/services/production_service.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::{ProductRepository, ProductionRepository},
    models::production::{NewProduction, ProductionFilter, ProductionRecord},
    services::product_service::PRODUCT_NOT_FOUND,
};

const RECORD_NOT_FOUND: &str = "Production record not found";

// Not owner-scoped: any authenticated user may edit or delete any record.
#[derive(Clone)]
pub struct ProductionService {
    pool: SqlitePool,
    production_repo: ProductionRepository,
    product_repo: ProductRepository,
}

impl ProductionService {
    pub fn new(
        pool: SqlitePool,
        production_repo: ProductionRepository,
        product_repo: ProductRepository,
    ) -> Self {
        Self {
            pool,
            production_repo,
            product_repo,
        }
    }

    pub async fn list(&self, filter: &ProductionFilter) -> Result<Vec<ProductionRecord>, AppError> {
        self.production_repo.list(filter).await
    }

    #[tracing::instrument(skip(self, record), fields(product_id = record.product_id))]
    pub async fn create(&self, user_id: i64, record: &NewProduction) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        if !self.product_repo.exists(&mut *tx, record.product_id).await? {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND));
        }
        let id = self.production_repo.create(&mut *tx, user_id, record).await?;

        tx.commit().await?;
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<ProductionRecord, AppError> {
        self.production_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(RECORD_NOT_FOUND))
    }

    #[tracing::instrument(skip(self, record), fields(product_id = record.product_id))]
    pub async fn update(&self, id: i64, record: &NewProduction) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        if !self.product_repo.exists(&mut *tx, record.product_id).await? {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND));
        }
        if self.production_repo.update(&mut *tx, id, record).await? == 0 {
            return Err(AppError::NotFound(RECORD_NOT_FOUND));
        }

        tx.commit().await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.production_repo.delete(id).await? == 0 {
            return Err(AppError::NotFound(RECORD_NOT_FOUND));
        }
        Ok(())
    }
}
