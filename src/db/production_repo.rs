// src/db/production_repo.rs

use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    models::production::{NewProduction, ProductionFilter, ProductionRecord},
};

const PRODUCTION_COLUMNS: &str = r#"
    SELECT p.id, p.product_id, p.quantity, p.production_date, p.user_id, p.notes, p.created_at,
           pr.name AS product_name, pr.type AS product_type, u.username
    FROM production p
    JOIN products pr ON p.product_id = pr.id
    JOIN users u ON p.user_id = u.id
"#;

#[derive(Clone)]
pub struct ProductionRepository {
    pool: SqlitePool,
}

impl ProductionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: &ProductionFilter) -> Result<Vec<ProductionRecord>, AppError> {
        let mut query = QueryBuilder::<Sqlite>::new(PRODUCTION_COLUMNS);
        query.push(" WHERE 1=1");

        if let Some(product_id) = filter.product_id {
            query.push(" AND p.product_id = ").push_bind(product_id);
        }
        if let Some(start_date) = filter.start_date {
            query.push(" AND p.production_date >= ").push_bind(start_date);
        }
        if let Some(end_date) = filter.end_date {
            query.push(" AND p.production_date <= ").push_bind(end_date);
        }

        query.push(" ORDER BY p.production_date DESC, p.id DESC");

        let records = query
            .build_query_as::<ProductionRecord>()
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ProductionRecord>, AppError> {
        let record =
            sqlx::query_as::<_, ProductionRecord>(&format!("{PRODUCTION_COLUMNS} WHERE p.id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(record)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        user_id: i64,
        record: &NewProduction,
    ) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO production (product_id, quantity, production_date, user_id, notes)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.product_id)
        .bind(record.quantity)
        .bind(record.production_date)
        .bind(user_id)
        .bind(&record.notes)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    // The recording user is kept as-is; any authenticated user may edit.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        record: &NewProduction,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            UPDATE production
            SET product_id = ?, quantity = ?, production_date = ?, notes = ?
            WHERE id = ?
            "#,
        )
        .bind(record.product_id)
        .bind(record.quantity)
        .bind(record.production_date)
        .bind(&record.notes)
        .bind(id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM production WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
