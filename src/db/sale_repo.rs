// src/db/sale_repo.rs

use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    models::sale::{NewSale, Sale, SaleFilter},
};

const SALE_COLUMNS: &str = r#"
    SELECT s.id, s.product_id, s.quantity, s.total_amount, s.client_name, s.sale_date,
           s.user_id, s.notes, s.status, s.payment_status, s.created_at,
           p.name AS product_name, p.type AS product_type, u.username
    FROM sales s
    JOIN products p ON s.product_id = p.id
    JOIN users u ON s.user_id = u.id
"#;

#[derive(Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: &SaleFilter) -> Result<Vec<Sale>, AppError> {
        let mut query = QueryBuilder::<Sqlite>::new(SALE_COLUMNS);
        query.push(" WHERE 1=1");

        if let Some(product_id) = filter.product_id {
            query.push(" AND s.product_id = ").push_bind(product_id);
        }
        if let Some(client_name) = &filter.client_name {
            // SQLite's LIKE ignores ASCII case.
            query
                .push(" AND s.client_name LIKE ")
                .push_bind(format!("%{client_name}%"));
        }
        if let Some(start_date) = filter.start_date {
            query.push(" AND s.sale_date >= ").push_bind(start_date);
        }
        if let Some(end_date) = filter.end_date {
            query.push(" AND s.sale_date <= ").push_bind(end_date);
        }

        query.push(" ORDER BY s.sale_date DESC, s.id DESC");

        let sales = query.build_query_as::<Sale>().fetch_all(&self.pool).await?;
        Ok(sales)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Sale>, AppError> {
        let sale = sqlx::query_as::<_, Sale>(&format!("{SALE_COLUMNS} WHERE s.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(sale)
    }

    pub async fn create<'e, E>(&self, executor: E, user_id: i64, sale: &NewSale) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO sales (product_id, quantity, total_amount, client_name, sale_date,
                               user_id, notes, status, payment_status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(sale.product_id)
        .bind(sale.quantity)
        .bind(sale.total_amount)
        .bind(&sale.client_name)
        .bind(sale.sale_date)
        .bind(user_id)
        .bind(&sale.notes)
        .bind(sale.status)
        .bind(sale.payment_status)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update<'e, E>(&self, executor: E, id: i64, sale: &NewSale) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            UPDATE sales
            SET product_id = ?, quantity = ?, total_amount = ?, client_name = ?, sale_date = ?,
                notes = ?, status = ?, payment_status = ?
            WHERE id = ?
            "#,
        )
        .bind(sale.product_id)
        .bind(sale.quantity)
        .bind(sale.total_amount)
        .bind(&sale.client_name)
        .bind(sale.sale_date)
        .bind(&sale.notes)
        .bind(sale.status)
        .bind(sale.payment_status)
        .bind(id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM sales WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
