// src/db/dashboard_repo.rs

use sqlx::{Acquire, Executor, Sqlite};

use crate::{
    common::{error::AppError, money::Money},
    models::dashboard::RecordCounts,
};

#[derive(Clone, Default)]
pub struct DashboardRepository;

impl DashboardRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn counts<'e, E>(&self, executor: E) -> Result<RecordCounts, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let counts = sqlx::query_as::<_, RecordCounts>(
            r#"
            SELECT (SELECT COUNT(*) FROM expenses)   AS expenses,
                   (SELECT COUNT(*) FROM products)   AS products,
                   (SELECT COUNT(*) FROM production) AS production,
                   (SELECT COUNT(*) FROM sales)      AS sales
            "#,
        )
        .fetch_one(executor)
        .await?;
        Ok(counts)
    }

    // Amounts are summed in Rust: the column holds decimal text and SQLite
    // would add it up as floating point.
    pub async fn expense_amounts<'e, E>(&self, executor: E) -> Result<Vec<Money>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let amounts = sqlx::query_scalar::<_, Money>("SELECT amount FROM expenses")
            .fetch_all(executor)
            .await?;
        Ok(amounts)
    }

    pub async fn paid_sale_amounts<'e, E>(&self, executor: E) -> Result<Vec<Money>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let amounts = sqlx::query_scalar::<_, Money>(
            "SELECT total_amount FROM sales WHERE payment_status = 'paid' AND status <> 'cancelled'",
        )
        .fetch_all(executor)
        .await?;
        Ok(amounts)
    }

    /// All three reads inside one transaction so the figures agree with each other.
    pub async fn snapshot<'e, A>(
        &self,
        conn: A,
    ) -> Result<(RecordCounts, Vec<Money>, Vec<Money>), AppError>
    where
        A: Acquire<'e, Database = Sqlite>,
    {
        let mut tx = conn.begin().await?;
        let counts = self.counts(&mut *tx).await?;
        let expenses = self.expense_amounts(&mut *tx).await?;
        let earnings = self.paid_sale_amounts(&mut *tx).await?;
        tx.commit().await?;
        Ok((counts, expenses, earnings))
    }
}
