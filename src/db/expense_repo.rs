// src/db/expense_repo.rs

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    models::expense::{Expense, ExpenseFilter, NewExpense},
};

const EXPENSE_COLUMNS: &str = r#"
    SELECT e.id, e.user_id, e.amount, e.category, e.description, e.date, e.created_at,
           u.username
    FROM expenses e
    JOIN users u ON e.user_id = u.id
"#;

#[derive(Clone)]
pub struct ExpenseRepository {
    pool: SqlitePool,
}

impl ExpenseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Listing covers every user's expenses; only single-row access is owner-scoped.
    pub async fn list(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, AppError> {
        let mut query = QueryBuilder::<Sqlite>::new(EXPENSE_COLUMNS);
        query.push(" WHERE 1=1");

        if let Some(category) = &filter.category {
            query.push(" AND e.category = ").push_bind(category.clone());
        }
        if let Some(start_date) = filter.start_date {
            query.push(" AND e.date >= ").push_bind(start_date);
        }
        if let Some(end_date) = filter.end_date {
            query.push(" AND e.date <= ").push_bind(end_date);
        }

        query.push(" ORDER BY e.date DESC, e.id DESC");

        let expenses = query
            .build_query_as::<Expense>()
            .fetch_all(&self.pool)
            .await?;
        Ok(expenses)
    }

    pub async fn find_owned(&self, user_id: i64, id: i64) -> Result<Option<Expense>, AppError> {
        let expense = sqlx::query_as::<_, Expense>(&format!(
            "{EXPENSE_COLUMNS} WHERE e.id = ? AND e.user_id = ?"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(expense)
    }

    pub async fn create(&self, user_id: i64, expense: &NewExpense) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO expenses (user_id, amount, category, description, date) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(expense.amount)
        .bind(&expense.category)
        .bind(&expense.description)
        .bind(expense.date)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update_owned(
        &self,
        user_id: i64,
        id: i64,
        expense: &NewExpense,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET amount = ?, category = ?, description = ?, date = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(expense.amount)
        .bind(&expense.category)
        .bind(&expense.description)
        .bind(expense.date)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_owned(&self, user_id: i64, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
