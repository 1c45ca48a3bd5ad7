// src/services/expense_service.rs

use crate::{
    common::error::AppError,
    db::ExpenseRepository,
    models::expense::{Expense, ExpenseFilter, NewExpense},
};

const EXPENSE_NOT_FOUND: &str = "Expense not found";
const EXPENSE_NOT_UPDATABLE: &str = "Expense not found or you do not have permission to update it";
const EXPENSE_NOT_DELETABLE: &str = "Expense not found or you do not have permission to delete it";

// Single-row access is owner-scoped. A record owned by someone else is
// reported exactly like a missing one.
#[derive(Clone)]
pub struct ExpenseService {
    expense_repo: ExpenseRepository,
}

impl ExpenseService {
    pub fn new(expense_repo: ExpenseRepository) -> Self {
        Self { expense_repo }
    }

    pub async fn list(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, AppError> {
        self.expense_repo.list(filter).await
    }

    #[tracing::instrument(skip(self, expense))]
    pub async fn create(&self, user_id: i64, expense: &NewExpense) -> Result<i64, AppError> {
        let id = self.expense_repo.create(user_id, expense).await?;
        tracing::debug!(expense_id = id, "Expense recorded");
        Ok(id)
    }

    pub async fn get(&self, user_id: i64, id: i64) -> Result<Expense, AppError> {
        self.expense_repo
            .find_owned(user_id, id)
            .await?
            .ok_or(AppError::NotFound(EXPENSE_NOT_FOUND))
    }

    #[tracing::instrument(skip(self, expense))]
    pub async fn update(&self, user_id: i64, id: i64, expense: &NewExpense) -> Result<(), AppError> {
        if self.expense_repo.update_owned(user_id, id, expense).await? == 0 {
            return Err(AppError::NotFound(EXPENSE_NOT_UPDATABLE));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, user_id: i64, id: i64) -> Result<(), AppError> {
        if self.expense_repo.delete_owned(user_id, id).await? == 0 {
            return Err(AppError::NotFound(EXPENSE_NOT_DELETABLE));
        }
        Ok(())
    }
}
