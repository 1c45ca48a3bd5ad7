// src/models/expense.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::common::{
    error::AppError,
    money::{validate_non_negative, Money},
    serde_helpers::empty_as_none,
};

// Expense joined with the username of whoever recorded it.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,

    #[schema(value_type = f64, example = 120.0)]
    pub amount: Money,

    #[schema(example = "Utilities")]
    pub category: String,

    pub description: String,

    #[schema(value_type = String, format = Date, example = "2025-03-01")]
    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,

    #[schema(example = "ILIASS")]
    pub username: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExpensePayload {
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Validate)]
pub struct NewExpense {
    #[validate(custom(function = "validate_non_negative"))]
    pub amount: Money,
    #[validate(length(min = 1, max = 100, message = "Category must be 1 to 100 characters"))]
    pub category: String,
    #[validate(length(max = 1000, message = "Description is too long"))]
    pub description: String,
    pub date: NaiveDate,
}

impl ExpensePayload {
    pub fn into_input(self) -> Result<NewExpense, AppError> {
        let category = self.category.filter(|c| !c.trim().is_empty());
        let (Some(amount), Some(category), Some(date)) = (self.amount, category, self.date) else {
            return Err(AppError::Validation(
                "Amount, category, and date are required".to_string(),
            ));
        };

        let input = NewExpense {
            amount,
            category,
            description: self.description.unwrap_or_default(),
            date,
        };
        input.validate()?;
        Ok(input)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpenseFilter {
    /// Exact category match
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,
    /// Earliest date, inclusive
    #[serde(rename = "startDate", default, deserialize_with = "empty_as_none")]
    #[param(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    /// Latest date, inclusive
    #[serde(rename = "endDate", default, deserialize_with = "empty_as_none")]
    #[param(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
}
