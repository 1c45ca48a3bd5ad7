// src/models/production.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        serde_helpers::{empty_as_none, lenient_i64},
    },
    models::product::ProductType,
};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ProductionRecord {
    pub id: i64,
    pub product_id: i64,

    #[schema(example = 40)]
    pub quantity: i64,

    #[schema(value_type = String, format = Date, example = "2025-03-01")]
    pub production_date: NaiveDate,

    pub user_id: i64,
    pub notes: String,
    pub created_at: DateTime<Utc>,

    // Joined from products / users
    pub product_name: String,
    pub product_type: ProductType,
    pub username: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductionPayload {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub product_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: Option<i64>,
    #[schema(value_type = Option<String>, format = Date)]
    pub production_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Validate)]
pub struct NewProduction {
    pub product_id: i64,
    #[validate(range(min = 1, message = "Quantity must be a positive integer"))]
    pub quantity: i64,
    pub production_date: NaiveDate,
    #[validate(length(max = 1000, message = "Notes are too long"))]
    pub notes: String,
}

impl ProductionPayload {
    pub fn into_input(self) -> Result<NewProduction, AppError> {
        let (Some(product_id), Some(quantity), Some(production_date)) =
            (self.product_id, self.quantity, self.production_date)
        else {
            return Err(AppError::Validation(
                "Product, quantity, and production date are required".to_string(),
            ));
        };

        let input = NewProduction {
            product_id,
            quantity,
            production_date,
            notes: self.notes.unwrap_or_default(),
        };
        input.validate()?;
        Ok(input)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductionFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub product_id: Option<i64>,
    #[serde(rename = "startDate", default, deserialize_with = "empty_as_none")]
    #[param(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", default, deserialize_with = "empty_as_none")]
    #[param(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
}
