// src/models/sale.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        money::{validate_non_negative, Money},
        serde_helpers::{empty_as_none, lenient_i64},
    },
    models::product::ProductType,
};

// Delivery status and payment status are independent flags; any value may
// follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    #[default]
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum PaymentStatus {
    #[sqlx(rename = "paid")]
    #[serde(rename = "paid")]
    Paid,
    #[default]
    #[sqlx(rename = "not paid")]
    #[serde(rename = "not paid")]
    NotPaid,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Sale {
    pub id: i64,
    pub product_id: i64,

    #[schema(example = 2)]
    pub quantity: i64,

    /// Amount actually charged; not derived from the product price.
    #[schema(value_type = f64, example = 50.0)]
    pub total_amount: Money,

    #[schema(example = "Yassir Anas")]
    pub client_name: String,

    #[schema(value_type = String, format = Date, example = "2025-03-02")]
    pub sale_date: NaiveDate,

    pub user_id: i64,
    pub notes: String,
    pub status: SaleStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,

    // Joined from products / users
    pub product_name: String,
    pub product_type: ProductType,
    pub username: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SalePayload {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub product_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: Option<i64>,
    #[schema(value_type = Option<f64>)]
    pub total_amount: Option<Money>,
    pub client_name: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub sale_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: Option<SaleStatus>,
    pub payment_status: Option<PaymentStatus>,
}

#[derive(Debug, Clone, Validate)]
pub struct NewSale {
    pub product_id: i64,
    #[validate(range(min = 1, message = "Quantity must be a positive integer"))]
    pub quantity: i64,
    #[validate(custom(function = "validate_non_negative"))]
    pub total_amount: Money,
    #[validate(length(min = 1, max = 255, message = "Client name must be 1 to 255 characters"))]
    pub client_name: String,
    pub sale_date: NaiveDate,
    #[validate(length(max = 1000, message = "Notes are too long"))]
    pub notes: String,
    pub status: SaleStatus,
    pub payment_status: PaymentStatus,
}

impl SalePayload {
    pub fn into_input(self) -> Result<NewSale, AppError> {
        let client_name = self.client_name.filter(|c| !c.trim().is_empty());
        let (Some(product_id), Some(quantity), Some(total_amount), Some(client_name), Some(sale_date)) =
            (self.product_id, self.quantity, self.total_amount, client_name, self.sale_date)
        else {
            return Err(AppError::Validation(
                "Product, quantity, total amount, client name, and sale date are required"
                    .to_string(),
            ));
        };

        let input = NewSale {
            product_id,
            quantity,
            total_amount,
            client_name,
            sale_date,
            notes: self.notes.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            payment_status: self.payment_status.unwrap_or_default(),
        };
        input.validate()?;
        Ok(input)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SaleFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub product_id: Option<i64>,
    /// Substring of the client name
    #[serde(default, deserialize_with = "empty_as_none")]
    pub client_name: Option<String>,
    #[serde(rename = "startDate", default, deserialize_with = "empty_as_none")]
    #[param(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", default, deserialize_with = "empty_as_none")]
    #[param(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
}
