// src/models/product.rs

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::common::{
    error::AppError,
    money::{validate_non_negative, Money},
    serde_helpers::empty_as_none,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum ProductType {
    Hoodie,
    Sweatshirt,
    Tshirt,
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hoodie" => Ok(ProductType::Hoodie),
            "Sweatshirt" => Ok(ProductType::Sweatshirt),
            "Tshirt" => Ok(ProductType::Tshirt),
            other => Err(format!(
                "unknown product type {other:?}, expected Hoodie, Sweatshirt or Tshirt"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Classic Hoodie")]
    pub name: String,

    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub product_type: ProductType,

    #[schema(value_type = f64, example = 10.5)]
    pub cost_price: Money,

    #[schema(value_type = f64, example = 25.0)]
    pub selling_price: Money,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Body of POST/PUT /api/products. Everything is optional at the serde level
// so that missing fields produce our own message instead of a serde one.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductPayload {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    #[schema(value_type = Option<f64>)]
    pub cost_price: Option<Money>,
    #[schema(value_type = Option<f64>)]
    pub selling_price: Option<Money>,
}

#[derive(Debug, Clone, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, max = 255, message = "Product name must be 1 to 255 characters"))]
    pub name: String,
    pub product_type: ProductType,
    #[validate(custom(function = "validate_non_negative"))]
    pub cost_price: Money,
    #[validate(custom(function = "validate_non_negative"))]
    pub selling_price: Money,
}

impl ProductPayload {
    pub fn into_input(self) -> Result<NewProduct, AppError> {
        let name = self.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        let (Some(name), Some(product_type), Some(cost_price), Some(selling_price)) =
            (name, self.product_type, self.cost_price, self.selling_price)
        else {
            return Err(AppError::Validation(
                "Name, type, cost price, and selling price are required".to_string(),
            ));
        };

        let input = NewProduct {
            name,
            product_type,
            cost_price,
            selling_price,
        };
        input.validate()?;
        Ok(input)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Only products of this type
    #[serde(rename = "type", default, deserialize_with = "empty_as_none")]
    #[param(inline)]
    pub product_type: Option<ProductType>,
}
