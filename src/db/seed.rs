// src/db/seed.rs

use std::str::FromStr;

use sqlx::SqlitePool;

use crate::{
    common::{error::AppError, money::Money},
    db::{ProductRepository, UserRepository},
    models::product::{NewProduct, ProductType},
    services::auth::AuthService,
};

const DEFAULT_USERS: [&str; 2] = ["ILIASS", "YASSIR"];
const DEFAULT_PASSWORD: &str = "admin123";

const DEFAULT_PRODUCTS: [(&str, ProductType, &str, &str); 2] = [
    ("Product A", ProductType::Hoodie, "10.50", "25.00"),
    ("Product B", ProductType::Tshirt, "15.75", "35.50"),
];

/// First-start data. Each table is only filled when it is empty, so running
/// this on every boot is harmless.
pub async fn seed_defaults(pool: &SqlitePool, auth_service: &AuthService) -> Result<(), AppError> {
    let user_repo = UserRepository::new(pool.clone());
    let product_repo = ProductRepository::new(pool.clone());

    // Hash before opening the transaction; bcrypt is slow.
    let password_hash = auth_service.hash_password(DEFAULT_PASSWORD).await?;

    let mut tx = pool.begin().await?;
    if user_repo.count(&mut *tx).await? == 0 {
        for username in DEFAULT_USERS {
            user_repo.create_user(&mut *tx, username, &password_hash).await?;
        }
        tracing::info!(count = DEFAULT_USERS.len(), "Seeded default users");
    }
    tx.commit().await?;

    let mut tx = pool.begin().await?;
    if product_repo.count(&mut *tx).await? == 0 {
        for (name, product_type, cost, price) in DEFAULT_PRODUCTS {
            let product = NewProduct {
                name: name.to_string(),
                product_type,
                cost_price: parse_money(cost)?,
                selling_price: parse_money(price)?,
            };
            product_repo.create(&mut *tx, &product).await?;
        }
        tracing::info!(count = DEFAULT_PRODUCTS.len(), "Seeded default products");
    }
    tx.commit().await?;

    Ok(())
}

fn parse_money(value: &str) -> Result<Money, AppError> {
    Money::from_str(value).map_err(|e| anyhow::anyhow!("Invalid seed amount {value}: {e}").into())
}
