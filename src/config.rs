// src/config.rs

use std::env;

use anyhow::Context;
use sqlx::SqlitePool;

use crate::{
    common::db_utils,
    db::{
        DashboardRepository, ExpenseRepository, ProductRepository, ProductionRepository,
        SaleRepository, UserRepository,
    },
    services::{
        auth::AuthService, dashboard_service::DashboardService, expense_service::ExpenseService,
        product_service::ProductService, production_service::ProductionService,
        sale_service::SaleService,
    },
};

const DEFAULT_DATABASE_URL: &str = "sqlite://ledger.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";

/// Bounds accepted by bcrypt.
pub const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Process settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Only `JWT_SECRET` is mandatory.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .context("JWT_SECRET must be set")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => {
                let cost = raw
                    .parse::<u32>()
                    .with_context(|| format!("BCRYPT_COST must be a number, got {raw:?}"))?;
                anyhow::ensure!(
                    (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost),
                    "BCRYPT_COST must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"
                );
                cost
            }
            None => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            bcrypt_cost,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub auth_service: AuthService,
    pub expense_service: ExpenseService,
    pub product_service: ProductService,
    pub production_service: ProductionService,
    pub sale_service: SaleService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = db_utils::create_pool(&config.database_url)
            .await
            .with_context(|| format!("Failed to open database {}", config.database_url))?;

        tracing::info!("Database connection established");

        Ok(Self::from_pool(db_pool, config))
    }

    // Wires the dependency graph over an already opened pool.
    pub fn from_pool(db_pool: SqlitePool, config: &Config) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let product_repo = ProductRepository::new(db_pool.clone());
        let expense_repo = ExpenseRepository::new(db_pool.clone());
        let production_repo = ProductionRepository::new(db_pool.clone());
        let sale_repo = SaleRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, config.jwt_secret.clone(), config.bcrypt_cost);
        let expense_service = ExpenseService::new(expense_repo);
        let product_service = ProductService::new(db_pool.clone(), product_repo.clone());
        let production_service =
            ProductionService::new(db_pool.clone(), production_repo, product_repo.clone());
        let sale_service = SaleService::new(db_pool.clone(), sale_repo, product_repo);
        let dashboard_service = DashboardService::new(db_pool.clone(), DashboardRepository::new());

        Self {
            db_pool,
            auth_service,
            expense_service,
            product_service,
            production_service,
            sale_service,
            dashboard_service,
        }
    }
}
