// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::common::money::Money;

// Headline figures for the ledger as a whole.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub expenses_count: i64,
    pub products_count: i64,
    pub production_count: i64,
    pub sales_count: i64,

    #[schema(value_type = f64)]
    pub expenses_total: Money,

    /// Paid, non-cancelled sales only
    #[schema(value_type = f64)]
    pub earnings_total: Money,

    #[schema(value_type = f64)]
    pub net_profit: Money,
}

#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct RecordCounts {
    pub expenses: i64,
    pub products: i64,
    pub production: i64,
    pub sales: i64,
}
