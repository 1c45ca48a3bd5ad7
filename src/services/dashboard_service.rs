// src/services/dashboard_service.rs

use sqlx::SqlitePool;

use crate::{
    common::{error::AppError, money::Money},
    db::DashboardRepository,
    models::dashboard::DashboardSummary,
};

#[derive(Clone)]
pub struct DashboardService {
    pool: SqlitePool,
    dashboard_repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(pool: SqlitePool, dashboard_repo: DashboardRepository) -> Self {
        Self { pool, dashboard_repo }
    }

    pub async fn get_summary(&self) -> Result<DashboardSummary, AppError> {
        let (counts, expense_amounts, earning_amounts) =
            self.dashboard_repo.snapshot(&self.pool).await?;

        let expenses_total = Money::checked_sum(expense_amounts)
            .ok_or_else(|| anyhow::anyhow!("Expense total is out of range"))?;
        let earnings_total = Money::checked_sum(earning_amounts)
            .ok_or_else(|| anyhow::anyhow!("Earnings total is out of range"))?;
        let net_profit = earnings_total
            .checked_sub(expenses_total)
            .ok_or_else(|| anyhow::anyhow!("Net profit is out of range"))?;

        Ok(DashboardSummary {
            expenses_count: counts.expenses,
            products_count: counts.products,
            production_count: counts.production,
            sales_count: counts.sales,
            expenses_total,
            earnings_total,
            net_profit,
        })
    }
}
