pub mod user_repo;
pub use user_repo::UserRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod expense_repo;
pub use expense_repo::ExpenseRepository;
pub mod production_repo;
pub use production_repo::ProductionRepository;
pub mod sale_repo;
pub use sale_repo::SaleRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;

pub mod seed;
