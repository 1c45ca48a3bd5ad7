pub mod auth;
pub mod dashboard_service;
pub mod expense_service;
pub mod product_service;
pub mod production_service;
pub mod sale_service;
