pub mod auth;
pub mod dashboard;
pub mod expenses;
pub mod production;
pub mod products;
pub mod sales;
