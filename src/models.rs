pub mod auth;
pub mod dashboard;
pub mod expense;
pub mod product;
pub mod production;
pub mod response;
pub mod sale;
