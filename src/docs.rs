// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Expenses ---
        handlers::expenses::list_expenses,
        handlers::expenses::create_expense,
        handlers::expenses::get_expense,
        handlers::expenses::update_expense,
        handlers::expenses::delete_expense,

        // --- Products ---
        handlers::products::list_products,
        handlers::products::create_product,
        handlers::products::get_product,
        handlers::products::update_product,
        handlers::products::delete_product,

        // --- Production ---
        handlers::production::list_production,
        handlers::production::create_production,
        handlers::production::get_production,
        handlers::production::update_production,
        handlers::production::delete_production,

        // --- Sales ---
        handlers::sales::list_sales,
        handlers::sales::create_sale,
        handlers::sales::get_sale,
        handlers::sales::update_sale,
        handlers::sales::delete_sale,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::health,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::PublicUser,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,
            models::auth::MeResponse,

            // --- Ledger ---
            models::expense::Expense,
            models::expense::ExpensePayload,
            models::product::ProductType,
            models::product::Product,
            models::product::ProductPayload,
            models::production::ProductionRecord,
            models::production::ProductionPayload,
            models::sale::SaleStatus,
            models::sale::PaymentStatus,
            models::sale::Sale,
            models::sale::SalePayload,

            // --- Shared ---
            models::dashboard::DashboardSummary,
            models::response::SuccessResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Login and session identity"),
        (name = "Expenses", description = "Business expenses"),
        (name = "Products", description = "Product catalogue"),
        (name = "Production", description = "Manufactured batches"),
        (name = "Sales", description = "Sales to clients"),
        (name = "Dashboard", description = "Ledger totals"),
        (name = "System", description = "Liveness")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
