// src/app.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::auth_guard};

/// Assembles every route. Anything outside `/api` and the docs is served
/// from `static_dir`, with `index.html` as the catch-all.
pub fn build_router(app_state: AppState, static_dir: &str) -> Router {
    // Public
    let public_routes = Router::new()
        .route("/health", get(handlers::dashboard::health))
        .route("/auth/login", post(handlers::auth::login));

    // Everything else requires a bearer token
    let private_routes = Router::new()
        .route("/auth/me", get(handlers::auth::get_me))
        .route(
            "/expenses",
            get(handlers::expenses::list_expenses).post(handlers::expenses::create_expense),
        )
        .route(
            "/expenses/{id}",
            get(handlers::expenses::get_expense)
                .put(handlers::expenses::update_expense)
                .delete(handlers::expenses::delete_expense),
        )
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        .route(
            "/production",
            get(handlers::production::list_production)
                .post(handlers::production::create_production),
        )
        .route(
            "/production/{id}",
            get(handlers::production::get_production)
                .put(handlers::production::update_production)
                .delete(handlers::production::delete_production),
        )
        .route(
            "/sales",
            get(handlers::sales::list_sales).post(handlers::sales::create_sale),
        )
        .route(
            "/sales/{id}",
            get(handlers::sales::get_sale)
                .put(handlers::sales::update_sale)
                .delete(handlers::sales::delete_sale),
        )
        .route("/dashboard/summary", get(handlers::dashboard::get_summary))
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let client_shell = ServeDir::new(static_dir)
        .fallback(ServeFile::new(format!("{static_dir}/index.html")));

    Router::new()
        .nest("/api", public_routes.merge(private_routes))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(client_shell)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests;
