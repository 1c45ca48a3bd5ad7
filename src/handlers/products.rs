// src/handlers/products.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    config::AppState,
    models::{
        product::{Product, ProductFilter, ProductPayload},
        response::SuccessResponse,
    },
};

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Catalogue ordered by name", body = Vec<Product>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    ApiQuery(filter): ApiQuery<ProductFilter>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = app_state.product_service.list(&filter).await?;
    Ok(Json(products))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = SuccessResponse),
        (status = 400, description = "Missing or invalid fields")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.into_input()?;
    let id = app_state.product_service.create(&input).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::created(id))))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Product not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Product>, AppError> {
    let product = app_state.product_service.get(id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product replaced", body = SuccessResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Product not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<ProductPayload>,
) -> Result<Json<SuccessResponse>, AppError> {
    let input = payload.into_input()?;
    app_state.product_service.update(id, &input).await?;
    Ok(Json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = SuccessResponse),
        (status = 400, description = "Product still referenced by production or sales"),
        (status = 404, description = "Product not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    app_state.product_service.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
