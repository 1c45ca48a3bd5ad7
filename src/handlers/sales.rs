// src/handlers/sales.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::{
        response::SuccessResponse,
        sale::{Sale, SaleFilter, SalePayload},
    },
};

#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Sales",
    params(SaleFilter),
    responses(
        (status = 200, description = "Sales, newest first", body = Vec<Sale>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_sales(
    State(app_state): State<AppState>,
    ApiQuery(filter): ApiQuery<SaleFilter>,
) -> Result<Json<Vec<Sale>>, AppError> {
    let sales = app_state.sale_service.list(&filter).await?;
    Ok(Json(sales))
}

#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sales",
    request_body = SalePayload,
    responses(
        (status = 201, description = "Sale recorded", body = SuccessResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Product not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_sale(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(payload): ApiJson<SalePayload>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.into_input()?;
    let id = app_state.sale_service.create(user.id, &input).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::created(id))))
}

#[utoipa::path(
    get,
    path = "/api/sales/{id}",
    tag = "Sales",
    params(("id" = i64, Path, description = "Sale id")),
    responses(
        (status = 200, description = "The sale", body = Sale),
        (status = 404, description = "Sale record not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_sale(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Sale>, AppError> {
    let sale = app_state.sale_service.get(id).await?;
    Ok(Json(sale))
}

#[utoipa::path(
    put,
    path = "/api/sales/{id}",
    tag = "Sales",
    params(("id" = i64, Path, description = "Sale id")),
    request_body = SalePayload,
    responses(
        (status = 200, description = "Sale replaced", body = SuccessResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Product or sale record not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_sale(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<SalePayload>,
) -> Result<Json<SuccessResponse>, AppError> {
    let input = payload.into_input()?;
    app_state.sale_service.update(id, &input).await?;
    Ok(Json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/sales/{id}",
    tag = "Sales",
    params(("id" = i64, Path, description = "Sale id")),
    responses(
        (status = 200, description = "Sale deleted", body = SuccessResponse),
        (status = 404, description = "Sale record not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_sale(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    app_state.sale_service.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
