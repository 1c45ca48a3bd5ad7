// src/handlers/production.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::{
        production::{ProductionFilter, ProductionPayload, ProductionRecord},
        response::SuccessResponse,
    },
};

#[utoipa::path(
    get,
    path = "/api/production",
    tag = "Production",
    params(ProductionFilter),
    responses(
        (status = 200, description = "Production batches, newest first", body = Vec<ProductionRecord>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_production(
    State(app_state): State<AppState>,
    ApiQuery(filter): ApiQuery<ProductionFilter>,
) -> Result<Json<Vec<ProductionRecord>>, AppError> {
    let records = app_state.production_service.list(&filter).await?;
    Ok(Json(records))
}

#[utoipa::path(
    post,
    path = "/api/production",
    tag = "Production",
    request_body = ProductionPayload,
    responses(
        (status = 201, description = "Batch recorded", body = SuccessResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Product not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_production(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(payload): ApiJson<ProductionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.into_input()?;
    let id = app_state.production_service.create(user.id, &input).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::created(id))))
}

#[utoipa::path(
    get,
    path = "/api/production/{id}",
    tag = "Production",
    params(("id" = i64, Path, description = "Production record id")),
    responses(
        (status = 200, description = "The production record", body = ProductionRecord),
        (status = 404, description = "Production record not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_production(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ProductionRecord>, AppError> {
    let record = app_state.production_service.get(id).await?;
    Ok(Json(record))
}

#[utoipa::path(
    put,
    path = "/api/production/{id}",
    tag = "Production",
    params(("id" = i64, Path, description = "Production record id")),
    request_body = ProductionPayload,
    responses(
        (status = 200, description = "Record replaced", body = SuccessResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Product or production record not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_production(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<ProductionPayload>,
) -> Result<Json<SuccessResponse>, AppError> {
    let input = payload.into_input()?;
    app_state.production_service.update(id, &input).await?;
    Ok(Json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/production/{id}",
    tag = "Production",
    params(("id" = i64, Path, description = "Production record id")),
    responses(
        (status = 200, description = "Record deleted", body = SuccessResponse),
        (status = 404, description = "Production record not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_production(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    app_state.production_service.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
