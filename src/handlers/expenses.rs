// src/handlers/expenses.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::{
        expense::{Expense, ExpenseFilter, ExpensePayload},
        response::SuccessResponse,
    },
};

// GET /api/expenses
#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = "Expenses",
    params(ExpenseFilter),
    responses(
        (status = 200, description = "Expenses of every user, newest first", body = Vec<Expense>),
        (status = 401, description = "Missing token")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_expenses(
    State(app_state): State<AppState>,
    ApiQuery(filter): ApiQuery<ExpenseFilter>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let expenses = app_state.expense_service.list(&filter).await?;
    Ok(Json(expenses))
}

// POST /api/expenses
#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = "Expenses",
    request_body = ExpensePayload,
    responses(
        (status = 201, description = "Expense recorded", body = SuccessResponse),
        (status = 400, description = "Missing or invalid fields")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_expense(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(payload): ApiJson<ExpensePayload>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.into_input()?;
    let id = app_state.expense_service.create(user.id, &input).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::created(id))))
}

// GET /api/expenses/{id}
#[utoipa::path(
    get,
    path = "/api/expenses/{id}",
    tag = "Expenses",
    params(("id" = i64, Path, description = "Expense id")),
    responses(
        (status = 200, description = "The expense", body = Expense),
        (status = 404, description = "Expense not found, or recorded by another user")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_expense(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Expense>, AppError> {
    let expense = app_state.expense_service.get(user.id, id).await?;
    Ok(Json(expense))
}

// PUT /api/expenses/{id}
#[utoipa::path(
    put,
    path = "/api/expenses/{id}",
    tag = "Expenses",
    params(("id" = i64, Path, description = "Expense id")),
    request_body = ExpensePayload,
    responses(
        (status = 200, description = "Expense replaced", body = SuccessResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Expense not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_expense(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<ExpensePayload>,
) -> Result<Json<SuccessResponse>, AppError> {
    let input = payload.into_input()?;
    app_state.expense_service.update(user.id, id, &input).await?;
    Ok(Json(SuccessResponse::ok()))
}

// DELETE /api/expenses/{id}
#[utoipa::path(
    delete,
    path = "/api/expenses/{id}",
    tag = "Expenses",
    params(("id" = i64, Path, description = "Expense id")),
    responses(
        (status = 200, description = "Expense deleted", body = SuccessResponse),
        (status = 404, description = "Expense not found")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_expense(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    app_state.expense_service.delete(user.id, id).await?;
    Ok(Json(SuccessResponse::ok()))
}
