// src/handlers/auth.rs

use axum::{extract::State, Json};

use crate::{
    common::{error::AppError, extract::ApiJson},
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{AuthResponse, LoginUserPayload, MeResponse},
};

// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginUserPayload,
    responses(
        (status = 200, description = "Login succeeded", body = AuthResponse),
        (status = 400, description = "Username or password missing"),
        (status = 401, description = "Invalid username or password")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<LoginUserPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    let (username, password) = payload.credentials()?;

    let response = app_state
        .auth_service
        .login_user(&username, &password)
        .await?;

    Ok(Json(response))
}

// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Identity behind the session token", body = MeResponse),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid or expired token")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<MeResponse> {
    Json(MeResponse { user })
}
