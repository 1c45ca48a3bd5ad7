// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{AuthResponse, Claims, PublicUser},
};

/// Session lifetime.
pub const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            jwt_secret,
            bcrypt_cost,
        }
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn login_user(&self, username: &str, password: &str) -> Result<AuthResponse, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // bcrypt is deliberately slow; keep it off the async workers.
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Password verification task failed: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let public_user = PublicUser::from(&user);
        let token = self.create_token(&public_user)?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok(AuthResponse {
            success: true,
            user: public_user,
            token,
        })
    }

    /// Checks signature and expiry and returns the identity embedded in the token.
    pub fn validate_token(&self, token: &str) -> Result<PublicUser, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(PublicUser {
            id: token_data.claims.id,
            username: token_data.claims.username,
        })
    }

    pub async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password_clone = password.to_owned();
        let cost = self.bcrypt_cost;
        let hashed = tokio::task::spawn_blocking(move || hash(&password_clone, cost))
            .await
            .map_err(|e| anyhow::anyhow!("Password hashing task failed: {}", e))??;
        Ok(hashed)
    }

    fn create_token(&self, user: &PublicUser) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(TOKEN_TTL_HOURS);

        let claims = Claims {
            id: user.id,
            username: user.username.clone(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
