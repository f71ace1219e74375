//! Admin 认证相关处理器

use axum::{extract::State, http::StatusCode, response::Json};

use super::{
    jwt,
    middleware::AdminState,
    types::{AdminErrorResponse, AdminLoginResponse, LoginRequest, LoginResponse},
};
use crate::user::Role;

type AuthError = (StatusCode, Json<AdminErrorResponse>);

fn invalid_credentials() -> AuthError {
    (
        StatusCode::UNAUTHORIZED,
        Json(AdminErrorResponse::new(
            "invalid_credentials",
            "Invalid credentials",
        )),
    )
}

fn internal(message: String) -> AuthError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(AdminErrorResponse::internal_error(message)),
    )
}

/// POST /api/auth/login
///
/// 验证用户名和密码，返回 JWT Token（仅限管理员）
pub async fn login(
    State(state): State<AdminState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let user = state
        .users
        .find_by_username(&payload.username)
        .await
        .map_err(|e| {
            tracing::error!("查询用户失败: {}", e);
            internal(format!("Failed to load user: {}", e))
        })?
        .ok_or_else(invalid_credentials)?;

    let hash = user.password_hash.clone();
    let password = payload.password;
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| internal(format!("Failed to verify password: {}", e)))?
        .unwrap_or(false);

    if !verified || user.role != Role::Admin {
        tracing::warn!("管理员登录失败: {}", payload.username);
        return Err(invalid_credentials());
    }

    let (token, expires_in) = jwt::generate_token(&user, &state.jwt_secret)
        .map_err(|e| internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!("管理员登录成功: {}", user.username);
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        expires_in,
        user: AdminLoginResponse {
            id: user.id,
            username: user.username,
            nickname: user.nickname,
        },
    }))
}
