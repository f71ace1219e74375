//! Admin API 中间件

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use super::coin_service::AdminCoinService;
use super::issue_service::AdminIssueService;
use super::jwt;
use super::types::AdminErrorResponse;
use crate::coin::CoinServiceClient;
use crate::common::auth;
use crate::user::{Role, UserRepository};

/// Admin API 共享状态
#[derive(Clone)]
pub struct AdminState {
    /// JWT 签名密钥
    pub jwt_secret: String,
    /// 用户仓库（登录用）
    pub users: UserRepository,
    /// 币种管理服务
    pub coin_service: Arc<AdminCoinService<CoinServiceClient>>,
    /// 事件管理服务
    pub issue_service: Arc<AdminIssueService<CoinServiceClient>>,
}

impl AdminState {
    pub fn new(
        jwt_secret: impl Into<String>,
        users: UserRepository,
        client: CoinServiceClient,
    ) -> Self {
        let client = Arc::new(client);
        Self {
            jwt_secret: jwt_secret.into(),
            users,
            coin_service: Arc::new(AdminCoinService::new(client.clone())),
            issue_service: Arc::new(AdminIssueService::new(client)),
        }
    }
}

/// Admin API 认证中间件
///
/// 验证通过后把 `Claims` 注入请求扩展
pub async fn admin_auth_middleware(
    State(state): State<AdminState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = auth::extract_bearer_token(&request) else {
        let error = AdminErrorResponse::new("authentication_error", "Missing authorization token");
        return (StatusCode::UNAUTHORIZED, Json(error)).into_response();
    };

    match jwt::verify_token(&token, &state.jwt_secret) {
        Ok(claims) if claims.role == Role::Admin => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Ok(claims) => {
            tracing::warn!("非管理员用户访问 Admin API: {}", claims.username);
            let error = AdminErrorResponse::new("authentication_error", "Admin role required");
            (StatusCode::UNAUTHORIZED, Json(error)).into_response()
        }
        Err(_) => {
            let error = AdminErrorResponse::authentication_error();
            (StatusCode::UNAUTHORIZED, Json(error)).into_response()
        }
    }
}
