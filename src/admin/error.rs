//! Admin 服务错误类型

use std::fmt;

use axum::http::StatusCode;

use super::types::AdminErrorResponse;
use crate::coin::CoinClientError;

/// Admin 服务错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminServiceError {
    /// 资源不存在（上游 404 或响应为空）
    NotFound(String),
    /// 请求无效（上游 400 或本地校验失败）
    BadRequest(String),
    /// 其他错误（上游 5xx、通信失败、意外错误）
    Internal(String),
    /// 缺少管理员身份或登录失败
    Unauthorized(String),
}

impl fmt::Display for AdminServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminServiceError::NotFound(msg)
            | AdminServiceError::BadRequest(msg)
            | AdminServiceError::Internal(msg)
            | AdminServiceError::Unauthorized(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for AdminServiceError {}

impl AdminServiceError {
    /// 按统一规则转换币种服务错误
    ///
    /// * `operation` - 操作名称，如 "事件修改"
    /// * `resource` - 资源描述，如 " (ID: 3)"，没有时传空串
    pub fn from_client(operation: &str, err: &CoinClientError, resource: &str) -> Self {
        match err.status() {
            Some(404) => AdminServiceError::NotFound(format!(
                "{}失败：币种服务中未找到请求的资源{}",
                operation, resource
            )),
            Some(400) => AdminServiceError::BadRequest(format!(
                "{}失败：请求无效或违反业务规则",
                operation
            )),
            Some(status) if status >= 500 => AdminServiceError::Internal(format!(
                "{}失败：币种服务内部错误 ({})",
                operation, status
            )),
            Some(status) => AdminServiceError::Internal(format!(
                "{}失败：币种服务返回错误 (状态码: {})",
                operation, status
            )),
            None => AdminServiceError::Internal(format!("{}时发生意外错误", operation)),
        }
    }

    /// HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            AdminServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AdminServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdminServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    /// 转换为错误响应体
    pub fn into_response(self) -> AdminErrorResponse {
        match self {
            AdminServiceError::NotFound(msg) => AdminErrorResponse::not_found(msg),
            AdminServiceError::BadRequest(msg) => AdminErrorResponse::invalid_request(msg),
            AdminServiceError::Internal(msg) => AdminErrorResponse::internal_error(msg),
            AdminServiceError::Unauthorized(msg) => {
                AdminErrorResponse::new("authentication_error", msg)
            }
        }
    }
}
