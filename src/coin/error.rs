//! 币种服务调用错误

use std::fmt;

/// 调用币种服务失败
#[derive(Debug)]
pub enum CoinClientError {
    /// 上游返回非 2xx 状态码
    Status { status: u16, body: String },
    /// 连接失败、超时或请求构建失败
    Transport(String),
    /// 响应体解析失败
    Decode(String),
}

impl CoinClientError {
    /// 上游 HTTP 状态码（仅 `Status` 变体有值）
    pub fn status(&self) -> Option<u16> {
        match self {
            CoinClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for CoinClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinClientError::Status { status, body } if body.is_empty() => {
                write!(f, "币种服务返回错误状态码 {}", status)
            }
            CoinClientError::Status { status, body } => {
                write!(f, "币种服务返回错误状态码 {}: {}", status, body)
            }
            CoinClientError::Transport(msg) => write!(f, "币种服务通信失败: {}", msg),
            CoinClientError::Decode(msg) => write!(f, "币种服务响应解析失败: {}", msg),
        }
    }
}

impl std::error::Error for CoinClientError {}

impl From<reqwest::Error> for CoinClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CoinClientError::Decode(e.to_string())
        } else {
            CoinClientError::Transport(e.to_string())
        }
    }
}
