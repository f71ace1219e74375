//! 用户数据模型

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => Err(anyhow::anyhow!("未知的用户角色: {}", other)),
        }
    }
}

/// 待保存的用户
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub nickname: String,
    pub role: Role,
}

impl NewUser {
    /// 创建管理员账号（`password_hash` 必须是已加密的密码）
    pub fn admin(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            nickname: nickname.into(),
            role: Role::Admin,
        }
    }
}

/// 已持久化的用户
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    /// 对外使用的用户 ID（UUID v4）
    pub user_id: String,
    pub username: String,
    pub password_hash: String,
    pub nickname: String,
    pub role: Role,
    /// 创建时间（RFC3339）
    pub created_at: String,
    /// 更新时间（RFC3339）
    pub updated_at: String,
}
