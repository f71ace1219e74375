//! JWT Token 管理模块
//!
//! 提供管理员 Token 的生成和验证功能

use anyhow::{Result, anyhow};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::user::{Role, User};

/// JWT Claims 结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject（用户 UUID）
    pub sub: String,
    pub username: String,
    pub role: Role,
    /// 签发时间 (Unix timestamp)
    pub iat: usize,
    /// 过期时间 (Unix timestamp)
    pub exp: usize,
}

/// JWT Token 默认有效期（7 天）
pub const TOKEN_EXPIRY_SECONDS: u64 = 7 * 24 * 60 * 60;

/// 从 jwtSecret 派生 HMAC 密钥
fn derive_secret_key(jwt_secret: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(jwt_secret.as_bytes());
    hasher.finalize().to_vec()
}

/// 为用户生成 JWT Token
///
/// # Returns
/// * `Ok((token, expires_in))` - JWT Token 字符串和过期秒数
pub fn generate_token(user: &User, jwt_secret: &str) -> Result<(String, u64)> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();

    let claims = Claims {
        sub: user.user_id.clone(),
        username: user.username.clone(),
        role: user.role,
        iat: now as usize,
        exp: (now + TOKEN_EXPIRY_SECONDS) as usize,
    };

    let secret = derive_secret_key(jwt_secret);
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(&secret),
    )?;

    Ok((token, TOKEN_EXPIRY_SECONDS))
}

/// 验证 JWT Token
///
/// # Returns
/// * `Ok(Claims)` - 验证成功
/// * `Err(_)` - 验证失败（过期、签名错误等）
pub fn verify_token(token: &str, jwt_secret: &str) -> Result<Claims> {
    let secret = derive_secret_key(jwt_secret);
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&secret),
        &Validation::default(),
    )
    .map_err(|e| anyhow!("Invalid token: {}", e))?;

    Ok(token_data.claims)
}
