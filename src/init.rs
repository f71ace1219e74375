//! 启动时初始化数据

use anyhow::Context;

use crate::user::{NewUser, User, UserRepository};

/// 初始化管理员账号
///
/// 用户名已存在时跳过，返回 `None`
pub async fn seed_admin_user(
    repo: &UserRepository,
    username: &str,
    password: &str,
    nickname: &str,
) -> anyhow::Result<Option<User>> {
    if let Some(existing) = repo.find_by_username(username).await? {
        tracing::info!(
            "管理员账号已存在，跳过初始化: {} (创建于 {}, 更新于 {})",
            existing.username,
            existing.created_at,
            existing.updated_at
        );
        return Ok(None);
    }

    let password = password.to_string();
    let password_hash = tokio::task::spawn_blocking(move || {
        bcrypt::hash(password, bcrypt::DEFAULT_COST)
    })
    .await?
    .context("管理员密码加密失败")?;

    let admin = repo
        .save(NewUser::admin(username, password_hash, nickname))
        .await
        .context("保存管理员账号失败")?;
    tracing::info!(
        "已初始化管理员账号: {} (userId: {}, 创建于 {})",
        admin.username,
        admin.user_id,
        admin.created_at
    );
    Ok(Some(admin))
}
