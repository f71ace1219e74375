//! 用户存储
//!
//! SQLite 同步存储 + 基于 spawn_blocking 的异步封装

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, Row};

use super::model::{NewUser, User};

/// 底层 SQLite 存储（同步）
struct UserStore {
    conn: Mutex<Connection>,
}

impl UserStore {
    fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL UNIQUE,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                nickname TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT 'USER',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn save(&self, user: &NewUser) -> Result<User> {
        let conn = self.conn.lock();
        let user_id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO users (user_id, username, password_hash, nickname, role, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            rusqlite::params![
                user_id,
                user.username,
                user.password_hash,
                user.nickname,
                user.role.as_str(),
                now,
            ],
        )?;

        Ok(User {
            id: conn.last_insert_rowid(),
            user_id,
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            nickname: user.nickname.clone(),
            role: user.role,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.conn.lock();
        let raw = conn
            .query_row(
                "SELECT id, user_id, username, password_hash, nickname, role, created_at, updated_at
                 FROM users WHERE username = ?1",
                [username],
                RawUser::from_row,
            )
            .optional()?;
        raw.map(RawUser::into_user).transpose()
    }

    fn count(&self) -> Result<u64> {
        let conn = self.conn.lock();
        let count: u64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// 角色尚未解析的数据库行
struct RawUser {
    id: i64,
    user_id: String,
    username: String,
    password_hash: String,
    nickname: String,
    role: String,
    created_at: String,
    updated_at: String,
}

impl RawUser {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            username: row.get(2)?,
            password_hash: row.get(3)?,
            nickname: row.get(4)?,
            role: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }

    fn into_user(self) -> Result<User> {
        Ok(User {
            id: self.id,
            user_id: self.user_id,
            username: self.username,
            password_hash: self.password_hash,
            nickname: self.nickname,
            role: self.role.parse()?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// 异步用户仓库（公开 API）
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<UserStore>,
}

impl UserRepository {
    /// 打开（或创建）数据库，`":memory:"` 使用内存数据库
    pub fn open(db_path: &str) -> Result<Self> {
        Ok(Self {
            store: Arc::new(UserStore::new(db_path)?),
        })
    }

    /// 保存新用户
    pub async fn save(&self, user: NewUser) -> Result<User> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.save(&user)).await?
    }

    /// 按用户名查询
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let store = self.store.clone();
        let username = username.to_string();
        tokio::task::spawn_blocking(move || store.find_by_username(&username)).await?
    }

    /// 用户总数
    pub async fn count(&self) -> Result<u64> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.count()).await?
    }
}
