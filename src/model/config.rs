use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 管理后台配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// 币种服务地址
    #[serde(default = "default_coin_service_url")]
    pub coin_service_url: String,

    /// 调用币种服务的超时时间（秒）
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// HTTP 代理地址（可选）
    /// 支持格式: http://host:port, socks5://host:port
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// JWT 签名密钥（必填）
    #[serde(default)]
    pub jwt_secret: String,

    /// SQLite 数据库路径
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// 附件目录，对外映射为 /attach/files/**
    #[serde(default = "default_attach_dir")]
    pub attach_dir: String,

    /// 启动时初始化的管理员账号
    #[serde(default = "default_admin_username")]
    pub admin_username: String,

    #[serde(default = "default_admin_password")]
    pub admin_password: String,

    #[serde(default = "default_admin_nickname")]
    pub admin_nickname: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_coin_service_url() -> String {
    "http://127.0.0.1:8081".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_db_path() -> String {
    "cryptory-admin.db".to_string()
}

fn default_attach_dir() -> String {
    "attach".to_string()
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "1234".to_string()
}

fn default_admin_nickname() -> String {
    "관리자".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            coin_service_url: default_coin_service_url(),
            request_timeout_secs: default_request_timeout_secs(),
            proxy_url: None,
            jwt_secret: String::new(),
            db_path: default_db_path(),
            attach_dir: default_attach_dir(),
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
            admin_nickname: default_admin_nickname(),
        }
    }
}

/// 可由环境变量覆盖的配置项
const ENV_OVERRIDES: &[&str] = &[
    "COIN_SERVICE_URL",
    "JWT_SECRET",
    "DB_PATH",
    "ATTACH_DIR",
    "ADMIN_PASSWORD",
];

impl Config {
    /// 获取默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            // 配置文件不存在，返回默认配置
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 使用环境变量覆盖配置
    ///
    /// `lookup` 通常为 `|k| std::env::var(k).ok()`，空值会被忽略
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in ENV_OVERRIDES {
            let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            match *key {
                "COIN_SERVICE_URL" => self.coin_service_url = value,
                "JWT_SECRET" => self.jwt_secret = value,
                "DB_PATH" => self.db_path = value,
                "ATTACH_DIR" => self.attach_dir = value,
                "ADMIN_PASSWORD" => self.admin_password = value,
                _ => {}
            }
        }
    }

    /// 启动前校验
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.jwt_secret.trim().is_empty() {
            anyhow::bail!("jwtSecret 未配置（可通过配置文件或 JWT_SECRET 环境变量设置）");
        }
        if self.coin_service_url.trim().is_empty() {
            anyhow::bail!("coinServiceUrl 不能为空");
        }
        Ok(())
    }
}
