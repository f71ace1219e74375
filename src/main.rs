mod admin;
mod attach;
mod coin;
mod common;
mod http_client;
mod init;
mod model;
mod user;

use std::time::Duration;

use axum::Router;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::admin::AdminState;
use crate::coin::CoinServiceClient;
use crate::model::arg::Args;
use crate::model::config::Config;
use crate::user::UserRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ENV_ACTIVE=NO 时不加载 .env；必须在初始化日志之前加载
    let dotenv_result = if std::env::var("ENV_ACTIVE").map(|v| v != "NO").unwrap_or(true) {
        Some(dotenvy::dotenv())
    } else {
        None
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match dotenv_result {
        Some(Ok(path)) => tracing::info!("已加载环境变量文件: {}", path.display()),
        Some(Err(e)) if !e.not_found() => tracing::warn!("加载 .env 失败: {}", e),
        _ => {}
    }

    let args = Args::parse();

    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let mut config = Config::load(&config_path)?;
    config.apply_env_overrides(|key| std::env::var(key).ok());
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.validate()?;
    tracing::info!("已加载配置: {}", config_path);

    // 用户存储和管理员初始化
    let users = UserRepository::open(&config.db_path)?;
    init::seed_admin_user(
        &users,
        &config.admin_username,
        &config.admin_password,
        &config.admin_nickname,
    )
    .await?;
    tracing::info!("用户数据库: {} (共 {} 个用户)", config.db_path, users.count().await?);

    // 币种服务客户端
    let http = http_client::build_client(
        config.proxy_url.as_deref(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let coin_client = CoinServiceClient::new(http, config.coin_service_url.clone());
    tracing::info!("币种服务地址: {}", coin_client.base_url());

    let state = AdminState::new(config.jwt_secret.clone(), users, coin_client);

    let app = Router::new()
        .nest("/api/admin", admin::create_admin_router(state.clone()))
        .nest("/api/auth", admin::create_auth_router(state))
        .merge(attach::create_attach_router(&config.attach_dir)?)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("启动 Cryptory 管理后台: http://{}", addr);
    tracing::info!("可用 API:");
    tracing::info!("  POST   /api/auth/login");
    tracing::info!("  GET    /api/admin/coins");
    tracing::info!("  GET    /api/admin/coins/{{coinId}}");
    tracing::info!("  PATCH  /api/admin/coins/{{coinId}}/display");
    tracing::info!("  GET    /api/admin/coins/{{coinId}}/issues");
    tracing::info!("  POST   /api/admin/coins/{{coinId}}/issues");
    tracing::info!("  GET    /api/admin/issues/{{issueId}}");
    tracing::info!("  PUT    /api/admin/issues/{{issueId}}");
    tracing::info!("  DELETE /api/admin/issues");
    tracing::info!("  GET    {}/**", attach::ATTACH_ROUTE);

    axum::serve(listener, app).await?;
    Ok(())
}
