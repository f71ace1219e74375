//! 附件静态文件服务
//!
//! 把附件目录映射到 `/attach/files/**`

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

/// 附件路由挂载路径
pub const ATTACH_ROUTE: &str = "/attach/files";

/// 创建附件路由，目录不存在时先创建
pub fn create_attach_router(attach_dir: &str) -> anyhow::Result<Router> {
    let dir = Path::new(attach_dir);
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
        tracing::info!("已创建附件目录: {}", dir.display());
    }
    Ok(Router::new().nest_service(ATTACH_ROUTE, ServeDir::new(dir)))
}
