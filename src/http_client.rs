//! 币种服务共享 HTTP 客户端
//!
//! 整个进程只构建一次，连接池在所有管理请求之间复用

use std::time::Duration;

use reqwest::{Client, Proxy};

/// 连接阶段的超时上限
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// 构建访问币种服务的客户端
///
/// `timeout` 作用于整个请求；`proxy_url` 为空白时视为未配置
pub fn build_client(proxy_url: Option<&str>, timeout: Duration) -> anyhow::Result<Client> {
    let mut builder = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(MAX_CONNECT_TIMEOUT));

    if let Some(url) = proxy_url.map(str::trim).filter(|u| !u.is_empty()) {
        builder = builder.proxy(Proxy::all(url)?);
        tracing::info!("币种服务请求经由代理: {}", url);
    }

    Ok(builder.build()?)
}
