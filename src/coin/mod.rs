//! 币种服务远程调用模块
//!
//! 管理后台本身不持有币种数据，所有币种/事件操作都转发到币种服务

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
pub mod test_support;

pub use client::{CoinServiceApi, CoinServiceClient};
pub use error::CoinClientError;
