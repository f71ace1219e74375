//! Admin 模块
//!
//! Input: CoinServiceClient, UserRepository, JWT
//! Output: Admin API 路由和服务
//! Pos: 管理后台 API 层，所有币种/事件操作转发到币种服务
//!
//! # 功能
//! - 管理员登录
//! - 币种列表/详情查询、显示状态设置
//! - 事件（Issue）列表/详情/创建/修改/批量删除

mod auth_handlers;
pub mod coin_service;
pub mod error;
mod handlers;
pub mod issue_service;
pub mod jwt;
mod middleware;
mod router;
pub mod types;

#[cfg(test)]
mod test_support;

pub use middleware::AdminState;
pub use router::{create_admin_router, create_auth_router};
