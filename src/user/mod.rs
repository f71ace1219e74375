//! 用户模块
//!
//! 管理后台只保存登录所需的账号信息

pub mod model;
pub mod store;

pub use model::{NewUser, Role, User};
pub use store::UserRepository;
