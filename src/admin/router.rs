//! Admin API 路由配置

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use super::{
    auth_handlers::login,
    handlers::{
        create_issue, delete_issues, get_coin_details, get_coin_list, get_issue_details,
        get_issue_list, set_coin_display, update_issue,
    },
    middleware::{AdminState, admin_auth_middleware},
};

/// 创建 Admin API 路由
///
/// # 端点
/// - `GET /coins` - 币种列表（keyword, page, size, sort）
/// - `GET /coins/{coinId}` - 币种详情
/// - `PATCH /coins/{coinId}/display` - 设置币种显示状态
/// - `GET /coins/{coinId}/issues` - 事件列表
/// - `POST /coins/{coinId}/issues` - 创建事件
/// - `GET /issues/{issueId}` - 事件详情
/// - `PUT /issues/{issueId}` - 修改事件
/// - `DELETE /issues` - 批量删除事件
///
/// # 认证
/// 需要 `Authorization: Bearer <token>`，且角色为 ADMIN
pub fn create_admin_router(state: AdminState) -> Router {
    Router::new()
        .route("/coins", get(get_coin_list))
        .route("/coins/{coin_id}", get(get_coin_details))
        .route("/coins/{coin_id}/display", patch(set_coin_display))
        .route(
            "/coins/{coin_id}/issues",
            get(get_issue_list).post(create_issue),
        )
        .route("/issues", delete(delete_issues))
        .route("/issues/{issue_id}", get(get_issue_details).put(update_issue))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ))
        .with_state(state)
}

/// 创建认证路由
///
/// - `POST /login` - 管理员登录
pub fn create_auth_router(state: AdminState) -> Router {
    Router::new()
        .route("/login", post(login))
        .with_state(state)
}
