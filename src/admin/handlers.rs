//! Admin API HTTP 处理器

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::{
    error::AdminServiceError,
    jwt::Claims,
    middleware::AdminState,
    types::{
        CoinListQuery, CreateIssueResponse, DeleteIssuesRequest, IssueListQuery,
        SetDisplayRequest, SuccessResponse,
    },
};
use crate::coin::types::{IssueCreateRequest, IssueUpdateRequest};

/// 当前认证的管理员 ID
fn current_admin_user_id(claims: Option<&Claims>) -> Result<String, AdminServiceError> {
    claims
        .map(|c| c.sub.clone())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AdminServiceError::Unauthorized("未找到管理员认证信息".to_string()))
}

/// GET /api/admin/coins
/// 获取币种列表
pub async fn get_coin_list(
    State(state): State<AdminState>,
    Query(query): Query<CoinListQuery>,
) -> impl IntoResponse {
    match state
        .coin_service
        .get_coin_list(
            query.keyword.as_deref(),
            query.page,
            query.size,
            query.sort.as_deref(),
        )
        .await
    {
        Ok(page) => Json(page).into_response(),
        Err(e) => (e.status_code(), Json(e.into_response())).into_response(),
    }
}

/// GET /api/admin/coins/:coinId
/// 获取币种详情
pub async fn get_coin_details(
    State(state): State<AdminState>,
    Path(coin_id): Path<u64>,
) -> impl IntoResponse {
    match state.coin_service.get_coin_details(coin_id).await {
        Ok(detail) => Json(detail).into_response(),
        Err(e) => (e.status_code(), Json(e.into_response())).into_response(),
    }
}

/// PATCH /api/admin/coins/:coinId/display
/// 设置币种显示状态
pub async fn set_coin_display(
    State(state): State<AdminState>,
    Path(coin_id): Path<u64>,
    Json(payload): Json<SetDisplayRequest>,
) -> impl IntoResponse {
    match state
        .coin_service
        .update_display_setting(coin_id, payload.is_displayed)
        .await
    {
        Ok(_) => {
            let action = if payload.is_displayed { "显示" } else { "隐藏" };
            Json(SuccessResponse::new(format!("币种 #{} 已设置为{}", coin_id, action)))
                .into_response()
        }
        Err(e) => (e.status_code(), Json(e.into_response())).into_response(),
    }
}

/// GET /api/admin/coins/:coinId/issues
/// 获取币种的事件列表
pub async fn get_issue_list(
    State(state): State<AdminState>,
    Path(coin_id): Path<u64>,
    Query(query): Query<IssueListQuery>,
) -> impl IntoResponse {
    match state
        .issue_service
        .get_issue_list(coin_id, query.page, query.size)
        .await
    {
        Ok(items) => Json(items).into_response(),
        Err(e) => (e.status_code(), Json(e.into_response())).into_response(),
    }
}

/// POST /api/admin/coins/:coinId/issues
/// 创建事件
pub async fn create_issue(
    State(state): State<AdminState>,
    claims: Option<Extension<Claims>>,
    Path(coin_id): Path<u64>,
    Json(payload): Json<IssueCreateRequest>,
) -> impl IntoResponse {
    let admin_user_id = match current_admin_user_id(claims.as_ref().map(|c| &c.0)) {
        Ok(id) => id,
        Err(e) => return (e.status_code(), Json(e.into_response())).into_response(),
    };

    match state
        .issue_service
        .create_issue(coin_id, &payload, &admin_user_id)
        .await
    {
        Ok(issue_id) => (
            StatusCode::CREATED,
            Json(CreateIssueResponse {
                success: true,
                message: format!("币种 #{} 的事件已创建", coin_id),
                issue_id,
            }),
        )
            .into_response(),
        Err(e) => (e.status_code(), Json(e.into_response())).into_response(),
    }
}

/// GET /api/admin/issues/:issueId
/// 获取事件详情
pub async fn get_issue_details(
    State(state): State<AdminState>,
    Path(issue_id): Path<u64>,
) -> impl IntoResponse {
    match state.issue_service.get_issue_details(issue_id).await {
        Ok(detail) => Json(detail).into_response(),
        Err(e) => (e.status_code(), Json(e.into_response())).into_response(),
    }
}

/// PUT /api/admin/issues/:issueId
/// 修改事件
pub async fn update_issue(
    State(state): State<AdminState>,
    Path(issue_id): Path<u64>,
    Json(payload): Json<IssueUpdateRequest>,
) -> impl IntoResponse {
    match state.issue_service.update_issue(issue_id, &payload).await {
        Ok(_) => Json(SuccessResponse::new(format!("事件 #{} 已修改", issue_id))).into_response(),
        Err(e) => (e.status_code(), Json(e.into_response())).into_response(),
    }
}

/// DELETE /api/admin/issues
/// 批量删除事件
pub async fn delete_issues(
    State(state): State<AdminState>,
    Json(payload): Json<DeleteIssuesRequest>,
) -> impl IntoResponse {
    match state.issue_service.delete_issues(&payload.ids).await {
        Ok(_) => Json(SuccessResponse::new(format!(
            "已删除 {} 个事件",
            payload.ids.len()
        )))
        .into_response(),
        Err(e) => (e.status_code(), Json(e.into_response())).into_response(),
    }
}
