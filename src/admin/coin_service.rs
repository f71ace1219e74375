//! 币种管理服务
//!
//! 转发到币种服务，并把分页元数据和上游错误转换为本地结果

use std::sync::Arc;

use super::error::AdminServiceError;
use crate::coin::types::{CoinDetail, CoinListItem};
use crate::coin::{CoinClientError, CoinServiceApi};
use crate::model::page::Page;

/// 币种管理服务
pub struct AdminCoinService<C> {
    client: Arc<C>,
}

impl<C: CoinServiceApi> AdminCoinService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// 获取币种列表
    pub async fn get_coin_list(
        &self,
        keyword: Option<&str>,
        page: u32,
        size: u32,
        sort: Option<&str>,
    ) -> Result<Page<CoinListItem>, AdminServiceError> {
        if size == 0 {
            return Err(AdminServiceError::BadRequest(
                "页大小必须大于等于 1".to_string(),
            ));
        }

        tracing::info!(
            "币种列表查询 (keyword: {:?}, page: {}, size: {}, sort: {:?})",
            keyword,
            page,
            size,
            sort
        );

        let paged = self
            .client
            .get_coin_list(keyword, page, size, sort)
            .await
            .map_err(|e| {
                tracing::error!("币种列表查询时币种服务通信失败: status={:?}, {}", e.status(), e);
                coin_list_error(&e)
            })?;

        let Some(content) = paged.content else {
            tracing::warn!("币种服务返回了异常的分页结果，返回空页");
            return Ok(Page::empty(page, size));
        };

        let result = Page::new(content, paged.number, paged.size, paged.total_elements)
            .map_err(|e| {
                tracing::error!("币种列表查询时发生意外错误: {}", e);
                AdminServiceError::Internal("币种列表查询时发生意外错误".to_string())
            })?;

        tracing::info!("币种列表查询成功，共 {} 条", result.total_elements);
        Ok(result)
    }

    /// 获取币种详情
    pub async fn get_coin_details(&self, coin_id: u64) -> Result<CoinDetail, AdminServiceError> {
        tracing::info!("币种详情查询 (coinId: {})", coin_id);

        match self.client.get_coin_details(coin_id).await {
            Ok(Some(detail)) => {
                tracing::info!("币种详情查询成功 (coinId: {})", coin_id);
                Ok(detail)
            }
            Ok(None) => {
                tracing::error!("币种服务返回空的币种详情 (coinId: {})", coin_id);
                Err(AdminServiceError::Internal(
                    "币种详情查询时发生意外错误".to_string(),
                ))
            }
            Err(e) if e.status() == Some(404) => {
                tracing::warn!("币种详情查询失败 (404 - Not Found): coinId={}", coin_id);
                Err(AdminServiceError::NotFound(format!(
                    "未找到币种详情 (ID: {})",
                    coin_id
                )))
            }
            Err(e) => {
                tracing::error!(
                    "币种详情查询时币种服务通信失败: status={:?}, coinId={}, {}",
                    e.status(),
                    coin_id,
                    e
                );
                Err(AdminServiceError::from_client(
                    "币种详情查询",
                    &e,
                    &format!(" (ID: {})", coin_id),
                ))
            }
        }
    }

    /// 设置币种显示状态
    pub async fn update_display_setting(
        &self,
        coin_id: u64,
        is_displayed: bool,
    ) -> Result<(), AdminServiceError> {
        tracing::info!(
            "币种显示状态修改 (coinId: {}, isDisplayed: {})",
            coin_id,
            is_displayed
        );

        self.client
            .toggle_coin_display(coin_id, is_displayed)
            .await
            .map_err(|e| {
                tracing::error!(
                    "币种显示状态修改失败: status={:?}, coinId={}, {}",
                    e.status(),
                    coin_id,
                    e
                );
                match e.status() {
                    Some(404) => AdminServiceError::NotFound(format!(
                        "币种服务中未找到该币种 (ID: {})",
                        coin_id
                    )),
                    Some(400) => AdminServiceError::BadRequest(
                        "超出币种显示数量限制或请求无效".to_string(),
                    ),
                    _ => AdminServiceError::from_client(
                        "币种显示状态修改",
                        &e,
                        &format!(" (ID: {})", coin_id),
                    ),
                }
            })?;

        tracing::info!("币种显示状态修改成功 (coinId: {})", coin_id);
        Ok(())
    }
}

/// 列表查询只区分通信失败和意外错误，消息中附带上游状态码
fn coin_list_error(e: &CoinClientError) -> AdminServiceError {
    match e.status() {
        Some(status) => AdminServiceError::Internal(format!(
            "获取币种列表时与币种服务通信失败 (错误码: {})",
            status
        )),
        None => AdminServiceError::Internal("币种列表查询时发生意外错误".to_string()),
    }
}
