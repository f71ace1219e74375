//! 币种服务客户端
//!
//! Input: reqwest::Client、币种服务地址
//! Output: 类型化的币种/事件接口调用
//! Pos: 管理后台与币种服务之间的唯一出口，每个方法只发起一次 HTTP 调用

use std::future::Future;

use reqwest::{Client, RequestBuilder, Response, header::LOCATION};
use serde::de::DeserializeOwned;

use super::error::CoinClientError;
use super::types::{
    CoinDetail, CoinListItem, IssueCreateRequest, IssueDetail, IssueListItem, IssueUpdateRequest,
};
use crate::model::page::PagedResult;

/// 传递管理员 ID 的请求头
pub const ADMIN_USER_ID_HEADER: &str = "X-Admin-User-Id";

/// 币种服务接口
///
/// 每个方法对应币种服务的一个 REST 端点
pub trait CoinServiceApi: Send + Sync {
    /// GET /api/v1/coins
    fn get_coin_list(
        &self,
        keyword: Option<&str>,
        page: u32,
        size: u32,
        sort: Option<&str>,
    ) -> impl Future<Output = Result<PagedResult<CoinListItem>, CoinClientError>> + Send;

    /// GET /api/v1/coins/{coinId}
    ///
    /// 响应体为空时返回 `None`
    fn get_coin_details(
        &self,
        coin_id: u64,
    ) -> impl Future<Output = Result<Option<CoinDetail>, CoinClientError>> + Send;

    /// PATCH /api/v1/coins/{coinId}/display
    fn toggle_coin_display(
        &self,
        coin_id: u64,
        is_displayed: bool,
    ) -> impl Future<Output = Result<(), CoinClientError>> + Send;

    /// GET /api/v1/admin/coins/{coinId}/issues
    fn get_issue_list(
        &self,
        coin_id: u64,
        page: u32,
        size: u32,
    ) -> impl Future<Output = Result<PagedResult<IssueListItem>, CoinClientError>> + Send;

    /// POST /api/v1/admin/coins/{coinId}/issues
    ///
    /// 返回上游的 Location 响应头（如果有）
    fn create_issue(
        &self,
        coin_id: u64,
        request: &IssueCreateRequest,
        admin_user_id: &str,
    ) -> impl Future<Output = Result<Option<String>, CoinClientError>> + Send;

    /// GET /api/v1/admin/issues/{issueId}
    fn get_issue_details(
        &self,
        issue_id: u64,
    ) -> impl Future<Output = Result<Option<IssueDetail>, CoinClientError>> + Send;

    /// PUT /api/v1/admin/issues/{issueId}
    fn update_issue(
        &self,
        issue_id: u64,
        request: &IssueUpdateRequest,
    ) -> impl Future<Output = Result<(), CoinClientError>> + Send;

    /// DELETE /api/v1/admin/issues?ids=..
    fn delete_issues(
        &self,
        ids: &[u64],
    ) -> impl Future<Output = Result<(), CoinClientError>> + Send;
}

/// 基于 reqwest 的币种服务客户端
#[derive(Clone)]
pub struct CoinServiceClient {
    client: Client,
    base_url: String,
}

impl CoinServiceClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 发送请求，非 2xx 状态码转换为 `CoinClientError::Status`
    async fn send(&self, request: RequestBuilder) -> Result<Response, CoinClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!("币种服务返回 {}: {}", status, body);
        Err(CoinClientError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// 读取 JSON 响应体，空响应体或 `null` 返回 `None`
    async fn read_json<T: DeserializeOwned>(
        response: Response,
    ) -> Result<Option<T>, CoinClientError> {
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice::<Option<T>>(&bytes)
            .map_err(|e| CoinClientError::Decode(e.to_string()))
    }
}

impl CoinServiceApi for CoinServiceClient {
    async fn get_coin_list(
        &self,
        keyword: Option<&str>,
        page: u32,
        size: u32,
        sort: Option<&str>,
    ) -> Result<PagedResult<CoinListItem>, CoinClientError> {
        let mut query: Vec<(&str, String)> = Vec::with_capacity(4);
        if let Some(keyword) = keyword {
            query.push(("keyword", keyword.to_string()));
        }
        query.push(("page", page.to_string()));
        query.push(("size", size.to_string()));
        if let Some(sort) = sort {
            query.push(("sort", sort.to_string()));
        }

        let response = self
            .send(self.client.get(self.url("/api/v1/coins")).query(&query))
            .await?;
        Ok(Self::read_json(response).await?.unwrap_or_default())
    }

    async fn get_coin_details(&self, coin_id: u64) -> Result<Option<CoinDetail>, CoinClientError> {
        let url = self.url(&format!("/api/v1/coins/{}", coin_id));
        let response = self.send(self.client.get(url)).await?;
        Self::read_json(response).await
    }

    async fn toggle_coin_display(
        &self,
        coin_id: u64,
        is_displayed: bool,
    ) -> Result<(), CoinClientError> {
        let url = self.url(&format!("/api/v1/coins/{}/display", coin_id));
        self.send(
            self.client
                .patch(url)
                .query(&[("isDisplayed", is_displayed)]),
        )
        .await?;
        Ok(())
    }

    async fn get_issue_list(
        &self,
        coin_id: u64,
        page: u32,
        size: u32,
    ) -> Result<PagedResult<IssueListItem>, CoinClientError> {
        let url = self.url(&format!("/api/v1/admin/coins/{}/issues", coin_id));
        let response = self
            .send(self.client.get(url).query(&[("page", page), ("size", size)]))
            .await?;
        Ok(Self::read_json(response).await?.unwrap_or_default())
    }

    async fn create_issue(
        &self,
        coin_id: u64,
        request: &IssueCreateRequest,
        admin_user_id: &str,
    ) -> Result<Option<String>, CoinClientError> {
        let url = self.url(&format!("/api/v1/admin/coins/{}/issues", coin_id));
        let response = self
            .send(
                self.client
                    .post(url)
                    .header(ADMIN_USER_ID_HEADER, admin_user_id)
                    .json(request),
            )
            .await?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        Ok(location)
    }

    async fn get_issue_details(
        &self,
        issue_id: u64,
    ) -> Result<Option<IssueDetail>, CoinClientError> {
        let url = self.url(&format!("/api/v1/admin/issues/{}", issue_id));
        let response = self.send(self.client.get(url)).await?;
        Self::read_json(response).await
    }

    async fn update_issue(
        &self,
        issue_id: u64,
        request: &IssueUpdateRequest,
    ) -> Result<(), CoinClientError> {
        let url = self.url(&format!("/api/v1/admin/issues/{}", issue_id));
        self.send(self.client.put(url).json(request)).await?;
        Ok(())
    }

    async fn delete_issues(&self, ids: &[u64]) -> Result<(), CoinClientError> {
        let query: Vec<(&str, u64)> = ids.iter().map(|id| ("ids", *id)).collect();
        self.send(
            self.client
                .delete(self.url("/api/v1/admin/issues"))
                .query(&query),
        )
        .await?;
        Ok(())
    }
}
