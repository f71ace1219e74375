//! 事件（Issue）管理服务

use std::sync::Arc;

use super::error::AdminServiceError;
use crate::coin::CoinServiceApi;
use crate::coin::types::{IssueCreateRequest, IssueDetail, IssueListItem, IssueUpdateRequest};

/// 事件管理服务
pub struct AdminIssueService<C> {
    client: Arc<C>,
}

impl<C: CoinServiceApi> AdminIssueService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// 获取币种的事件列表（仅返回当前页内容）
    pub async fn get_issue_list(
        &self,
        coin_id: u64,
        page: u32,
        size: u32,
    ) -> Result<Vec<IssueListItem>, AdminServiceError> {
        tracing::info!(
            "事件列表查询 (coinId: {}, page: {}, size: {})",
            coin_id,
            page,
            size
        );

        let result = self
            .client
            .get_issue_list(coin_id, page, size)
            .await
            .map_err(|e| {
                tracing::error!(
                    "事件列表查询时币种服务通信失败: status={:?}, coinId={}, {}",
                    e.status(),
                    coin_id,
                    e
                );
                AdminServiceError::from_client("事件列表查询", &e, "")
            })?;

        tracing::info!("事件列表查询成功 (coinId: {})", coin_id);
        Ok(result.content.unwrap_or_default())
    }

    /// 创建事件
    ///
    /// 返回从上游 Location 头解析出的事件 ID
    pub async fn create_issue(
        &self,
        coin_id: u64,
        request: &IssueCreateRequest,
        admin_user_id: &str,
    ) -> Result<Option<u64>, AdminServiceError> {
        request
            .validate()
            .map_err(|msg| AdminServiceError::BadRequest(format!("事件创建失败：{}", msg)))?;

        tracing::info!(
            "事件创建 (coinId: {}, adminUserId: {})",
            coin_id,
            admin_user_id
        );

        let location = self
            .client
            .create_issue(coin_id, request, admin_user_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    "事件创建时币种服务通信失败: status={:?}, coinId={}, {}",
                    e.status(),
                    coin_id,
                    e
                );
                AdminServiceError::from_client("事件创建", &e, "")
            })?;

        let issue_id = location.as_deref().and_then(parse_id_from_location);
        if location.is_some() && issue_id.is_none() {
            tracing::warn!("无法从 Location 头解析事件 ID: {:?}", location);
        }

        tracing::info!("事件创建成功 (coinId: {}, issueId: {:?})", coin_id, issue_id);
        Ok(issue_id)
    }

    /// 获取事件详情
    pub async fn get_issue_details(&self, issue_id: u64) -> Result<IssueDetail, AdminServiceError> {
        tracing::info!("事件详情查询 (issueId: {})", issue_id);

        match self.client.get_issue_details(issue_id).await {
            Ok(Some(detail)) => {
                tracing::info!("事件详情查询成功 (issueId: {})", issue_id);
                Ok(detail)
            }
            Ok(None) => {
                tracing::error!("币种服务返回空的事件详情 (issueId: {})", issue_id);
                Err(AdminServiceError::Internal(
                    "事件详情查询时发生意外错误".to_string(),
                ))
            }
            Err(e) if e.status() == Some(404) => {
                tracing::warn!("事件详情查询失败 (404 - Not Found): issueId={}", issue_id);
                Err(AdminServiceError::NotFound(format!(
                    "未找到事件详情 (ID: {})",
                    issue_id
                )))
            }
            Err(e) => {
                tracing::error!(
                    "事件详情查询时币种服务通信失败: status={:?}, issueId={}, {}",
                    e.status(),
                    issue_id,
                    e
                );
                Err(AdminServiceError::from_client("事件详情查询", &e, ""))
            }
        }
    }

    /// 修改事件
    pub async fn update_issue(
        &self,
        issue_id: u64,
        request: &IssueUpdateRequest,
    ) -> Result<(), AdminServiceError> {
        request
            .validate()
            .map_err(|msg| AdminServiceError::BadRequest(format!("事件修改失败：{}", msg)))?;

        tracing::info!("事件修改 (issueId: {})", issue_id);

        self.client
            .update_issue(issue_id, request)
            .await
            .map_err(|e| {
                tracing::error!(
                    "事件修改时币种服务通信失败: status={:?}, issueId={}, {}",
                    e.status(),
                    issue_id,
                    e
                );
                AdminServiceError::from_client("事件修改", &e, &format!(" (ID: {})", issue_id))
            })?;

        tracing::info!("事件修改成功 (issueId: {})", issue_id);
        Ok(())
    }

    /// 批量删除事件
    pub async fn delete_issues(&self, ids: &[u64]) -> Result<(), AdminServiceError> {
        if ids.is_empty() {
            return Err(AdminServiceError::BadRequest(
                "事件删除失败：未指定要删除的事件".to_string(),
            ));
        }

        tracing::info!("事件删除 (ids: {:?})", ids);

        self.client.delete_issues(ids).await.map_err(|e| {
            tracing::error!(
                "事件删除时币种服务通信失败: status={:?}, ids={:?}, {}",
                e.status(),
                ids,
                e
            );
            AdminServiceError::from_client("事件删除", &e, "")
        })?;

        tracing::info!("事件删除成功 (ids: {:?})", ids);
        Ok(())
    }
}

/// 从 Location 头（如 `/api/v1/admin/issues/42`）解析 ID
fn parse_id_from_location(location: &str) -> Option<u64> {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::test_support::MockCoinService;
    use crate::coin::CoinClientError;
    use crate::model::page::PagedResult;

    fn make_service(
        mock: MockCoinService,
    ) -> (AdminIssueService<MockCoinService>, Arc<MockCoinService>) {
        let mock = Arc::new(mock);
        (AdminIssueService::new(mock.clone()), mock)
    }

    fn create_request(title: &str) -> IssueCreateRequest {
        IssueCreateRequest {
            title: title.to_string(),
            content: "본문".to_string(),
            date: None,
            news_title: None,
            news_url: None,
        }
    }

    fn update_request(title: &str) -> IssueUpdateRequest {
        IssueUpdateRequest {
            title: title.to_string(),
            content: "본문".to_string(),
            date: Some("2025-04-02".to_string()),
            news_title: None,
            news_url: None,
        }
    }

    #[test]
    fn test_parse_id_from_location() {
        assert_eq!(parse_id_from_location("/api/v1/admin/issues/42"), Some(42));
        assert_eq!(
            parse_id_from_location("http://coin-service/api/v1/admin/issues/7/"),
            Some(7)
        );
        assert_eq!(parse_id_from_location("/api/v1/admin/issues/abc"), None);
        assert_eq!(parse_id_from_location(""), None);
    }

    #[tokio::test]
    async fn test_get_issue_list_returns_content() {
        let mock = MockCoinService::default();
        mock.set_issue_list(Ok(PagedResult {
            content: Some(vec![IssueListItem {
                issue_id: 1,
                title: "상장".to_string(),
                date: None,
                created_by: None,
            }]),
            total_elements: 1,
            ..Default::default()
        }));
        let (service, mock) = make_service(mock);

        let items = service.get_issue_list(3, 0, 10).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "상장");
        assert_eq!(mock.calls(), vec!["get_issue_list(3,0,10)".to_string()]);
    }

    #[tokio::test]
    async fn test_get_issue_list_missing_content_is_empty() {
        let (service, _) = make_service(MockCoinService::default());
        let items = service.get_issue_list(3, 0, 10).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_get_issue_list_error_mapping() {
        let mock = MockCoinService::default();
        mock.set_issue_list(Err(MockCoinService::status(404)));
        let (service, _) = make_service(mock);
        let err = service.get_issue_list(3, 0, 10).await.unwrap_err();
        assert!(matches!(err, AdminServiceError::NotFound(_)));

        let mock = MockCoinService::default();
        mock.set_issue_list(Err(MockCoinService::status(502)));
        let (service, _) = make_service(mock);
        let err = service.get_issue_list(3, 0, 10).await.unwrap_err();
        assert!(matches!(err, AdminServiceError::Internal(ref m) if m.contains("502")));
    }

    #[tokio::test]
    async fn test_create_issue_returns_parsed_id() {
        let mock = MockCoinService::default();
        mock.set_create_issue(Ok(Some("/api/v1/admin/issues/99".to_string())));
        let (service, mock) = make_service(mock);

        let id = service
            .create_issue(2, &create_request("제목"), "admin-uuid")
            .await
            .unwrap();
        assert_eq!(id, Some(99));
        assert_eq!(mock.calls(), vec!["create_issue(2,제목,admin-uuid)".to_string()]);
    }

    #[tokio::test]
    async fn test_create_issue_without_location() {
        let (service, _) = make_service(MockCoinService::default());
        let id = service
            .create_issue(2, &create_request("제목"), "admin-uuid")
            .await
            .unwrap();
        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn test_create_issue_validation_skips_upstream() {
        let (service, mock) = make_service(MockCoinService::default());

        let err = service
            .create_issue(2, &create_request("  "), "admin-uuid")
            .await
            .unwrap_err();
        assert!(matches!(err, AdminServiceError::BadRequest(_)));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_issue_bad_request_from_upstream() {
        let mock = MockCoinService::default();
        mock.set_create_issue(Err(MockCoinService::status(400)));
        let (service, _) = make_service(mock);

        let err = service
            .create_issue(2, &create_request("제목"), "admin-uuid")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AdminServiceError::BadRequest("事件创建失败：请求无效或违反业务规则".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_issue_details_mapping() {
        let (service, _) = make_service(MockCoinService::default());
        let err = service.get_issue_details(4).await.unwrap_err();
        assert_eq!(
            err,
            AdminServiceError::Internal("事件详情查询时发生意外错误".to_string())
        );

        let mock = MockCoinService::default();
        mock.set_issue_details(Err(MockCoinService::status(404)));
        let (service, _) = make_service(mock);
        let err = service.get_issue_details(4).await.unwrap_err();
        assert_eq!(
            err,
            AdminServiceError::NotFound("未找到事件详情 (ID: 4)".to_string())
        );

        let mock = MockCoinService::default();
        mock.set_issue_details(Err(CoinClientError::Decode("eof".into())));
        let (service, _) = make_service(mock);
        let err = service.get_issue_details(4).await.unwrap_err();
        assert!(matches!(err, AdminServiceError::Internal(_)));
    }

    #[tokio::test]
    async fn test_update_issue() {
        let (service, mock) = make_service(MockCoinService::default());
        service.update_issue(6, &update_request("수정")).await.unwrap();
        assert_eq!(mock.calls(), vec!["update_issue(6,수정)".to_string()]);
    }

    #[tokio::test]
    async fn test_update_issue_not_found_includes_id() {
        let mock = MockCoinService::default();
        mock.set_update_issue(Err(MockCoinService::status(404)));
        let (service, _) = make_service(mock);

        let err = service
            .update_issue(6, &update_request("수정"))
            .await
            .unwrap_err();
        match err {
            AdminServiceError::NotFound(msg) => assert!(msg.contains("(ID: 6)")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_issues() {
        let (service, mock) = make_service(MockCoinService::default());
        service.delete_issues(&[1, 2]).await.unwrap();
        assert_eq!(mock.calls(), vec!["delete_issues([1, 2])".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_issues_empty_ids_rejected() {
        let (service, mock) = make_service(MockCoinService::default());
        let err = service.delete_issues(&[]).await.unwrap_err();
        assert!(matches!(err, AdminServiceError::BadRequest(_)));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_issues_server_error() {
        let mock = MockCoinService::default();
        mock.set_delete_issues(Err(MockCoinService::status(500)));
        let (service, _) = make_service(mock);
        let err = service.delete_issues(&[1]).await.unwrap_err();
        assert_eq!(
            err,
            AdminServiceError::Internal("事件删除失败：币种服务内部错误 (500)".to_string())
        );
    }
}
