//! 测试用的币种服务 Mock
//!
//! 每个接口的响应可单独设置（只生效一次），调用记录按顺序保存

use parking_lot::Mutex;

use crate::coin::types::{
    CoinDetail, CoinListItem, IssueCreateRequest, IssueDetail, IssueListItem, IssueUpdateRequest,
};
use crate::coin::{CoinClientError, CoinServiceApi};
use crate::model::page::PagedResult;

type Reply<T> = Mutex<Option<Result<T, CoinClientError>>>;

#[derive(Default)]
pub struct MockCoinService {
    calls: Mutex<Vec<String>>,
    coin_list: Reply<PagedResult<CoinListItem>>,
    coin_details: Reply<Option<CoinDetail>>,
    toggle: Reply<()>,
    issue_list: Reply<PagedResult<IssueListItem>>,
    create_issue: Reply<Option<String>>,
    issue_details: Reply<Option<IssueDetail>>,
    update_issue: Reply<()>,
    delete_issues: Reply<()>,
}

impl MockCoinService {
    pub fn status(status: u16) -> CoinClientError {
        CoinClientError::Status {
            status,
            body: String::new(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn set_coin_list(&self, reply: Result<PagedResult<CoinListItem>, CoinClientError>) {
        *self.coin_list.lock() = Some(reply);
    }

    pub fn set_coin_details(&self, reply: Result<Option<CoinDetail>, CoinClientError>) {
        *self.coin_details.lock() = Some(reply);
    }

    pub fn set_toggle(&self, reply: Result<(), CoinClientError>) {
        *self.toggle.lock() = Some(reply);
    }

    pub fn set_issue_list(&self, reply: Result<PagedResult<IssueListItem>, CoinClientError>) {
        *self.issue_list.lock() = Some(reply);
    }

    pub fn set_create_issue(&self, reply: Result<Option<String>, CoinClientError>) {
        *self.create_issue.lock() = Some(reply);
    }

    pub fn set_issue_details(&self, reply: Result<Option<IssueDetail>, CoinClientError>) {
        *self.issue_details.lock() = Some(reply);
    }

    pub fn set_update_issue(&self, reply: Result<(), CoinClientError>) {
        *self.update_issue.lock() = Some(reply);
    }

    pub fn set_delete_issues(&self, reply: Result<(), CoinClientError>) {
        *self.delete_issues.lock() = Some(reply);
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }
}

fn take_or<T>(reply: &Reply<T>, default: T) -> Result<T, CoinClientError> {
    reply.lock().take().unwrap_or(Ok(default))
}

impl CoinServiceApi for MockCoinService {
    async fn get_coin_list(
        &self,
        keyword: Option<&str>,
        page: u32,
        size: u32,
        sort: Option<&str>,
    ) -> Result<PagedResult<CoinListItem>, CoinClientError> {
        self.record(format!(
            "get_coin_list({:?},{},{},{:?})",
            keyword, page, size, sort
        ));
        take_or(&self.coin_list, PagedResult::default())
    }

    async fn get_coin_details(&self, coin_id: u64) -> Result<Option<CoinDetail>, CoinClientError> {
        self.record(format!("get_coin_details({})", coin_id));
        take_or(&self.coin_details, None)
    }

    async fn toggle_coin_display(
        &self,
        coin_id: u64,
        is_displayed: bool,
    ) -> Result<(), CoinClientError> {
        self.record(format!("toggle_coin_display({},{})", coin_id, is_displayed));
        take_or(&self.toggle, ())
    }

    async fn get_issue_list(
        &self,
        coin_id: u64,
        page: u32,
        size: u32,
    ) -> Result<PagedResult<IssueListItem>, CoinClientError> {
        self.record(format!("get_issue_list({},{},{})", coin_id, page, size));
        take_or(&self.issue_list, PagedResult::default())
    }

    async fn create_issue(
        &self,
        coin_id: u64,
        request: &IssueCreateRequest,
        admin_user_id: &str,
    ) -> Result<Option<String>, CoinClientError> {
        self.record(format!(
            "create_issue({},{},{})",
            coin_id, request.title, admin_user_id
        ));
        take_or(&self.create_issue, None)
    }

    async fn get_issue_details(
        &self,
        issue_id: u64,
    ) -> Result<Option<IssueDetail>, CoinClientError> {
        self.record(format!("get_issue_details({})", issue_id));
        take_or(&self.issue_details, None)
    }

    async fn update_issue(
        &self,
        issue_id: u64,
        request: &IssueUpdateRequest,
    ) -> Result<(), CoinClientError> {
        self.record(format!("update_issue({},{})", issue_id, request.title));
        take_or(&self.update_issue, ())
    }

    async fn delete_issues(&self, ids: &[u64]) -> Result<(), CoinClientError> {
        self.record(format!("delete_issues({:?})", ids));
        take_or(&self.delete_issues, ())
    }
}
