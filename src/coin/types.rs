//! 币种服务 DTO 定义
//!
//! 字段与币种服务的 JSON 一致（camelCase），时间字段原样透传

use serde::{Deserialize, Serialize};

// ============ 币种 ============

/// 币种列表项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinListItem {
    pub coin_id: u64,
    pub korean_name: String,
    pub english_name: String,
    /// 交易代码，如 KRW-BTC
    pub code: String,
    #[serde(default)]
    pub is_displayed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_price: Option<f64>,
}

/// 币种详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinDetail {
    pub coin_id: u64,
    pub korean_name: String,
    pub english_name: String,
    pub code: String,
    #[serde(default)]
    pub is_displayed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// ============ 事件（Issue） ============

/// 事件列表项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueListItem {
    pub issue_id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// 事件详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetail {
    pub issue_id: u64,
    pub coin_id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// 事件标题最大长度（字符数）
pub const ISSUE_TITLE_MAX_CHARS: usize = 100;

/// 创建事件请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateRequest {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_url: Option<String>,
}

/// 修改事件请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdateRequest {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_url: Option<String>,
}

/// 校验事件的标题和内容，返回错误描述
pub fn validate_issue_fields(title: &str, content: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("标题不能为空".to_string());
    }
    if title.chars().count() > ISSUE_TITLE_MAX_CHARS {
        return Err(format!("标题不能超过 {} 个字符", ISSUE_TITLE_MAX_CHARS));
    }
    if content.trim().is_empty() {
        return Err("内容不能为空".to_string());
    }
    Ok(())
}

impl IssueCreateRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_issue_fields(&self.title, &self.content)
    }
}

impl IssueUpdateRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_issue_fields(&self.title, &self.content)
    }
}
