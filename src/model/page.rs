//! 分页结果模型
//!
//! - [`PagedResult`]: 币种服务返回的分页结构（Spring Page 的 JSON 形态）
//! - [`Page`]: 本地分页结果，按请求的页码/页大小重新计算分页元数据

use serde::{Deserialize, Serialize};

/// 上游分页结果
///
/// 所有字段在传输层都是可选的，`content` 缺失或为 `null` 时保持 `None`，
/// 以便服务层识别异常响应。
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// 实际数据列表
    pub content: Option<Vec<T>>,
    /// 总页数
    #[serde(default)]
    pub total_pages: u32,
    /// 总记录数
    #[serde(default)]
    pub total_elements: u64,
    /// 当前页大小
    #[serde(default)]
    pub size: u32,
    /// 当前页码（从 0 开始）
    #[serde(default)]
    pub number: u32,
    /// 是否最后一页
    #[serde(default)]
    pub last: bool,
    /// 是否第一页
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub empty: bool,
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            content: None,
            total_pages: 0,
            total_elements: 0,
            size: 0,
            number: 0,
            last: false,
            first: false,
            empty: false,
        }
    }
}

/// 页大小非法（必须 >= 1）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPageSize;

impl std::fmt::Display for InvalidPageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "页大小必须大于等于 1")
    }
}

impl std::error::Error for InvalidPageSize {}

/// 本地分页结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// 根据内容和分页参数构建分页结果
    ///
    /// 内容非空且 `offset + size` 超过总数时，总数修正为 `offset + content.len()`。
    pub fn new(
        content: Vec<T>,
        number: u32,
        size: u32,
        total: u64,
    ) -> Result<Self, InvalidPageSize> {
        if size == 0 {
            return Err(InvalidPageSize);
        }

        let offset = u64::from(number) * u64::from(size);
        let total_elements = if !content.is_empty() && offset + u64::from(size) > total {
            offset + content.len() as u64
        } else {
            total
        };

        let total_pages = total_elements.div_ceil(u64::from(size));
        let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);

        Ok(Self {
            number_of_elements: content.len(),
            first: number == 0,
            last: u64::from(number) + 1 >= u64::from(total_pages),
            empty: content.is_empty(),
            content,
            number,
            size,
            total_elements,
            total_pages,
        })
    }

    /// 空分页
    pub fn empty(number: u32, size: u32) -> Self {
        Self {
            content: Vec::new(),
            number,
            size,
            total_elements: 0,
            total_pages: 0,
            number_of_elements: 0,
            first: number == 0,
            last: true,
            empty: true,
        }
    }
}
