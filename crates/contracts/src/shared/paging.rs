use serde::{Deserialize, Serialize};

use super::serde_helpers::opt_i64_from_str;

/// Параметры страницы в запросе (`pagingData`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingData {
    #[serde(rename = "itemsPerPage")]
    pub items_per_page: u32,

    #[serde(rename = "currentPage")]
    pub current_page: u32,
}

/// Блок `pagingData` в ответе
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagingResult {
    #[serde(rename = "currentPage", default, deserialize_with = "opt_i64_from_str")]
    pub current_page: Option<i64>,

    #[serde(rename = "pageSize", default, deserialize_with = "opt_i64_from_str")]
    pub page_size: Option<i64>,

    #[serde(rename = "totalCount", default, deserialize_with = "opt_i64_from_str")]
    pub total_count: Option<i64>,

    #[serde(rename = "pageCount", default, deserialize_with = "opt_i64_from_str")]
    pub page_count: Option<i64>,
}
