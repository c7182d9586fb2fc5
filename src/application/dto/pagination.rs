use crate::domain::catalog::PageWindow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Offset-paginated listing: the page items plus the size of the whole
/// filtered set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_count: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, window: PageWindow) -> Self {
        Self {
            items,
            total_count,
            page_count: window.page_count(total_count),
            page: window.page(),
            per_page: window.per_page(),
        }
    }
}
