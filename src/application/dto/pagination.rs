use crate::domain::query::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_data: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    /// `total_pages` is derived from the same limit used to fetch `data`.
    pub fn new(data: Vec<T>, window: PageRequest, total_data: u64) -> Self {
        Self {
            data,
            meta: PaginationMeta {
                current_page: window.page(),
                total_pages: window.total_pages(total_data),
                total_data,
            },
        }
    }
}
