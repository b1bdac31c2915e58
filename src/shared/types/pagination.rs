use serde::{Deserialize, Serialize};

use crate::shared::validations::PaginationInput;

/// One page of a listing together with its position in the full result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u32,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, params: &PaginationInput) -> Self {
        let total_pages = match params.limit {
            0 => 0,
            limit => total.div_ceil(u64::from(limit)),
        };
        Self {
            items,
            total,
            page: params.page,
            limit: params.limit,
            total_pages,
        }
    }

    /// Whether a page follows this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
