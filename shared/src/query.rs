//! Pagination types for list endpoints

use serde::{Deserialize, Serialize};

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Page of records
    pub data: Vec<T>,
    /// Total record count (before pagination)
    pub total: u64,
    /// Current page number (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total number of pages
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            ((total as f64) / (limit as f64)).ceil() as u32
        } else {
            1
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Create a single-page response (when pagination is not requested)
    pub fn single_page(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            total,
            page: 1,
            limit: total as u32,
            total_pages: 1,
        }
    }

    /// Slice a fully materialized list into one page
    ///
    /// `page` is 1-based; out-of-range pages yield an empty data list while
    /// keeping the correct totals.
    pub fn paginate(items: Vec<T>, page: u32, limit: u32) -> Self {
        let total = items.len() as u64;
        if limit == 0 {
            return Self::single_page(items);
        }
        let start = (page.max(1) as usize - 1).saturating_mul(limit as usize);
        let data: Vec<T> = items
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .collect();
        Self::new(data, total, page.max(1), limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_middle_page() {
        let resp = PaginatedResponse::paginate((1..=12).collect(), 2, 5);
        assert_eq!(resp.data, vec![6, 7, 8, 9, 10]);
        assert_eq!(resp.total, 12);
        assert_eq!(resp.total_pages, 3);
    }

    #[test]
    fn test_paginate_out_of_range() {
        let resp = PaginatedResponse::paginate(vec![1, 2, 3], 5, 5);
        assert!(resp.data.is_empty());
        assert_eq!(resp.total, 3);
        assert_eq!(resp.total_pages, 1);
    }

    #[test]
    fn test_paginate_zero_limit_is_single_page() {
        let resp = PaginatedResponse::paginate(vec![1, 2, 3], 1, 0);
        assert_eq!(resp.data, vec![1, 2, 3]);
        assert_eq!(resp.total_pages, 1);
    }
}
