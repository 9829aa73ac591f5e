use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One page of a filtered list.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Page<T> {
    items: Vec<T>,
    total: i64,
    page: i64,
    limit: i64,
    total_pages: i64,
}

impl<T> Page<T> {
    /// `total_pages` is `ceil(total / limit)`, and 0 when nothing matches.
    pub fn new(items: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        let total_pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn empty(page: i64, limit: i64) -> Self {
        Self::new(vec![], 0, page, limit)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, function: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(function).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        total = {0, 1, 9, 10, 11, 101},
        limit = {10, 10, 10, 10, 10, 20},
        expected_total_pages = {0, 1, 1, 1, 2, 6}
    )]
    fn should_compute_total_pages(total: i64, limit: i64, expected_total_pages: i64) {
        let page: Page<()> = Page::new(vec![], total, 1, limit);
        assert_eq!(expected_total_pages, *page.total_pages());
    }

    #[test]
    fn should_map_items() {
        let page = Page::new(vec![1, 2], 12, 2, 2).map(|i| i * 10);
        assert_eq!(&vec![10, 20], page.items());
        assert_eq!(6, *page.total_pages());
        assert_eq!(2, *page.page());
    }
}
