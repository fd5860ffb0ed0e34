//! Page slicing and paging metadata

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Page numbers start at 1")]
    ZeroPage,
    #[error("Page size must be at least 1")]
    ZeroPageSize,
}

/// Position of one page within a (possibly filtered) result set.
///
/// `current_page` is never checked against `total_pages()`; a page past the
/// end is simply empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInfo {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl PagingInfo {
    pub fn total_pages(&self) -> usize { self.total_items.div_ceil(self.items_per_page) }
    pub fn has_previous(&self) -> bool { self.current_page > 1 }
    pub fn has_next(&self) -> bool { self.current_page < self.total_pages() }

    /// Page numbers to render as navigation links, `1..=total_pages()`.
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> { 1..=self.total_pages() }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub paging_info: PagingInfo,
}

/// Returns page `page` (1-based) of `items` holding at most `page_size`
/// entries. `total_items` always counts the whole input.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Result<Page<T>, PaginationError> {
    if page == 0 { return Err(PaginationError::ZeroPage); }
    if page_size == 0 { return Err(PaginationError::ZeroPageSize); }
    let total_items = items.len();
    let skip = (page - 1).saturating_mul(page_size);
    let items = items.into_iter().skip(skip).take(page_size).collect();
    Ok(Page { items, paging_info: PagingInfo { current_page: page, items_per_page: page_size, total_items } })
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn pages_cover_input_in_order(len in 0usize..60, page_size in 1usize..12) {
            let items: Vec<usize> = (0..len).collect();
            let mut seen = Vec::new();
            for page in 1..=paginate(items.clone(), 1, page_size).unwrap().paging_info.total_pages() {
                let slice = paginate(items.clone(), page, page_size).unwrap();
                prop_assert!(!slice.items.is_empty());
                prop_assert!(slice.items.len() <= page_size);
                seen.extend(slice.items);
            }
            prop_assert_eq!(seen, items);
        }

        #[test]
        fn totals_do_not_depend_on_page(len in 0usize..60, page_size in 1usize..12, page in 1usize..20) {
            let info = paginate(vec![(); len], page, page_size).unwrap().paging_info;
            prop_assert_eq!(info.total_items, len);
            prop_assert_eq!(info.total_pages(), (len + page_size - 1) / page_size);
            prop_assert_eq!(info.has_next(), page < info.total_pages());
        }
    }
}
