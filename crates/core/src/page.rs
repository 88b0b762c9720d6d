//! Generic pagination container.
//!
//! Pairs one page of results with the totals describing the whole result
//! set, independent of the element type. Stores produce it; the transport
//! re-expresses it with [`PagedResponse::map`] without touching the totals.

use serde::{Deserialize, Serialize};

/// Number of pages needed to hold `total_elements` at `size` elements per page.
///
/// `size` must be at least 1; page requests are normalized before any store
/// computes totals.
pub fn page_count(total_elements: u64, size: u32) -> u32 {
    total_elements.div_ceil(u64::from(size)) as u32
}

/// One page of `T` plus result-set totals.
///
/// Invariants, given the page size used to produce it:
/// - `content.len() <= size`
/// - `total_pages == page_count(total_elements, size)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> PagedResponse<T> {
    pub fn new(content: Vec<T>, total_elements: u64, total_pages: u32) -> Self {
        Self {
            content,
            total_elements,
            total_pages,
        }
    }

    /// Re-express the page with transformed elements.
    ///
    /// Applies `transform` to each element of `content` in order. Element
    /// count, ordering and both totals carry over unchanged; the transform
    /// never sees them. Pure: no storage interaction.
    pub fn map<U, F>(self, transform: F) -> PagedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResponse {
            content: self.content.into_iter().map(transform).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> PagedResponse<i64> {
        PagedResponse::new(vec![3, 1, 2], 13, 5)
    }

    #[test]
    fn map_identity_keeps_everything() {
        let page = sample_page();
        let mapped = page.clone().map(|x| x);
        assert_eq!(mapped, page);
    }

    #[test]
    fn map_changes_element_type_but_not_totals() {
        let mapped = sample_page().map(|x| format!("#{x}"));
        assert_eq!(mapped.content, vec!["#3", "#1", "#2"]);
        assert_eq!(mapped.total_elements, 13);
        assert_eq!(mapped.total_pages, 5);
    }

    #[test]
    fn map_preserves_order_and_length() {
        let mapped = sample_page().map(|x| x * 10);
        assert_eq!(mapped.content, vec![30, 10, 20]);
        assert_eq!(mapped.content.len(), 3);
    }

    #[test]
    fn map_on_empty_page_stays_empty() {
        let empty: PagedResponse<i64> = PagedResponse::new(vec![], 0, 0);
        let mapped = empty.map(|x| x.to_string());
        assert!(mapped.content.is_empty());
        assert_eq!(mapped.total_elements, 0);
        assert_eq!(mapped.total_pages, 0);
    }

    #[test]
    fn serializes_with_camel_case_totals() {
        let json = serde_json::to_value(PagedResponse::new(vec![1, 2], 2, 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"content": [1, 2], "totalElements": 2, "totalPages": 1})
        );
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: map never disturbs totals, length or order, for any
            /// content and any element-type-changing transform.
            #[test]
            fn map_preserves_page_shape(
                content in proptest::collection::vec(any::<i32>(), 0..64),
                total_elements in 0u64..10_000,
                total_pages in 0u32..1_000
            ) {
                let page = PagedResponse::new(content.clone(), total_elements, total_pages);
                let mapped = page.map(|x| i64::from(x) * 2);

                prop_assert_eq!(mapped.total_elements, total_elements);
                prop_assert_eq!(mapped.total_pages, total_pages);
                prop_assert_eq!(mapped.content.len(), content.len());
                for (got, src) in mapped.content.iter().zip(content.iter()) {
                    prop_assert_eq!(*got, i64::from(*src) * 2);
                }
            }

            /// Property: page_count is the exact ceiling of total / size.
            #[test]
            fn page_count_matches_ceiling(total in 0u64..1_000_000, size in 1u32..5_000) {
                let pages = u64::from(page_count(total, size));
                prop_assert!(pages * u64::from(size) >= total);
                prop_assert!(pages.saturating_sub(1) * u64::from(size) < total || total == 0);
            }
        }
    }
}
