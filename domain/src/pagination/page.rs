//! Page windows over an ordered question listing

use crate::category::entities::CategoryId;
use crate::core::error::TriviaError;
use std::ops::Range;

/// Number of questions on one page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Category reported as "current" on the unscoped listing and on search.
///
/// A fixed value kept for compatibility with existing callers; it does not
/// reflect any filtering.
pub const LISTING_CURRENT_CATEGORY: CategoryId = CategoryId::new(1);

/// A requested 1-based page number (Value Object)
///
/// Stored signed so that zero and negative requests can be represented and
/// rejected with [`TriviaError::InvalidPage`] rather than failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: i64,
}

impl PageRequest {
    pub fn new(number: i64) -> Self {
        Self { number }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    /// Resolve the index range this page covers within `total` items.
    ///
    /// # Errors
    ///
    /// - [`TriviaError::InvalidPage`] when the number is zero or negative
    /// - [`TriviaError::PageOutOfRange`] when it exceeds the page count
    ///   (any page is out of range when `total` is zero)
    pub fn window(&self, total: usize) -> Result<Range<usize>, TriviaError> {
        if self.number <= 0 {
            return Err(TriviaError::InvalidPage { page: self.number });
        }

        let total_pages = page_count(total);
        let index = usize::try_from(self.number - 1).unwrap_or(usize::MAX);
        if index >= total_pages {
            return Err(TriviaError::PageOutOfRange {
                page: self.number,
                total_pages,
            });
        }

        let start = index * QUESTIONS_PER_PAGE;
        let end = (start + QUESTIONS_PER_PAGE).min(total);
        Ok(start..end)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Number of pages needed for `total` items
pub fn page_count(total: usize) -> usize {
    total.div_ceil(QUESTIONS_PER_PAGE)
}

/// One page cut out of a full ordered listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in this window, at most [`QUESTIONS_PER_PAGE`]
    pub items: Vec<T>,
    /// The 1-based page number served
    pub number: i64,
    /// Size of the full listing the page was cut from
    pub total: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        page_count(self.total)
    }
}

/// Cut `request`'s page out of `items`, which must already be ordered.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Result<Page<T>, TriviaError> {
    let total = items.len();
    let window = request.window(total)?;

    let items = items
        .into_iter()
        .skip(window.start)
        .take(window.len())
        .collect();

    Ok(Page {
        items,
        number: request.number(),
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_page() {
        let page = paginate(listing(19), PageRequest::new(1)).unwrap();
        assert_eq!(page.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(page.total, 19);
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn test_last_page_is_partial_and_next_is_out_of_range() {
        for n in [1usize, 9, 10, 11, 19, 20, 21, 35] {
            let last = page_count(n) as i64;
            let page = paginate(listing(n), PageRequest::new(last)).unwrap();
            assert!(!page.items.is_empty());
            assert_eq!(page.items.len(), n - QUESTIONS_PER_PAGE * (page_count(n) - 1));

            let beyond = paginate(listing(n), PageRequest::new(last + 1));
            assert_eq!(
                beyond,
                Err(TriviaError::PageOutOfRange {
                    page: last + 1,
                    total_pages: page_count(n),
                })
            );
        }
    }

    #[test]
    fn test_non_positive_pages_are_invalid() {
        for page in [0, -1, -100, i64::MIN] {
            assert_eq!(
                PageRequest::new(page).window(19),
                Err(TriviaError::InvalidPage { page })
            );
        }
    }

    #[test]
    fn test_invalid_page_checked_before_empty_listing() {
        assert_eq!(
            PageRequest::new(0).window(0),
            Err(TriviaError::InvalidPage { page: 0 })
        );
    }

    #[test]
    fn test_empty_listing_has_no_pages() {
        assert_eq!(
            paginate(Vec::<u8>::new(), PageRequest::default()),
            Err(TriviaError::PageOutOfRange {
                page: 1,
                total_pages: 0,
            })
        );
    }

    #[test]
    fn test_huge_page_number_is_out_of_range() {
        assert!(matches!(
            PageRequest::new(i64::MAX).window(19),
            Err(TriviaError::PageOutOfRange { .. })
        ));
    }
}
