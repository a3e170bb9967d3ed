//! Pagination window over ordered result sets

use serde::Deserialize;

/// Fixed page size for question listings
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed; 0 never matches anything)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination.
    ///
    /// - Page 0 is kept and yields an empty window
    /// - Per page is clamped to a minimum of 1
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page: per_page.max(1),
        }
    }

    /// Index of the first item on this page, `None` for page 0 or overflow.
    pub fn offset(&self) -> Option<usize> {
        let index = u64::from(self.page.checked_sub(1)?) * u64::from(self.per_page);
        usize::try_from(index).ok()
    }

    /// Slice `[(page-1)*per_page, page*per_page)` of `items`.
    ///
    /// Out-of-range pages give an empty slice.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Some(start) = self.offset() else {
            return &[];
        };
        if start >= items.len() {
            return &[];
        }
        let end = start
            .saturating_add(self.per_page as usize)
            .min(items.len());
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: QUESTIONS_PER_PAGE,
        }
    }
}

/// Query parameters for pagination
///
/// `page` is taken as text so a non-numeric value falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let page = match params.page.as_deref().map(str::trim).map(str::parse::<i64>) {
            Some(Ok(n)) if n < 1 => 0,
            Some(Ok(n)) => u32::try_from(n).unwrap_or(u32::MAX),
            _ => 1,
        };
        Self::new(page, QUESTIONS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>) -> Pagination {
        Pagination::from(PaginationParams {
            page: page.map(str::to_owned),
        })
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1, 10).offset(), Some(0));
        assert_eq!(Pagination::new(2, 10).offset(), Some(10));
        assert_eq!(Pagination::new(3, 25).offset(), Some(50));
        assert_eq!(Pagination::new(0, 10).offset(), None);
    }

    #[test]
    fn clamps_per_page() {
        assert_eq!(Pagination::new(1, 0).per_page, 1);
    }

    #[test]
    fn window_slices() {
        let items: Vec<u32> = (1..=25).collect();

        assert_eq!(Pagination::new(1, 10).window(&items), &items[0..10]);
        assert_eq!(Pagination::new(2, 10).window(&items), &items[10..20]);
        assert_eq!(Pagination::new(3, 10).window(&items), &[21, 22, 23, 24, 25]);
        assert!(Pagination::new(4, 10).window(&items).is_empty());
        assert!(Pagination::new(0, 10).window(&items).is_empty());
        assert!(Pagination::new(u32::MAX, 10).window(&items).is_empty());
    }

    #[test]
    fn pages_cover_everything_once() {
        let items: Vec<u32> = (0..37).collect();
        let mut seen = Vec::new();
        let mut page = 1;
        loop {
            let window = Pagination::new(page, QUESTIONS_PER_PAGE).window(&items);
            if window.is_empty() {
                break;
            }
            assert!(window.len() <= QUESTIONS_PER_PAGE as usize);
            seen.extend_from_slice(window);
            page += 1;
        }
        assert_eq!(seen, items);
        assert_eq!(page, 5);
    }

    #[test]
    fn window_of_empty_list() {
        let items: Vec<u32> = Vec::new();
        assert!(Pagination::default().window(&items).is_empty());
    }

    #[test]
    fn params_default_to_first_page() {
        assert_eq!(params(None), Pagination::default());
        assert_eq!(params(Some("abc")).page, 1);
        assert_eq!(params(Some("")).page, 1);
        assert_eq!(params(Some("2.5")).page, 1);
    }

    #[test]
    fn params_parse_numbers() {
        assert_eq!(params(Some("3")).page, 3);
        assert_eq!(params(Some("1000")).page, 1000);
        assert_eq!(params(Some("0")).page, 0);
        assert_eq!(params(Some("-2")).page, 0);
        assert_eq!(params(Some("99999999999")).page, u32::MAX);
    }
}
