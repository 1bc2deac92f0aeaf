//! Server-driven and client-driven pagination.
//!
//! Launches are paged by the API, which returns [`Pagination`] metadata that is
//! trusted as-is. Every other collection is fetched whole and sliced locally with
//! [`paginate`]; [`ListState`] keeps the current page consistent with the active
//! filter.

use crate::domain::LaunchStatus;
use serde::{Deserialize, Serialize};

/// Page metadata returned by the API alongside a page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            per_page: 0,
        }
    }
}

impl Pagination {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Number of pages needed for `len` items; a page size of 0 means one page
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page)
}

/// A locally computed page over a borrowed collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub per_page: usize,
}

/// Slice page `page` (1-based) out of `items`
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> PageSlice<'_, T> {
    let page = page.max(1);
    let total_pages = page_count(items.len(), per_page);
    let slice = if per_page == 0 {
        if page == 1 {
            items
        } else {
            &items[..0]
        }
    } else {
        let start = (page - 1).saturating_mul(per_page).min(items.len());
        let end = start.saturating_add(per_page).min(items.len());
        &items[start..end]
    };

    PageSlice {
        items: slice,
        current_page: page,
        total_pages,
        total_count: items.len(),
        per_page,
    }
}

/// Filter plus page cursor for a client-paginated list
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<F> {
    filter: F,
    page: usize,
}

impl<F: Default> Default for ListState<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F> ListState<F> {
    pub fn new(filter: F) -> Self {
        Self { filter, page: 1 }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

impl<F: Clone + PartialEq> ListState<F> {
    /// Replace the filter; any actual change sends the cursor back to page 1
    pub fn set_filter(&mut self, filter: F) {
        if self.filter != filter {
            self.filter = filter;
            self.page = 1;
        }
    }

    pub fn update_filter(&mut self, edit: impl FnOnce(&mut F)) {
        let mut next = self.filter.clone();
        edit(&mut next);
        self.set_filter(next);
    }
}

/// Which side of "now" a launch listing covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Upcoming,
    Past,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Upcoming => "upcoming",
            Timeframe::Past => "past",
        }
    }
}

/// Query for the server-paginated launches listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub status: Option<LaunchStatus>,
    pub timeframe: Option<Timeframe>,
}

impl Default for LaunchQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 12,
            search: String::new(),
            status: None,
            timeframe: None,
        }
    }
}

impl LaunchQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.max(1).to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(timeframe) = self.timeframe {
            pairs.push(("type", timeframe.as_str().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 9), 0);
        assert_eq!(page_count(9, 9), 1);
        assert_eq!(page_count(10, 9), 2);
        assert_eq!(page_count(27, 9), 3);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn pages_reconstruct_the_source_exactly_once() {
        for len in [0usize, 1, 8, 9, 10, 23, 27] {
            let items: Vec<usize> = (0..len).collect();
            let pages = page_count(len, 9);
            let mut rebuilt = Vec::new();
            for page in 1..=pages {
                rebuilt.extend_from_slice(paginate(&items, page, 9).items);
            }
            assert_eq!(rebuilt, items, "len {len}");
        }
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items = [1, 2, 3];
        let slice = paginate(&items, 4, 2);
        assert!(slice.items.is_empty());
        assert_eq!(slice.total_pages, 2);
        assert_eq!(slice.total_count, 3);
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, 0, 2).items, &[1, 2]);
    }

    #[test]
    fn filter_change_resets_page() {
        let mut state = ListState::new(String::new());
        state.set_page(3);
        state.set_filter("falcon".to_string());
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.set_filter("falcon".to_string());
        assert_eq!(state.page(), 2, "same filter keeps the page");

        state.update_filter(|f| f.push_str(" 9"));
        assert_eq!(state.page(), 1);
        assert_eq!(state.filter(), "falcon 9");
    }

    #[test]
    fn launch_query_pairs_skip_inactive_filters() {
        let query = LaunchQuery::default();
        assert_eq!(
            query.to_query_pairs(),
            vec![("page", "1".to_string()), ("per_page", "12".to_string())]
        );

        let query = LaunchQuery {
            page: 2,
            search: " starlink ".into(),
            status: Some(LaunchStatus::Scheduled),
            timeframe: Some(Timeframe::Upcoming),
            ..Default::default()
        };
        let pairs = query.to_query_pairs();
        assert!(pairs.contains(&("search", "starlink".to_string())));
        assert!(pairs.contains(&("status", "scheduled".to_string())));
        assert!(pairs.contains(&("type", "upcoming".to_string())));
    }

    #[test]
    fn server_pagination_navigation() {
        let meta = Pagination {
            current_page: 2,
            total_pages: 3,
            total_count: 30,
            per_page: 12,
        };
        assert!(meta.has_previous());
        assert!(meta.has_next());
        assert!(!Pagination::default().has_next());
    }
}
