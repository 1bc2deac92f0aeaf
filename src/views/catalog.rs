//! Collections fetched whole and filtered (and optionally paged) locally.

use super::{LiveView, Settled, ViewStatus};
use crate::errors::ApiResult;
use crate::filter::ItemFilter;
use crate::pagination::{paginate, ListState};
use serde::Serialize;
use std::future::Future;
use tokio::sync::Mutex;

/// One rendered page of a filtered collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Items matching the filter
    pub total_count: usize,
    /// Items in the snapshot before filtering
    pub source_count: usize,
}

/// Filter then slice; without a page size everything lands on page 1
pub fn project<T, F>(items: &[T], filter: &F, page: usize, per_page: Option<usize>) -> CatalogPage<T>
where
    T: Clone,
    F: ItemFilter<T>,
{
    let matched = filter.apply(items);
    let page = if per_page.is_some() { page } else { 1 };
    let slice = paginate(&matched, page, per_page.unwrap_or(0));

    CatalogPage {
        items: slice.items.iter().map(|item| (*item).clone()).collect(),
        current_page: slice.current_page,
        total_pages: slice.total_pages,
        total_count: slice.total_count,
        source_count: items.len(),
    }
}

pub struct CatalogView<T, F> {
    snapshot: LiveView<Vec<T>>,
    list: Mutex<ListState<F>>,
    per_page: Option<usize>,
}

impl<T, F> CatalogView<T, F>
where
    T: Clone,
    F: ItemFilter<T> + Clone + PartialEq + Default,
{
    pub fn new(name: &'static str, per_page: Option<usize>) -> Self {
        Self {
            snapshot: LiveView::empty(name),
            list: Mutex::new(ListState::default()),
            per_page,
        }
    }

    pub fn live(&self) -> &LiveView<Vec<T>> {
        &self.snapshot
    }

    pub async fn load<Fut>(&self, fetch: Fut) -> Settled
    where
        Fut: Future<Output = ApiResult<Vec<T>>>,
    {
        self.snapshot.load(fetch).await
    }

    /// Replace the active filter; a changed filter returns to page 1
    pub async fn set_filter(&self, filter: F) {
        self.list.lock().await.set_filter(filter);
    }

    pub async fn update_filter(&self, edit: impl FnOnce(&mut F)) {
        self.list.lock().await.update_filter(edit);
    }

    pub async fn set_page(&self, page: usize) {
        self.list.lock().await.set_page(page);
    }

    pub async fn filter(&self) -> F {
        self.list.lock().await.filter().clone()
    }

    pub async fn page(&self) -> usize {
        self.list.lock().await.page()
    }

    /// Current page under the view's own filter and cursor
    pub async fn visible(&self) -> CatalogPage<T> {
        let (filter, page) = {
            let list = self.list.lock().await;
            (list.filter().clone(), list.page())
        };
        self.query(&filter, page).await
    }

    /// Page under an explicit filter and cursor, leaving the view's own untouched
    pub async fn query(&self, filter: &F, page: usize) -> CatalogPage<T> {
        let per_page = self.per_page;
        self.snapshot
            .read(|items| project(items, filter, page, per_page))
            .await
    }

    pub async fn items(&self) -> Vec<T> {
        self.snapshot.snapshot().await
    }

    pub async fn status(&self) -> ViewStatus {
        self.snapshot.status().await
    }
}
