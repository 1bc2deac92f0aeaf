//! Fetch-and-hold view state.
//!
//! A view owns the latest snapshot of whatever it displays. Each fetch is
//! stamped with a monotonically increasing [`RequestToken`]; only the most
//! recently issued token may settle the view, so a slow response to an older
//! request can never overwrite a newer one. Failures keep the previous snapshot.

use crate::errors::ApiResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error};

pub mod analytics;
pub mod cards;
pub mod catalog;
pub mod detail;
pub mod launches;

pub use analytics::{section_data, sections_data, AnalyticsView};
pub use catalog::{project, CatalogPage, CatalogView};
pub use detail::DetailView;
pub use launches::LaunchesView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

/// How a finished fetch was applied to its view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Settled {
    /// The response replaced the snapshot
    Applied,
    /// The fetch failed; the previous snapshot stays
    Failed,
    /// A newer request was issued meanwhile; the response was dropped
    Stale,
}

impl Settled {
    pub fn is_applied(&self) -> bool {
        matches!(self, Settled::Applied)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewStatus {
    pub loading: bool,
    pub loaded_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

#[derive(Debug)]
pub struct ViewState<T> {
    name: &'static str,
    snapshot: T,
    loading: bool,
    latest: u64,
    loaded_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

impl<T> ViewState<T> {
    pub fn new(name: &'static str, initial: T) -> Self {
        Self {
            name,
            snapshot: initial,
            loading: false,
            latest: 0,
            loaded_at: None,
            last_error: None,
        }
    }

    /// Issue a new request; every earlier token becomes stale
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.loading = true;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    pub fn settle(&mut self, token: RequestToken, result: ApiResult<T>) -> Settled {
        if !self.is_current(token) {
            debug!(
                view = self.name,
                token = token.0,
                latest = self.latest,
                "dropping superseded response"
            );
            return Settled::Stale;
        }

        self.loading = false;
        match result {
            Ok(value) => {
                self.snapshot = value;
                self.loaded_at = Some(Utc::now());
                self.last_error = None;
                Settled::Applied
            }
            Err(e) => {
                error!(view = self.name, error = %e, "fetch failed, keeping previous snapshot");
                self.last_error = Some(e.to_string());
                Settled::Failed
            }
        }
    }

    pub fn snapshot(&self) -> &T {
        &self.snapshot
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn status(&self) -> ViewStatus {
        ViewStatus {
            loading: self.loading,
            loaded_at: self.loaded_at,
            last_error: self.last_error.clone(),
        }
    }
}

/// Shareable handle over a [`ViewState`]
#[derive(Debug)]
pub struct LiveView<T> {
    inner: Arc<Mutex<ViewState<T>>>,
}

impl<T> Clone for LiveView<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> LiveView<T> {
    pub fn empty(name: &'static str) -> Self {
        Self::new(name, T::default())
    }
}

impl<T> LiveView<T> {
    pub fn new(name: &'static str, initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ViewState::new(name, initial))),
        }
    }

    /// Run `fetch` as the newest request for this view and settle it
    pub async fn load<F>(&self, fetch: F) -> Settled
    where
        F: Future<Output = ApiResult<T>>,
    {
        let token = self.begin().await;
        let result = fetch.await;
        self.settle(token, result).await
    }

    pub async fn begin(&self) -> RequestToken {
        self.inner.lock().await.begin()
    }

    pub async fn settle(&self, token: RequestToken, result: ApiResult<T>) -> Settled {
        self.inner.lock().await.settle(token, result)
    }

    pub async fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let state = self.inner.lock().await;
        f(state.snapshot())
    }

    pub async fn status(&self) -> ViewStatus {
        self.inner.lock().await.status()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.is_loading()
    }

    pub async fn has_loaded(&self) -> bool {
        self.inner.lock().await.has_loaded()
    }
}

impl<T: Clone> LiveView<T> {
    pub async fn snapshot(&self) -> T {
        self.inner.lock().await.snapshot().clone()
    }
}
