//! Single resource addressed by id.

use super::{LiveView, Settled, ViewStatus};
use crate::domain::Id;
use crate::errors::ApiResult;
use std::future::Future;

/// Holds the last resource shown and the id it belongs to
pub struct DetailView<T> {
    current: LiveView<Option<(Id, T)>>,
}

impl<T: Clone> DetailView<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            current: LiveView::new(name, None),
        }
    }

    /// Navigate to `id`; a later navigation supersedes this one
    pub async fn show<F>(&self, id: Id, fetch: F) -> Settled
    where
        F: Future<Output = ApiResult<T>>,
    {
        self.current
            .load(async move { fetch.await.map(|item| Some((id, item))) })
            .await
    }

    pub async fn id(&self) -> Option<Id> {
        self.current.read(|c| c.as_ref().map(|(id, _)| *id)).await
    }

    /// The resource, or `None` while nothing has loaded ("not found" page)
    pub async fn resource(&self) -> Option<T> {
        self.current.read(|c| c.as_ref().map(|(_, item)| item.clone())).await
    }

    pub async fn status(&self) -> ViewStatus {
        self.current.status().await
    }
}
