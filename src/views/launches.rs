//! Server-paginated launches listing.

use super::{LiveView, RequestToken, Settled, ViewStatus};
use crate::clients::SpaceApiClient;
use crate::domain::{LaunchPage, LaunchStatus};
use crate::pagination::{LaunchQuery, Timeframe};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

pub struct LaunchesView {
    client: Arc<SpaceApiClient>,
    query: Mutex<LaunchQuery>,
    page: LiveView<LaunchPage>,
}

impl LaunchesView {
    pub fn new(client: Arc<SpaceApiClient>, per_page: u32) -> Self {
        Self {
            client,
            query: Mutex::new(LaunchQuery {
                per_page,
                ..Default::default()
            }),
            page: LiveView::empty("launches"),
        }
    }

    /// Fetch the page for the current query
    pub async fn refresh(&self) -> Settled {
        let (query, token) = {
            let current = self.query.lock().await;
            (current.clone(), self.page.begin().await)
        };
        self.fetch(query, token).await
    }

    /// Edit the query and refetch.
    ///
    /// A change to search, status or timeframe sends the cursor back to page 1.
    pub async fn apply(&self, edit: impl FnOnce(&mut LaunchQuery)) -> Settled {
        // The token is issued under the query lock so token order matches query order
        let (query, token) = {
            let mut current = self.query.lock().await;
            let mut next = current.clone();
            edit(&mut next);
            let filters_changed = next.search != current.search
                || next.status != current.status
                || next.timeframe != current.timeframe;
            if filters_changed {
                next.page = 1;
            }
            next.page = next.page.max(1);
            *current = next.clone();
            (next, self.page.begin().await)
        };
        self.fetch(query, token).await
    }

    /// Submit a search term
    pub async fn search(&self, term: impl Into<String>) -> Settled {
        let term = term.into();
        self.apply(|q| q.search = term).await
    }

    pub async fn set_status(&self, status: Option<LaunchStatus>) -> Settled {
        self.apply(|q| q.status = status).await
    }

    pub async fn set_timeframe(&self, timeframe: Option<Timeframe>) -> Settled {
        self.apply(|q| q.timeframe = timeframe).await
    }

    pub async fn go_to_page(&self, page: u32) -> Settled {
        self.apply(|q| q.page = page).await
    }

    async fn fetch(&self, query: LaunchQuery, token: RequestToken) -> Settled {
        debug!(page = query.page, search = %query.search, "fetching launches");
        let result = self.client.launches(&query).await;
        self.page.settle(token, result).await
    }

    pub async fn query(&self) -> LaunchQuery {
        self.query.lock().await.clone()
    }

    pub async fn snapshot(&self) -> LaunchPage {
        self.page.snapshot().await
    }

    pub async fn status(&self) -> ViewStatus {
        self.page.status().await
    }
}
