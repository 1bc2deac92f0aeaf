//! Analytics page: eleven aggregates held as one snapshot, the cost
//! estimator form and the section tabs.

use super::{LiveView, Settled, ViewStatus};
use crate::domain::analytics::{AnalyticsSnapshot, CostEstimatorInputs, OverviewMetrics};
use crate::domain::Id;
use crate::errors::ApiResult;
use crate::layout::{visible_sections, BreakpointObserver, Section, ViewportClass};
use crate::metrics::{CostBreakdown, CostEstimator};
use serde_json::{json, Map, Value};
use std::future::Future;
use tokio::sync::{watch, Mutex};
use tracing::info;

/// Data rendered by each section, keyed by record name
pub fn section_data(snapshot: &AnalyticsSnapshot, section: Section) -> Map<String, Value> {
    let pairs = match section {
        Section::Overview => vec![
            ("launch_success_rates", json!(snapshot.launch_success_rates)),
            ("launch_trends", json!(snapshot.launch_trends)),
            ("organization_performance", json!(snapshot.organization_performance)),
        ],
        Section::HumanMissions => vec![
            ("human_space_missions", json!(snapshot.human_space_missions)),
            ("astronaut_statistics", json!(snapshot.astronaut_statistics)),
        ],
        Section::Rockets => vec![("top_rockets_by_payload", json!(snapshot.top_rockets_by_payload))],
        Section::Costs => vec![("cost_estimator", json!(snapshot.cost_estimator))],
        Section::Timeline => vec![("mission_timeline", json!(snapshot.mission_timeline))],
        Section::Orbits => vec![("orbit_distribution", json!(snapshot.orbit_distribution))],
        Section::Missions => vec![("mission_progress", json!(snapshot.mission_progress))],
        Section::Family => vec![("mission_family_tree", json!(snapshot.mission_family_tree))],
    };
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Merged data of every listed section
pub fn sections_data(snapshot: &AnalyticsSnapshot, sections: &[Section]) -> Map<String, Value> {
    sections
        .iter()
        .flat_map(|s| section_data(snapshot, *s))
        .collect()
}

pub struct AnalyticsView {
    snapshot: LiveView<AnalyticsSnapshot>,
    estimator: Mutex<CostEstimator>,
    tab: Mutex<Section>,
    observer: BreakpointObserver,
}

impl AnalyticsView {
    pub fn new(wide_min_width: u32, initial_width: u32) -> Self {
        Self {
            snapshot: LiveView::empty("analytics"),
            estimator: Mutex::new(CostEstimator::default()),
            tab: Mutex::new(Section::default()),
            observer: BreakpointObserver::new(wide_min_width, initial_width),
        }
    }

    pub fn live(&self) -> &LiveView<AnalyticsSnapshot> {
        &self.snapshot
    }

    /// Settle a full analytics fetch.
    ///
    /// `fetch` must resolve all eleven aggregates or fail as a whole; a new
    /// snapshot also replaces the estimator inputs and clears its selections.
    pub async fn load<F>(&self, fetch: F) -> Settled
    where
        F: Future<Output = ApiResult<AnalyticsSnapshot>>,
    {
        let outcome = self.snapshot.load(fetch).await;
        if outcome == Settled::Applied {
            let inputs = self
                .snapshot
                .read(|s| s.cost_estimator.clone().unwrap_or_default())
                .await;
            info!(
                rockets = inputs.rockets.len(),
                satellites = inputs.satellites.len(),
                "cost estimator inputs refreshed"
            );
            *self.estimator.lock().await = CostEstimator::new(inputs);
        }
        outcome
    }

    pub async fn snapshot(&self) -> AnalyticsSnapshot {
        self.snapshot.snapshot().await
    }

    pub async fn overview(&self) -> OverviewMetrics {
        self.snapshot.read(AnalyticsSnapshot::overview).await
    }

    pub async fn status(&self) -> ViewStatus {
        self.snapshot.status().await
    }

    pub async fn select_tab(&self, section: Section) {
        *self.tab.lock().await = section;
    }

    pub async fn tab(&self) -> Section {
        *self.tab.lock().await
    }

    pub fn observe_width(&self, width: u32) -> bool {
        self.observer.observe_width(width)
    }

    pub fn viewport(&self) -> ViewportClass {
        self.observer.current()
    }

    pub fn watch_viewport(&self) -> watch::Receiver<ViewportClass> {
        self.observer.subscribe()
    }

    pub async fn visible_sections(&self) -> Vec<Section> {
        visible_sections(self.tab().await, self.viewport())
    }

    pub async fn select_rocket(&self, id: Option<Id>) {
        self.estimator.lock().await.select_rocket(id);
    }

    pub async fn select_satellite(&self, id: Option<Id>) {
        self.estimator.lock().await.select_satellite(id);
    }

    /// The "Calculate" action
    pub async fn calculate_cost(&self) -> Option<CostBreakdown> {
        self.estimator.lock().await.calculate()
    }

    pub async fn estimate(&self) -> Option<CostBreakdown> {
        self.estimator.lock().await.estimate().copied()
    }

    pub async fn cost_inputs(&self) -> CostEstimatorInputs {
        self.estimator.lock().await.inputs().clone()
    }

    /// One-off estimate for a pairing, leaving the held form untouched
    pub async fn estimate_pair(&self, rocket: Option<Id>, satellite: Option<Id>) -> Option<CostBreakdown> {
        let mut estimator = CostEstimator::new(self.cost_inputs().await);
        estimator.select_rocket(rocket);
        estimator.select_satellite(satellite);
        estimator.calculate()
    }
}
