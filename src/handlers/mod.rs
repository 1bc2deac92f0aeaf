/// HTTP request handlers
use crate::clients::SpaceApiClient;
use crate::config::AppConfig;
use crate::domain::{
    Dashboard, Id, LaunchStatus, Mission, NewsArticle, Organization, Rocket, Satellite,
};
use crate::errors::ApiError;
use crate::filter::{
    MissionFilter, NewsFilter, NewsOptions, OrganizationFilter, OrganizationOptions, RocketFilter,
    RocketOptions, SatelliteFilter, SatelliteOptions,
};
use crate::layout::{visible_sections, Section, ViewportClass};
use crate::metrics::{status_counts, CostBreakdown, StatusCounts};
use crate::pagination::{LaunchQuery, Pagination, Timeframe};
use crate::views::cards::{launch_cards, news_cards, LaunchCard, NewsCard};
use crate::views::{
    sections_data, AnalyticsView, CatalogPage, CatalogView, LiveView, Settled, ViewStatus,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

/// Snapshots held by the server between refreshes
pub struct Views {
    pub dashboard: LiveView<Dashboard>,
    pub rockets: CatalogView<Rocket, RocketFilter>,
    pub satellites: CatalogView<Satellite, SatelliteFilter>,
    pub organizations: CatalogView<Organization, OrganizationFilter>,
    pub missions: CatalogView<Mission, MissionFilter>,
    pub news: CatalogView<NewsArticle, NewsFilter>,
    pub analytics: AnalyticsView,
}

impl Views {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            dashboard: LiveView::empty("dashboard"),
            rockets: CatalogView::new("rockets", Some(config.page_sizes.rockets)),
            satellites: CatalogView::new("satellites", None),
            organizations: CatalogView::new("organizations", None),
            missions: CatalogView::new("missions", None),
            news: CatalogView::new("news", None),
            analytics: AnalyticsView::new(config.wide_viewport_min_width, 0),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<SpaceApiClient>,
    pub views: Arc<Views>,
    pub config: Arc<AppConfig>,
}

/// Outcome of one refresh round, per view
#[derive(Debug, Clone, Serialize)]
pub struct Refreshed {
    pub dashboard: Settled,
    pub rockets: Settled,
    pub satellites: Settled,
    pub organizations: Settled,
    pub missions: Settled,
    pub news: Settled,
    pub analytics: Settled,
}

impl AppState {
    pub fn new(client: Arc<SpaceApiClient>, config: AppConfig) -> Self {
        Self {
            client,
            views: Arc::new(Views::new(&config)),
            config: Arc::new(config),
        }
    }

    pub async fn refresh_dashboard(&self) -> Settled {
        self.views.dashboard.load(self.client.dashboard()).await
    }

    /// Re-fetch every collection concurrently; each settles on its own
    pub async fn refresh_catalog(&self) -> [Settled; 5] {
        let views = &self.views;
        let client = &self.client;
        let (rockets, satellites, organizations, missions, news) = tokio::join!(
            views.rockets.load(client.rockets()),
            views.satellites.load(client.satellites()),
            views.organizations.load(client.organizations()),
            views.missions.load(client.missions()),
            views.news.load(client.news()),
        );
        [rockets, satellites, organizations, missions, news]
    }

    pub async fn refresh_analytics(&self) -> Settled {
        self.views.analytics.load(self.client.analytics()).await
    }

    pub async fn refresh_all(&self) -> Refreshed {
        let (dashboard, catalog, analytics) = tokio::join!(
            self.refresh_dashboard(),
            self.refresh_catalog(),
            self.refresh_analytics(),
        );
        let [rockets, satellites, organizations, missions, news] = catalog;
        Refreshed {
            dashboard,
            rockets,
            satellites,
            organizations,
            missions,
            news,
            analytics,
        }
    }
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

type Reply<T> = Result<Json<SuccessResponse<T>>, ApiError>;

fn reply<T: Serialize>(data: T) -> Reply<T> {
    Ok(Json(SuccessResponse::new(data)))
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

#[derive(Serialize)]
pub struct DashboardBody {
    pub stats: crate::domain::DashboardStats,
    pub upcoming_launches: Vec<LaunchCard>,
    pub recent_news: Vec<NewsCard>,
    pub featured_rockets: Vec<Rocket>,
    pub featured_satellites: Vec<Satellite>,
    pub view: ViewStatus,
}

pub async fn get_dashboard(State(state): State<AppState>) -> Reply<DashboardBody> {
    let dashboard = state.views.dashboard.snapshot().await;
    reply(DashboardBody {
        stats: dashboard.stats,
        upcoming_launches: launch_cards(dashboard.upcoming_launches),
        recent_news: news_cards(dashboard.recent_news, Utc::now()),
        featured_rockets: dashboard.featured_rockets,
        featured_satellites: dashboard.featured_satellites,
        view: state.views.dashboard.status().await,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LaunchesParams {
    pub page: Option<u32>,
    pub search: String,
    pub status: Option<LaunchStatus>,
    #[serde(rename = "type")]
    pub timeframe: Option<Timeframe>,
}

#[derive(Serialize)]
pub struct LaunchesBody {
    pub launches: Vec<LaunchCard>,
    pub pagination: Pagination,
}

/// One server-side page of launches, fetched per request
pub async fn list_launches(
    Query(params): Query<LaunchesParams>,
    State(state): State<AppState>,
) -> Reply<LaunchesBody> {
    let query = LaunchQuery {
        page: params.page.unwrap_or(1).max(1),
        per_page: state.config.page_sizes.launches,
        search: params.search,
        status: params.status,
        timeframe: params.timeframe,
    };
    let page = state.client.launches(&query).await?;
    reply(LaunchesBody {
        launches: launch_cards(page.launches),
        pagination: page.pagination,
    })
}

pub async fn get_launch(
    Path(id): Path<Id>,
    State(state): State<AppState>,
) -> Reply<LaunchCard> {
    let launch = state.client.launch(id).await?;
    reply(LaunchCard::from(launch))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageParams {
    pub page: Option<usize>,
}

/// A filtered collection page with its dropdown choices
#[derive(Serialize)]
pub struct CollectionBody<T: Serialize, O: Serialize> {
    #[serde(flatten)]
    pub page: CatalogPage<T>,
    pub options: O,
    pub view: ViewStatus,
}

pub async fn list_rockets(
    Query(filter): Query<RocketFilter>,
    Query(cursor): Query<PageParams>,
    State(state): State<AppState>,
) -> Reply<CollectionBody<Rocket, RocketOptions>> {
    let view = &state.views.rockets;
    let page = view.query(&filter, cursor.page.unwrap_or(1)).await;
    let options = view.live().read(|items| RocketFilter::options(items)).await;
    reply(CollectionBody {
        page,
        options,
        view: view.status().await,
    })
}

pub async fn get_rocket(Path(id): Path<Id>, State(state): State<AppState>) -> Reply<Rocket> {
    reply(state.client.rocket(id).await?)
}

pub async fn list_satellites(
    Query(filter): Query<SatelliteFilter>,
    State(state): State<AppState>,
) -> Reply<CollectionBody<Satellite, SatelliteOptions>> {
    let view = &state.views.satellites;
    let page = view.query(&filter, 1).await;
    let options = view.live().read(|items| SatelliteFilter::options(items)).await;
    reply(CollectionBody {
        page,
        options,
        view: view.status().await,
    })
}

pub async fn get_satellite(Path(id): Path<Id>, State(state): State<AppState>) -> Reply<Satellite> {
    reply(state.client.satellite(id).await?)
}

pub async fn list_organizations(
    Query(filter): Query<OrganizationFilter>,
    State(state): State<AppState>,
) -> Reply<CollectionBody<Organization, OrganizationOptions>> {
    let view = &state.views.organizations;
    let page = view.query(&filter, 1).await;
    let options = view
        .live()
        .read(|items| OrganizationFilter::options(items))
        .await;
    reply(CollectionBody {
        page,
        options,
        view: view.status().await,
    })
}

pub async fn get_organization(
    Path(id): Path<Id>,
    State(state): State<AppState>,
) -> Reply<Organization> {
    reply(state.client.organization(id).await?)
}

#[derive(Serialize)]
pub struct MissionsBody {
    #[serde(flatten)]
    pub page: CatalogPage<Mission>,
    pub counts: StatusCounts,
    pub view: ViewStatus,
}

pub async fn list_missions(
    Query(filter): Query<MissionFilter>,
    State(state): State<AppState>,
) -> Reply<MissionsBody> {
    let view = &state.views.missions;
    let page = view.query(&filter, 1).await;
    let counts = view.live().read(|items| status_counts(items)).await;
    reply(MissionsBody {
        page,
        counts,
        view: view.status().await,
    })
}

pub async fn list_news(
    Query(filter): Query<NewsFilter>,
    State(state): State<AppState>,
) -> Reply<CollectionBody<NewsCard, NewsOptions>> {
    let view = &state.views.news;
    let page = view.query(&filter, 1).await;
    let options = view.live().read(|items| NewsFilter::options(items)).await;
    let now = Utc::now();
    reply(CollectionBody {
        page: CatalogPage {
            items: news_cards(page.items, now),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_count: page.total_count,
            source_count: page.source_count,
        },
        options,
        view: view.status().await,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyticsParams {
    pub tab: Option<Section>,
    pub width: Option<u32>,
}

#[derive(Serialize)]
pub struct AnalyticsBody {
    pub tab: Section,
    pub viewport: ViewportClass,
    pub sections: Vec<Section>,
    pub overview: crate::domain::analytics::OverviewMetrics,
    pub data: Map<String, Value>,
    pub view: ViewStatus,
}

/// Analytics sections visible for a tab at a given width
pub async fn get_analytics(
    Query(params): Query<AnalyticsParams>,
    State(state): State<AppState>,
) -> Reply<AnalyticsBody> {
    let view = &state.views.analytics;
    let tab = params.tab.unwrap_or_default();
    let viewport = params.width.map_or(ViewportClass::Compact, |w| {
        ViewportClass::for_width(w, state.config.wide_viewport_min_width)
    });
    let sections = visible_sections(tab, viewport);
    let data = view
        .live()
        .read(|snapshot| sections_data(snapshot, &sections))
        .await;
    reply(AnalyticsBody {
        tab,
        viewport,
        sections,
        overview: view.overview().await,
        data,
        view: view.status().await,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CostEstimateRequest {
    pub rocket_id: Option<Id>,
    pub satellite_id: Option<Id>,
}

#[derive(Serialize)]
pub struct CostEstimateBody {
    pub estimate: Option<CostBreakdown>,
}

/// Run the estimator for a rocket/satellite pair; a missing pick yields no estimate
pub async fn estimate_cost(
    State(state): State<AppState>,
    Json(request): Json<CostEstimateRequest>,
) -> Reply<CostEstimateBody> {
    let estimate = state
        .views
        .analytics
        .estimate_pair(request.rocket_id, request.satellite_id)
        .await;
    reply(CostEstimateBody { estimate })
}

#[derive(Serialize)]
pub struct RefreshBody {
    pub refreshed: Refreshed,
}

/// Re-fetch every held snapshot
pub async fn refresh(State(state): State<AppState>) -> Reply<RefreshBody> {
    let refreshed = state.refresh_all().await;
    info!(?refreshed, "manual refresh finished");
    reply(RefreshBody { refreshed })
}
