/// Space-data REST API client
use crate::domain::analytics::{
    AnalyticsSnapshot, AstronautStats, CostEstimatorInputs, HumanSpaceMission, LaunchSuccessRate,
    LaunchTrend, MissionFamilyNode, MissionProgress, MissionTimelineEntry, OrbitDistribution,
    OrganizationPerformance, RocketPayload,
};
use crate::domain::{
    Dashboard, Id, Launch, LaunchPage, Mission, NewsArticle, Organization, Rocket, Satellite,
};
use crate::errors::{ApiError, ApiResult};
use crate::pagination::{LaunchQuery, Pagination};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub mod envelope;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("space-views/0.1")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Typed access to every endpoint under the API base URL
pub struct SpaceApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl SpaceApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let base_url: String = base_url.into();
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Value> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");

        let resp = self
            .http_client
            .get_client()
            .get(&url)
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(endpoint = path, status = status.as_u16(), "upstream request failed");
            if status == StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound(path.to_string()));
            }
            return Err(ApiError::UpstreamStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::decode(path, e))
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, path: &str, key: &str) -> ApiResult<Vec<T>> {
        let body = self.get_json(path, &[]).await?;
        envelope::collection(path, body, key)
    }

    async fn fetch_resource<T: DeserializeOwned>(&self, path: &str, key: &str) -> ApiResult<T> {
        let body = self.get_json(path, &[]).await?;
        envelope::resource(path, body, key)
    }

    /// Landing page aggregate
    pub async fn dashboard(&self) -> ApiResult<Dashboard> {
        self.fetch_resource("dashboard", "dashboard").await
    }

    /// One server-side page of launches
    pub async fn launches(&self, query: &LaunchQuery) -> ApiResult<LaunchPage> {
        let path = "launches";
        let body = self.get_json(path, &query.to_query_pairs()).await?;

        let pagination = body
            .get("pagination")
            .filter(|p| !p.is_null())
            .map(|p| serde_json::from_value::<Pagination>(p.clone()))
            .transpose()
            .map_err(|e| ApiError::decode(path, e))?;
        let launches: Vec<Launch> = envelope::collection(path, body, "launches")?;

        // Unpaged answers are treated as a single page
        let pagination = pagination.unwrap_or_else(|| Pagination {
            current_page: query.page.max(1),
            total_pages: 1,
            total_count: launches.len() as u64,
            per_page: query.per_page,
        });

        Ok(LaunchPage {
            launches,
            pagination,
        })
    }

    pub async fn launch(&self, id: Id) -> ApiResult<Launch> {
        self.fetch_resource(&format!("launches/{id}"), "launch").await
    }

    pub async fn rockets(&self) -> ApiResult<Vec<Rocket>> {
        self.fetch_collection("rockets", "rockets").await
    }

    pub async fn rocket(&self, id: Id) -> ApiResult<Rocket> {
        self.fetch_resource(&format!("rockets/{id}"), "rocket").await
    }

    pub async fn satellites(&self) -> ApiResult<Vec<Satellite>> {
        self.fetch_collection("satellites", "satellites").await
    }

    pub async fn satellite(&self, id: Id) -> ApiResult<Satellite> {
        self.fetch_resource(&format!("satellites/{id}"), "satellite").await
    }

    pub async fn organizations(&self) -> ApiResult<Vec<Organization>> {
        self.fetch_collection("organizations", "organizations").await
    }

    pub async fn organization(&self, id: Id) -> ApiResult<Organization> {
        self.fetch_resource(&format!("organizations/{id}"), "organization")
            .await
    }

    pub async fn missions(&self) -> ApiResult<Vec<Mission>> {
        self.fetch_collection("space_missions", "space_missions").await
    }

    pub async fn news(&self) -> ApiResult<Vec<NewsArticle>> {
        self.fetch_collection("news", "news").await
    }

    pub async fn launch_success_rates(&self) -> ApiResult<Vec<LaunchSuccessRate>> {
        self.fetch_collection("dashboard/launch_success_rates", "data")
            .await
    }

    pub async fn top_rockets_by_payload(&self) -> ApiResult<Vec<RocketPayload>> {
        self.fetch_collection("dashboard/top_rockets_by_payload", "data")
            .await
    }

    pub async fn mission_cost_estimator(&self) -> ApiResult<CostEstimatorInputs> {
        self.fetch_resource("dashboard/mission_cost_estimator", "mission_cost_estimator")
            .await
    }

    pub async fn human_space_missions(&self) -> ApiResult<Vec<HumanSpaceMission>> {
        self.fetch_collection("dashboard/human_space_missions", "data")
            .await
    }

    pub async fn astronaut_statistics(&self) -> ApiResult<AstronautStats> {
        self.fetch_resource("dashboard/astronaut_statistics", "astronaut_statistics")
            .await
    }

    pub async fn launch_trends(&self) -> ApiResult<Vec<LaunchTrend>> {
        self.fetch_collection("dashboard/launch_trends", "data").await
    }

    pub async fn organization_performance(&self) -> ApiResult<Vec<OrganizationPerformance>> {
        self.fetch_collection("dashboard/organization_performance", "data")
            .await
    }

    pub async fn mission_progress(&self) -> ApiResult<Vec<MissionProgress>> {
        self.fetch_collection("dashboard/mission_progress_visualization", "data")
            .await
    }

    pub async fn mission_timeline(&self) -> ApiResult<Vec<MissionTimelineEntry>> {
        self.fetch_collection("dashboard/mission_timeline_visualization", "data")
            .await
    }

    pub async fn orbit_distribution(&self) -> ApiResult<OrbitDistribution> {
        self.fetch_resource("dashboard/orbit_distribution", "orbit_distribution")
            .await
    }

    pub async fn mission_family_tree(&self) -> ApiResult<Vec<MissionFamilyNode>> {
        self.fetch_collection("dashboard/mission_family_tree", "data")
            .await
    }

    /// All eleven analytics views, fetched concurrently; any failure fails the whole set
    pub async fn analytics(&self) -> ApiResult<AnalyticsSnapshot> {
        let (
            launch_success_rates,
            top_rockets_by_payload,
            cost_estimator,
            human_space_missions,
            astronaut_statistics,
            launch_trends,
            organization_performance,
            mission_progress,
            mission_timeline,
            orbit_distribution,
            mission_family_tree,
        ) = tokio::try_join!(
            self.launch_success_rates(),
            self.top_rockets_by_payload(),
            self.mission_cost_estimator(),
            self.human_space_missions(),
            self.astronaut_statistics(),
            self.launch_trends(),
            self.organization_performance(),
            self.mission_progress(),
            self.mission_timeline(),
            self.orbit_distribution(),
            self.mission_family_tree(),
        )?;

        Ok(AnalyticsSnapshot {
            launch_success_rates,
            top_rockets_by_payload,
            cost_estimator: Some(cost_estimator),
            human_space_missions,
            astronaut_statistics: Some(astronaut_statistics),
            launch_trends,
            organization_performance,
            mission_progress,
            mission_timeline,
            orbit_distribution: Some(orbit_distribution),
            mission_family_tree,
        })
    }
}
