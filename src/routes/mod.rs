/// Application routes configuration
use crate::handlers::{
    estimate_cost, get_analytics, get_dashboard, get_launch, get_organization, get_rocket,
    get_satellite, health, list_launches, list_missions, list_news, list_organizations,
    list_rockets, list_satellites, refresh, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        .route("/dashboard", get(get_dashboard))
        // Launches are paged upstream
        .route("/launches", get(list_launches))
        .route("/launches/:id", get(get_launch))
        // Collections served from held snapshots
        .route("/rockets", get(list_rockets))
        .route("/rockets/:id", get(get_rocket))
        .route("/satellites", get(list_satellites))
        .route("/satellites/:id", get(get_satellite))
        .route("/organizations", get(list_organizations))
        .route("/organizations/:id", get(get_organization))
        .route("/missions", get(list_missions))
        .route("/news", get(list_news))
        // Analytics
        .route("/analytics", get(get_analytics))
        .route("/analytics/cost-estimate", post(estimate_cost))
        .route("/refresh", post(refresh))
        .with_state(state)
}
