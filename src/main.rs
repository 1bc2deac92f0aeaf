/// View server entry point
use space_views::clients::SpaceApiClient;
use space_views::config::AppConfig;
use space_views::handlers::AppState;
use space_views::routes::build_router;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!(api_url = %config.api_url, "Configuration loaded successfully");

    let client = Arc::new(SpaceApiClient::new(
        config.api_url.clone(),
        config.http_timeout,
    )?);
    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(client, config);

    // Start background tasks; each one loads its snapshot immediately
    start_background_tasks(state.clone());

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("space_views listening on {}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Run `refresh` now and then every `every_seconds`
fn spawn_refresh<F, Fut>(name: &'static str, every_seconds: u64, refresh: F)
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = bool> + Send,
{
    tokio::spawn(async move {
        info!("Starting {} refresh task (interval: {}s)", name, every_seconds);
        loop {
            if !refresh().await {
                warn!("{} refresh did not apply, keeping previous snapshot", name);
            }
            tokio::time::sleep(Duration::from_secs(every_seconds)).await;
        }
    });
}

/// Start all background refresh tasks
fn start_background_tasks(state: AppState) {
    let intervals = state.config.refresh_intervals.clone();

    {
        let state = state.clone();
        spawn_refresh("dashboard", intervals.dashboard_seconds, move || {
            let state = state.clone();
            async move { state.refresh_dashboard().await.is_applied() }
        });
    }

    {
        let state = state.clone();
        spawn_refresh("catalog", intervals.catalog_seconds, move || {
            let state = state.clone();
            async move {
                let outcomes = state.refresh_catalog().await;
                outcomes.iter().all(|s| s.is_applied())
            }
        });
    }

    spawn_refresh("analytics", intervals.analytics_seconds, move || {
        let state = state.clone();
        async move { state.refresh_analytics().await.is_applied() }
    });

    info!("All background tasks started successfully");
}
