/// Application configuration module
use anyhow::Context;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/v1";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: String,
    pub bind_addr: String,
    pub http_timeout: Duration,
    pub page_sizes: PageSizes,
    pub wide_viewport_min_width: u32,
    pub refresh_intervals: RefreshIntervals,
}

#[derive(Clone, Debug)]
pub struct PageSizes {
    pub launches: u32,
    pub rockets: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            launches: 12,
            rockets: 9,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RefreshIntervals {
    pub dashboard_seconds: u64,
    pub catalog_seconds: u64,
    pub analytics_seconds: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let raw_url = env::var("SPACE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = normalize_base_url(&raw_url)?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let page_sizes = PageSizes {
            launches: env_page_size("LAUNCHES_PER_PAGE", 12),
            rockets: usize::try_from(env_page_size("ROCKETS_PER_PAGE", 9)).unwrap_or(9),
        };

        let refresh_intervals = RefreshIntervals {
            dashboard_seconds: env_u64("DASHBOARD_EVERY_SECONDS", 60),
            catalog_seconds: env_u64("CATALOG_EVERY_SECONDS", 600),
            analytics_seconds: env_u64("ANALYTICS_EVERY_SECONDS", 1800), // 30m
        };

        Ok(Self {
            api_url,
            bind_addr,
            http_timeout: Duration::from_secs(env_u64("HTTP_TIMEOUT_SECONDS", 30)),
            page_sizes,
            wide_viewport_min_width: env_u32("WIDE_VIEWPORT_MIN_WIDTH", 1024),
            refresh_intervals,
        })
    }
}

/// Validate the API base URL and strip any trailing slash
pub fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = reqwest::Url::parse(trimmed)
        .with_context(|| format!("SPACE_API_URL is not a valid URL: {raw}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("SPACE_API_URL must be http or https, got {}", parsed.scheme());
    }
    Ok(trimmed.to_string())
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Values that overflow `u32` fall back to the default
fn env_u32(key: &str, default: u32) -> u32 {
    u32::try_from(env_u64(key, u64::from(default))).unwrap_or(default)
}

fn env_page_size(key: &str, default: u32) -> u32 {
    env_u32(key, default).max(1)
}
