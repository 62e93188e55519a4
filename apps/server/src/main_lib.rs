use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::config::Config;
use paydeck_core::platform::PlatformGateway;
use paydeck_core::{DetailGateway, DetailService, FallbackCatalog};
use paydeck_platform_api::PlatformClient;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    /// Gateway shared by every detail session
    pub gateway: Arc<dyn DetailGateway>,
    /// Seed data injected into each session's aggregator
    pub fallbacks: FallbackCatalog,
    /// Live detail sessions keyed by session id
    pub sessions: RwLock<HashMap<String, Arc<DetailService>>>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!("Platform API base URL: {}", config.platform_api_url);
    let client = PlatformClient::new(&config.platform_api_url);
    let gateway: Arc<dyn DetailGateway> = Arc::new(PlatformGateway::new(client));

    Ok(Arc::new(AppState {
        gateway,
        fallbacks: FallbackCatalog::default(),
        sessions: RwLock::new(HashMap::new()),
    }))
}
