use aiseoturbo_seo::config::Config;
use aiseoturbo_seo::seo::SeoContext;
use aiseoturbo_seo::server::{router, AppState};
use anyhow::{Context, Result};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("aiseoturbo_seo=info".parse()?),
        )
        .init();

    info!("Starting AISEOTurbo SEO service");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("Site URL: {}", config.site_url);

    // Load localized titles up front
    let seo = SeoContext::from_config(&config);
    let titles = seo.titles.len();
    if titles == 0 {
        warn!("No localized titles loaded from {}", config.titles_csv);
    } else {
        info!("Loaded localized titles for {} pages", titles);
    }

    let app = router(AppState::new(seo));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
