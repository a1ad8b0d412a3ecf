use aiseoturbo_seo::{config::Config, seo::Sitemap};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("export_sitemap=info".parse()?)
                .add_directive("aiseoturbo_seo=info".parse()?),
        )
        .init();

    info!("Starting sitemap export");

    let config = Config::from_env()?;
    let sitemap = Sitemap::for_site(&config.site_url);

    let output_path = Path::new(&config.sitemap_output);
    sitemap
        .write(output_path)
        .with_context(|| format!("Failed to write sitemap to {}", output_path.display()))?;

    info!("✓ Exported {} URLs to {}", sitemap.len(), output_path.display());

    Ok(())
}
