use anyhow::{Context, Result};

/// Production site URL, used when `NEXT_PUBLIC_SITE_URL` is not set.
pub const DEFAULT_SITE_URL: &str = "https://www.aiseoturbo.com";

/// Title override file, relative to the working directory.
pub const DEFAULT_TITLES_CSV: &str = "all-page-titles-complete.csv";

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub site_url: String,

    // Localized title overrides
    pub titles_csv: String,

    // HTTP service
    pub port: u16,

    // Sitemap export
    pub sitemap_output: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            site_url: site_url_from_env(),

            titles_csv: std::env::var("SEO_TITLES_CSV")
                .unwrap_or_else(|_| DEFAULT_TITLES_CSV.to_string()),

            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 3000,
            },

            sitemap_output: std::env::var("SITEMAP_OUTPUT")
                .unwrap_or_else(|_| "public/sitemap.xml".to_string()),
        })
    }
}

/// Base URL for canonical and alternate links, without a trailing slash.
///
/// Empty values count as unset.
pub fn site_url_from_env() -> String {
    std::env::var("NEXT_PUBLIC_SITE_URL")
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["NEXT_PUBLIC_SITE_URL", "SEO_TITLES_CSV", "PORT", "SITEMAP_OUTPUT"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.site_url, "https://www.aiseoturbo.com");
        assert_eq!(config.titles_csv, "all-page-titles-complete.csv");
        assert_eq!(config.port, 3000);
        assert_eq!(config.sitemap_output, "public/sitemap.xml");
    }

    #[test]
    #[serial]
    fn test_site_url_override_trims_trailing_slash() {
        clear_env();
        std::env::set_var("NEXT_PUBLIC_SITE_URL", "https://staging.example.com/");

        assert_eq!(site_url_from_env(), "https://staging.example.com");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_site_url_uses_default() {
        clear_env();
        std::env::set_var("NEXT_PUBLIC_SITE_URL", "  ");

        assert_eq!(site_url_from_env(), DEFAULT_SITE_URL);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));
        clear_env();
    }
}
