//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// HMAC signing secret for share tokens.
    ///
    /// Empty disables the whole share subsystem (fail-closed): issuance
    /// responds "sharing unavailable" and every token is rejected.
    pub secret: String,

    /// Base URL the issuance endpoint uses to build absolute share links.
    /// The validate/render path never uses it; those derive the origin
    /// from the live request.
    pub base_url: String,

    /// Site name shown in page titles, OG tags, and the card wordmark.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional (all have defaults for local development):
    /// - `SHARE_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `SHARE_SECRET`: Token signing secret (default: empty = disabled)
    /// - `SHARE_BASE_URL`: Base URL for issued links (default: "http://localhost:8080")
    /// - `SHARE_SITE_NAME`: Site name (default: "checkSourceAI")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("SHARE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let secret = std::env::var("SHARE_SECRET").unwrap_or_default();

        let base_url = std::env::var("SHARE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("SHARE_SITE_NAME").unwrap_or_else(|_| "checkSourceAI".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            base_url = %base_url,
            site_name = %site_name,
            signing_enabled = !secret.is_empty(),
            "share configuration loaded"
        );

        Ok(Self {
            bind_addr,
            secret,
            base_url,
            site_name,
        })
    }
}
