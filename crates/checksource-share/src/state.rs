//! Application state shared across all request handlers.

use std::sync::Arc;

use checksource_core::{Signer, TokenService};
use moka::future::Cache;

use crate::config::Config;

/// Type alias for the card image cache (token -> PNG bytes).
pub type CardCache = Cache<String, Vec<u8>>;

/// Type alias for the landing page cache (origin + token -> HTML).
pub type PageCache = Cache<String, String>;

/// Card cache capacity. Each card is a ~20-60KB PNG.
const CARD_CACHE_CAPACITY: u64 = 10_000;

/// Card cache TTL. Cards are pure functions of the token, so this is
/// purely a memory bound, not a freshness concern.
const CARD_CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(3600);

/// Landing page cache capacity. Each entry is a few KB of HTML.
const PAGE_CACHE_CAPACITY: u64 = 50_000;

/// Landing page cache TTL. Kept short to match the response cache headers;
/// the page embeds the request host in absolute URLs.
const PAGE_CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(300);

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Token issue/validate service, keyed once at startup.
    pub tokens: Arc<TokenService>,

    /// In-memory card PNG cache keyed by token.
    pub card_cache: CardCache,

    /// In-memory landing HTML cache keyed by origin and token.
    pub page_cache: PageCache,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// The signing secret is consumed here, once; nothing else reads it
    /// for the lifetime of the process.
    pub fn new(config: Config) -> Self {
        let tokens = TokenService::new(Signer::from_secret(&config.secret));

        if !tokens.is_enabled() {
            tracing::warn!("SHARE_SECRET is empty; share tokens are disabled");
        }

        let card_cache = Cache::builder()
            .max_capacity(CARD_CACHE_CAPACITY)
            .time_to_live(CARD_CACHE_TTL)
            .build();

        let page_cache = Cache::builder()
            .max_capacity(PAGE_CACHE_CAPACITY)
            .time_to_live(PAGE_CACHE_TTL)
            .build();

        tracing::info!(
            card_cache_capacity = CARD_CACHE_CAPACITY,
            card_cache_ttl_secs = CARD_CACHE_TTL.as_secs(),
            page_cache_capacity = PAGE_CACHE_CAPACITY,
            page_cache_ttl_secs = PAGE_CACHE_TTL.as_secs(),
            "application state initialized"
        );

        Self {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            card_cache,
            page_cache,
        }
    }
}
