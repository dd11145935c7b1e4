//! Route definitions for the share service.
//!
//! ## Routes
//!
//! - `GET /` - Home page
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `GET /share` - Share landing page (`?token=`)
//! - `GET /share/card.png` - Share card image (`?token=`)
//! - `POST /api/share` - Issue a share token

mod card;
mod health;
mod home;
mod issue;
mod landing;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::{get, post};

use crate::error::ShareError;
use crate::state::AppState;

/// Build the complete share service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/share", get(landing::landing_handler))
        .route("/share/card.png", get(card::card_handler))
        .route("/api/share", post(issue::issue_handler))
        .with_state(state)
}

/// Query parameters for the token-keyed endpoints.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ShareQuery {
    pub(crate) token: Option<String>,
}

impl ShareQuery {
    /// The token, or `MissingToken` when absent or blank.
    pub(crate) fn token(&self) -> Result<&str, ShareError> {
        match self.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ShareError::MissingToken),
        }
    }
}

/// Serve robots.txt allowing all crawlers.
///
/// Crawlers must be able to fetch share pages for link previews.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}
