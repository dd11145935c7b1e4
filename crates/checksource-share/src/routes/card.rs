//! Share card image endpoint.
//!
//! Validates the token from the query string and renders (or serves a
//! cached copy of) the card PNG. Cards are pure functions of the token, so
//! long shared-cache lifetimes are safe.

use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::ShareError;
use crate::render;
use crate::state::AppState;

use super::ShareQuery;

/// Handle a request for a share card image.
///
/// Route: `GET /share/card.png?token=...`
pub async fn card_handler(
    State(state): State<AppState>,
    Query(query): Query<ShareQuery>,
) -> Result<Response, ShareError> {
    let token = query.token()?;

    if let Some(cached) = state.card_cache.get(token).await {
        tracing::debug!("share card cache hit");
        return Ok(png_response(&cached));
    }

    let payload = state.tokens.validate(token)?;
    let png_bytes = render::card::render_card(&payload, &state.config.site_name)?;

    state
        .card_cache
        .insert(token.to_string(), png_bytes.clone())
        .await;

    Ok(png_response(&png_bytes))
}

/// Build an HTTP response with PNG content and cache headers.
fn png_response(png_bytes: &[u8]) -> Response {
    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("image/png")),
        (
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600, s-maxage=86400"),
        ),
    ];

    (StatusCode::OK, headers, png_bytes.to_vec()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use checksource_core::SharePayload;

    fn test_state(secret: &str) -> AppState {
        AppState::new(Config {
            bind_addr: "127.0.0.1:0".to_string(),
            secret: secret.to_string(),
            base_url: "http://localhost:8080".to_string(),
            site_name: "checkSourceAI".to_string(),
        })
    }

    fn issued_token(state: &AppState) -> String {
        let payload = SharePayload {
            score: 92,
            verdict: "Reliable".to_string(),
            summary: "Confirmed by three independent outlets.".to_string(),
            original_text: "The sky is blue.".to_string(),
            site_base_url: String::new(),
            query_text: String::new(),
            issued_at_millis: 1_700_000_000_000,
        };
        state.tokens.issue(&payload).unwrap()
    }

    async fn get_card(state: AppState, token: Option<&str>) -> Response {
        let query = ShareQuery {
            token: token.map(str::to_string),
        };
        match card_handler(State(state), Query(query)).await {
            Ok(response) => response,
            Err(err) => err.into_response(),
        }
    }

    #[tokio::test]
    async fn valid_token_returns_png() {
        let state = test_state("k1");
        let token = issued_token(&state);
        let response = get_card(state, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
        assert!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .unwrap()
                .to_str()
                .unwrap()
                .contains("max-age=3600")
        );
    }

    #[tokio::test]
    async fn missing_token_is_bad_request() {
        let response = get_card(test_state("k1"), None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn mutated_token_is_bad_request() {
        let state = test_state("k1");
        let mut token = issued_token(&state);
        // Flip one character in the signature segment.
        let flipped = if token.ends_with('A') { 'B' } else { 'A' };
        token.pop();
        token.push(flipped);
        let response = get_card(state, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cross_secret_token_is_bad_request() {
        let issuer = test_state("k1");
        let token = issued_token(&issuer);
        let response = get_card(test_state("k2"), Some(&token)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn disabled_secret_rejects_every_token() {
        let issuer = test_state("k1");
        let token = issued_token(&issuer);
        let response = get_card(test_state(""), Some(&token)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
