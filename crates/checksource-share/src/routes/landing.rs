//! Share landing page endpoint.
//!
//! Validates the token and renders the public HTML page with social
//! metadata. The page embeds absolute URLs derived from the live request's
//! scheme and authority, so the cache key and the cache lifetime both
//! account for the origin.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::ShareError;
use crate::render;
use crate::render::components::CSP_HEADER;
use crate::state::AppState;

use super::ShareQuery;

/// Handle a request for a share landing page.
///
/// Route: `GET /share?token=...`
pub async fn landing_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ShareQuery>,
) -> Result<Response, ShareError> {
    let token = query.token()?;
    let (scheme, authority) = request_origin(&headers);

    let cache_key = format!("{scheme}://{authority}|{token}");
    if let Some(cached) = state.page_cache.get(&cache_key).await {
        tracing::debug!("share page cache hit");
        return Ok(build_response(&cached));
    }

    let payload = state.tokens.validate(token)?;
    let markup = render::landing::render_landing(
        &payload,
        token,
        &scheme,
        &authority,
        &state.config.site_name,
    );
    let html = markup.into_string();

    state.page_cache.insert(cache_key, html.clone()).await;

    Ok(build_response(&html))
}

/// Scheme and authority of the live request.
///
/// Honors `X-Forwarded-Proto`/`X-Forwarded-Host` (first value wins when a
/// proxy chain appends several), falling back to the `Host` header.
fn request_origin(headers: &HeaderMap) -> (String, String) {
    let scheme =
        forwarded_value(headers, "x-forwarded-proto").unwrap_or_else(|| "http".to_string());

    let authority = forwarded_value(headers, "x-forwarded-host")
        .or_else(|| {
            headers
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
        .unwrap_or_else(|| "localhost".to_string());

    (scheme, authority)
}

/// First comma-separated value of a forwarding header, if any.
fn forwarded_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(name)?.to_str().ok()?;
    let first = raw.split(',').next()?.trim();
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

/// Build an HTTP response with HTML content and security/cache headers.
fn build_response(html: &str) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    // Short cache lifetime: the page embeds host-derived absolute URLs.
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=60, s-maxage=300"),
    );

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    (StatusCode::OK, headers, html.to_string()).into_response()
}
