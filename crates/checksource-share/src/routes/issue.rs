//! Share token issuance endpoint.
//!
//! The interactive app posts a completed analysis result here and gets
//! back a signed token plus absolute share URLs. This is the only place
//! that stamps `issuedAtMillis`; the token itself is never stored.

use axum::Json;
use axum::extract::State;
use checksource_core::{AnalysisResult, SharePayload};
use serde::{Deserialize, Serialize};

use crate::error::ShareError;
use crate::state::AppState;

/// Issuance request: the analysis result plus optional deep-link fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    #[serde(flatten)]
    pub analysis: AnalysisResult,

    /// Base URL of the interactive app for the landing page's
    /// re-verification link; empty omits the link.
    #[serde(default)]
    pub site_base_url: String,

    /// Text the deep link pre-fills; defaults to the original text.
    #[serde(default)]
    pub query_text: Option<String>,
}

/// Issuance response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub token: String,
    pub page_url: String,
    pub image_url: String,
}

/// Handle a share token issuance request.
///
/// Route: `POST /api/share`
pub async fn issue_handler(
    State(state): State<AppState>,
    Json(request): Json<ShareRequest>,
) -> Result<Json<ShareResponse>, ShareError> {
    let issued_at_millis = chrono::Utc::now().timestamp_millis();
    let query_text = request
        .query_text
        .unwrap_or_else(|| request.analysis.original_text.clone());

    let payload = SharePayload::from_analysis(
        &request.analysis,
        &request.site_base_url,
        &query_text,
        issued_at_millis,
    );

    let token = state
        .tokens
        .issue(&payload)
        .ok_or(ShareError::SharingDisabled)?;

    tracing::debug!(score = payload.score, "issued share token");

    let base = &state.config.base_url;
    Ok(Json(ShareResponse {
        page_url: format!("{base}/share?token={token}"),
        image_url: format!("{base}/share/card.png?token={token}"),
        token,
    }))
}
