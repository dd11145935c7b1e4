//! The authenticated content of a share token.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;

/// Compact, authenticated snapshot of an analysis result.
///
/// Field declaration order is the canonical serialization order:
/// `serde_json` writes struct fields exactly as declared, so the same
/// logical payload always serializes to byte-identical JSON, which is what
/// the signer and verifier both operate on.
///
/// Constructed once at issuance, never mutated, and fully described by its
/// token; there is no server-side record of it anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    /// Reliability score, 0-100.
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: i64,

    /// Short verdict text ("Reliable", "Partially Reliable", ...).
    #[serde(default)]
    pub verdict: String,

    /// Concise verification summary.
    #[serde(default)]
    pub summary: String,

    /// The text that was fact-checked.
    #[serde(default)]
    pub original_text: String,

    /// Base URL of the interactive app, used for the re-verification deep
    /// link on the landing page. Empty when the issuer supplied none.
    #[serde(default)]
    pub site_base_url: String,

    /// Query text the deep link pre-fills.
    #[serde(default)]
    pub query_text: String,

    /// Issuance time, milliseconds since the Unix epoch. Carried and
    /// displayed only; validation never enforces an expiry on it.
    #[serde(default)]
    pub issued_at_millis: i64,
}

impl SharePayload {
    /// Build a payload from a full analysis result.
    ///
    /// Embeds only the share subset; claims and sources stay behind in the
    /// interactive app.
    pub fn from_analysis(
        analysis: &AnalysisResult,
        site_base_url: &str,
        query_text: &str,
        issued_at_millis: i64,
    ) -> Self {
        Self {
            score: analysis.score,
            verdict: analysis.verdict.clone(),
            summary: analysis.summary.clone(),
            original_text: analysis.original_text.clone(),
            site_base_url: site_base_url.to_string(),
            query_text: query_text.to_string(),
            issued_at_millis,
        }
    }

    /// Clamp renderer-facing numeric fields into their documented ranges.
    ///
    /// Applied on the validate path, after signature verification: a
    /// structurally valid payload carrying an out-of-range score renders as
    /// 0 or 100 instead of crashing a renderer. Not part of cryptographic
    /// validity.
    #[must_use]
    pub fn clamp(mut self) -> Self {
        self.score = self.score.clamp(0, 100);
        self
    }
}

/// Accept a score serialized as a JSON number or a numeric string; anything
/// else (or a missing field) becomes 0. Range clamping happens separately
/// in [`SharePayload::clamp`].
fn lenient_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SharePayload {
        SharePayload {
            score: 92,
            verdict: "Reliable".to_string(),
            summary: "Confirmed by three independent outlets.".to_string(),
            original_text: "The sky is blue.".to_string(),
            site_base_url: "https://checksource.example".to_string(),
            query_text: "The sky is blue.".to_string(),
            issued_at_millis: 1_700_000_000_000,
        }
    }

    #[test]
    fn canonical_key_order_is_stable() {
        let json = serde_json::to_string(&sample()).unwrap();
        let positions: Vec<usize> = [
            "\"score\"",
            "\"verdict\"",
            "\"summary\"",
            "\"originalText\"",
            "\"siteBaseUrl\"",
            "\"queryText\"",
            "\"issuedAtMillis\"",
        ]
        .iter()
        .map(|key| json.find(key).expect(key))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn serialization_is_byte_identical_for_same_payload() {
        let a = serde_json::to_vec(&sample()).unwrap();
        let b = serde_json::to_vec(&sample()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn round_trips_through_json() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: SharePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn score_accepts_numeric_string() {
        let payload: SharePayload = serde_json::from_str(r#"{"score":"42"}"#).unwrap();
        assert_eq!(payload.score, 42);
    }

    #[test]
    fn score_accepts_float() {
        let payload: SharePayload = serde_json::from_str(r#"{"score":87.9}"#).unwrap();
        assert_eq!(payload.score, 87);
    }

    #[test]
    fn non_numeric_score_becomes_zero() {
        let payload: SharePayload = serde_json::from_str(r#"{"score":"high"}"#).unwrap();
        assert_eq!(payload.score, 0);
        let payload: SharePayload = serde_json::from_str(r#"{"score":true}"#).unwrap();
        assert_eq!(payload.score, 0);
    }

    #[test]
    fn missing_fields_default() {
        let payload: SharePayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.score, 0);
        assert!(payload.verdict.is_empty());
        assert_eq!(payload.issued_at_millis, 0);
    }

    #[test]
    fn clamp_forces_score_into_range() {
        let mut payload = sample();
        payload.score = -5;
        assert_eq!(payload.clamp().score, 0);

        let mut payload = sample();
        payload.score = 150;
        assert_eq!(payload.clamp().score, 100);

        assert_eq!(sample().clamp().score, 92);
    }

    #[test]
    fn from_analysis_embeds_share_subset() {
        let analysis = crate::analysis::AnalysisResult {
            id: "abc123".to_string(),
            original_text: "The sky is blue.".to_string(),
            timestamp: 1,
            score: 92,
            summary: "Confirmed by three independent outlets.".to_string(),
            verdict: "Reliable".to_string(),
            key_claims: vec![],
            sources: vec![],
        };
        let payload = SharePayload::from_analysis(
            &analysis,
            "https://checksource.example",
            "The sky is blue.",
            1_700_000_000_000,
        );
        assert_eq!(payload, sample());
    }
}
