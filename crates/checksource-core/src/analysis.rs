//! Analysis-result records produced by the external verification step.
//!
//! The AI fact-check call itself lives outside this crate; these types are
//! the contract it returns, and the wire names match the JSON the
//! interactive app already stores client-side.

use serde::{Deserialize, Serialize};

/// One claim extracted from the content and cross-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimVerification {
    /// The claim as stated in the content.
    pub claim: String,
    /// Whether the verifier could confirm it.
    pub is_verified: bool,
    /// Short explanation of the finding.
    pub explanation: String,
}

/// A grounding source cited by the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    pub title: String,
}

/// Full result of one verification run.
///
/// The share subsystem embeds only the subset carried by
/// [`crate::SharePayload`]; claims and sources stay in the interactive app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Client-side identifier, opaque to this crate.
    #[serde(default)]
    pub id: String,

    /// The text that was fact-checked.
    pub original_text: String,

    /// When the analysis ran, milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: i64,

    /// Reliability score, 0-100.
    pub score: i64,

    /// Concise summary of the verification results.
    pub summary: String,

    /// One of "Reliable", "Partially Reliable", "Unreliable", "Fictional"
    /// in practice, though free text is tolerated everywhere downstream.
    pub verdict: String,

    /// Individual claims and their verification status.
    #[serde(default)]
    pub key_claims: Vec<ClaimVerification>,

    /// Deduplicated grounding sources.
    #[serde(default)]
    pub sources: Vec<Source>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_collaborator_json() {
        let json = r#"{
            "id": "k3x9a",
            "originalText": "The sky is blue.",
            "timestamp": 1700000000000,
            "score": 92,
            "summary": "Confirmed.",
            "verdict": "Reliable",
            "keyClaims": [
                {"claim": "Sky is blue", "isVerified": true, "explanation": "Observed."}
            ],
            "sources": [{"url": "https://example.com", "title": "Example"}]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.score, 92);
        assert_eq!(result.key_claims.len(), 1);
        assert!(result.key_claims[0].is_verified);
        assert_eq!(result.sources[0].title, "Example");
    }

    #[test]
    fn claims_and_sources_default_empty() {
        let json = r#"{
            "originalText": "x",
            "score": 10,
            "summary": "s",
            "verdict": "Unreliable"
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.key_claims.is_empty());
        assert!(result.sources.is_empty());
        assert!(result.id.is_empty());
    }
}
