//! Payload ⇄ token translation.
//!
//! Wire format: `base64url(payload JSON) + "." + base64url(HMAC-SHA256)`.
//! Tokens are created on demand and never stored; validity is purely a
//! function of the token string and the configured secret.

use crate::codec;
use crate::payload::SharePayload;
use crate::signer::Signer;

/// Why a token failed validation.
///
/// The distinction exists for logging and tests only. HTTP surfaces
/// collapse every variant into one short, non-leaking 400 response, since
/// telling an unauthenticated caller *how* a token failed would aid
/// forgery attempts.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// No signing secret is configured; issuing and validating are both
    /// disabled.
    #[error("share tokens are disabled: no signing secret configured")]
    Disabled,

    /// Wrong structural shape: not two non-empty dot-separated segments,
    /// or a segment outside the base64url alphabet.
    #[error("malformed token")]
    Malformed,

    /// Structurally valid, but the signature does not authenticate the
    /// body under the configured secret.
    #[error("token signature mismatch")]
    SignatureMismatch,

    /// Authenticated, but the body bytes do not parse as a payload.
    #[error("token payload did not parse: {0}")]
    PayloadParse(#[from] serde_json::Error),
}

/// Issues and validates signed share tokens.
///
/// Stateless apart from the injected signer. Construct one per secret;
/// tests build several side by side to exercise rotation and cross-secret
/// rejection.
#[derive(Clone)]
pub struct TokenService {
    signer: Option<Signer>,
}

impl TokenService {
    /// Build a service around an already-constructed signer, or none when
    /// signing is disabled.
    pub fn new(signer: Option<Signer>) -> Self {
        Self { signer }
    }

    /// Convenience constructor straight from a configured secret string.
    /// An empty secret yields a disabled service.
    pub fn from_secret(secret: &str) -> Self {
        Self::new(Signer::from_secret(secret))
    }

    /// Whether a signing secret is configured.
    pub fn is_enabled(&self) -> bool {
        self.signer.is_some()
    }

    /// Issue a token carrying `payload`.
    ///
    /// Returns `None` when signing is disabled; callers surface that as
    /// "sharing unavailable" rather than ever emitting an unsigned token.
    pub fn issue(&self, payload: &SharePayload) -> Option<String> {
        let signer = self.signer.as_ref()?;
        // Canonical form: serde_json with the struct's declared field
        // order. Serialization of this struct cannot fail.
        let canonical = serde_json::to_vec(payload).ok()?;
        let body = codec::encode(&canonical);
        let signature = signer.sign(&body);
        Some(format!("{body}.{signature}"))
    }

    /// Validate a token and recover its payload.
    ///
    /// All-or-nothing: any structural, cryptographic, or parse failure
    /// yields an error and no partial payload. On success the score is
    /// clamped into `[0, 100]` so downstream renderers never see an
    /// out-of-range value. `issuedAtMillis` is not inspected; expiry is
    /// deliberately not part of the validity contract.
    pub fn validate(&self, token: &str) -> Result<SharePayload, TokenError> {
        let signer = self.signer.as_ref().ok_or(TokenError::Disabled)?;

        let (body, signature) = token.split_once('.').ok_or(TokenError::Malformed)?;
        if body.is_empty() || signature.is_empty() {
            return Err(TokenError::Malformed);
        }

        // Structural decode first, so undecodable segments report as
        // malformed rather than as signature mismatches.
        codec::decode(signature).map_err(|_| TokenError::Malformed)?;
        let bytes = codec::decode(body).map_err(|_| TokenError::Malformed)?;

        if !signer.verify(body, signature) {
            return Err(TokenError::SignatureMismatch);
        }

        let payload: SharePayload = serde_json::from_slice(&bytes)?;
        Ok(payload.clamp())
    }
}
