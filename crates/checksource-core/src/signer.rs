//! HMAC-SHA256 signing over encoded token bodies.
//!
//! The signing secret is injected once at construction and never read
//! again; rotating it invalidates every outstanding token, which is the
//! intended behavior for a store-nothing design.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::codec;

type HmacSha256 = Hmac<Sha256>;

/// Keyed signer/verifier for share-token bodies.
///
/// Construction fails closed: an empty secret yields no signer at all, so
/// the share subsystem disables itself rather than signing with a weak or
/// absent key.
#[derive(Clone)]
pub struct Signer {
    key: Vec<u8>,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The key never appears in logs or panic messages.
        f.debug_struct("Signer").finish_non_exhaustive()
    }
}

impl Signer {
    /// Build a signer from the configured secret.
    ///
    /// Returns `None` for an empty secret.
    pub fn from_secret(secret: &str) -> Option<Self> {
        if secret.is_empty() {
            return None;
        }
        Some(Self {
            key: secret.as_bytes().to_vec(),
        })
    }

    /// Sign a token body, returning the base64url-encoded digest.
    ///
    /// Deterministic: the same body and secret always produce the same
    /// signature.
    pub fn sign(&self, body: &str) -> String {
        codec::encode(&self.digest(body))
    }

    /// Verify a signature against a token body.
    ///
    /// The digest comparison runs in constant time so the position of the
    /// first mismatching byte is not observable. Signatures that do not
    /// decode, or decode to the wrong length, are rejected outright.
    pub fn verify(&self, body: &str, signature: &str) -> bool {
        let Ok(claimed) = codec::decode(signature) else {
            return false;
        };
        let expected = self.digest(body);
        if claimed.len() != expected.len() {
            return false;
        }
        expected.as_slice().ct_eq(claimed.as_slice()).into()
    }

    fn digest(&self, body: &str) -> Vec<u8> {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC-SHA256 accepts any key length");
        mac.update(body.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_refuses_construction() {
        assert!(Signer::from_secret("").is_none());
    }

    #[test]
    fn sign_is_deterministic() {
        let signer = Signer::from_secret("k1").unwrap();
        assert_eq!(signer.sign("body"), signer.sign("body"));
    }

    #[test]
    fn signature_is_url_safe_digest_length() {
        let signer = Signer::from_secret("k1").unwrap();
        let sig = signer.sign("body");
        // 32-byte SHA-256 digest encodes to 43 unpadded base64 characters.
        assert_eq!(sig.len(), 43);
        assert!(
            sig.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn different_secrets_sign_differently() {
        let s1 = Signer::from_secret("k1").unwrap();
        let s2 = Signer::from_secret("k2").unwrap();
        assert_ne!(s1.sign("body"), s2.sign("body"));
    }

    #[test]
    fn verify_accepts_own_signature() {
        let signer = Signer::from_secret("k1").unwrap();
        let sig = signer.sign("body");
        assert!(signer.verify("body", &sig));
    }

    #[test]
    fn verify_rejects_other_body() {
        let signer = Signer::from_secret("k1").unwrap();
        let sig = signer.sign("body");
        assert!(!signer.verify("other", &sig));
    }

    #[test]
    fn verify_rejects_undecodable_signature() {
        let signer = Signer::from_secret("k1").unwrap();
        assert!(!signer.verify("body", "not base64url!"));
    }

    #[test]
    fn verify_rejects_truncated_signature() {
        let signer = Signer::from_secret("k1").unwrap();
        let sig = signer.sign("body");
        assert!(!signer.verify("body", &sig[..sig.len() - 4]));
    }

    #[test]
    fn debug_does_not_leak_key() {
        let signer = Signer::from_secret("topsecret").unwrap();
        assert!(!format!("{signer:?}").contains("topsecret"));
    }
}
