//! URL-safe encoding for token segments.
//!
//! Both halves of the share-token wire format use the base64url alphabet
//! (`[A-Za-z0-9_-]`) without padding, so a token survives URL paths, query
//! strings, and copy-paste without further escaping.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// A token segment could not be decoded.
#[derive(Debug, thiserror::Error)]
#[error("invalid base64url segment: {0}")]
pub struct DecodeError(#[from] base64::DecodeError);

/// Encode arbitrary bytes as an unpadded base64url string.
///
/// Total: never fails for any input.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode an unpadded base64url string back into bytes.
///
/// Fails when the input contains characters outside the URL-safe alphabet
/// (including `=` padding) or has a length no unpadded encoding produces.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(URL_SAFE_NO_PAD.decode(text)?)
}
