//! Core types and share-token primitives for checkSource.
//!
//! This crate provides:
//! - The analysis-result and share-payload data model
//! - URL-safe encoding for token segments
//! - HMAC-SHA256 signing with constant-time verification
//! - The token service composing codec and signer into issue/validate
//! - Verdict classification and score color tiers shared by every
//!   rendering surface
//!
//! Everything here is a pure function of its inputs plus a signing secret
//! injected once at construction. There is no I/O, no async, and no global
//! state; tests can build several independently keyed token services side
//! by side.

pub mod analysis;
pub mod codec;
pub mod payload;
pub mod signer;
pub mod token;
pub mod verdict;

pub use analysis::{AnalysisResult, ClaimVerification, Source};
pub use codec::DecodeError;
pub use payload::SharePayload;
pub use signer::Signer;
pub use token::{TokenError, TokenService};
pub use verdict::{VerdictCategory, classify_verdict, score_color};
