//! checkSource Share - signed share links for fact-check results.
//!
//! This crate provides a lightweight HTTP server around the share-token
//! subsystem: a fact-check result is embedded into an HMAC-signed token at
//! issuance, and two public, unauthenticated endpoints render that token
//! back into a preview card image and an HTML landing page with social
//! metadata. Nothing is stored server-side; the link carries the report.
//!
//! # Architecture
//!
//! - **Validate**: `checksource-core` recovers and authenticates the
//!   payload from the token query parameter
//! - **Render**: maud (compile-time HTML) for the landing page, an SVG
//!   pipeline rasterized by resvg for the card PNG
//! - **Cache**: in-process moka caches + Cache-Control headers for CDN
//!   caching; both renderers are deterministic, so caching is always
//!   correct
//!
//! # URL Pattern
//!
//! ```text
//! GET /share?token={body}.{signature}
//! GET /share/card.png?token={body}.{signature}
//! POST /api/share
//! ```
//!
//! # Security
//!
//! - Tokens are HMAC-SHA256 signed and verified in constant time
//! - An empty `SHARE_SECRET` disables the subsystem entirely (fail-closed)
//! - All dynamic content is escaped (maud for HTML, explicit escaping for
//!   SVG text)
//! - Token failures collapse to one non-leaking 400 response
//! - Strict Content-Security-Policy: no JavaScript execution

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
