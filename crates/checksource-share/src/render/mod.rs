//! Rendering for share cards and landing pages.
//!
//! Both surfaces are pure functions of the validated payload (plus the
//! request origin for the landing page), so identical inputs always
//! produce byte-identical output and HTTP caches in front of them are
//! correct by construction.
//!
//! The landing page uses [maud](https://maud.lambda.xyz/) for compile-time
//! HTML generation with automatic escaping; the card composes an SVG
//! string and rasterizes it to PNG.

pub mod card;
pub mod components;
pub mod landing;
