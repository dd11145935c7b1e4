//! Share landing page renderer.
//!
//! Produces the public, unauthenticated HTML page for a validated share
//! payload: human-readable verdict plus Open Graph / Twitter Card tags so
//! link unfurlers pick up the card image. Absolute URLs are built from the
//! live request's scheme and authority, never a configured origin, so the
//! page stays correct behind any reverse proxy.

use checksource_core::{SharePayload, VerdictCategory, classify_verdict, score_color};
use maud::{Markup, html};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::components::{OpenGraphData, page_shell, truncate};

/// Characters escaped in the deep-link query value: everything except the
/// RFC 3986 unreserved set plus `!*'()`, matching JS `encodeURIComponent`,
/// which produced these links in the interactive app.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Render the landing page for a validated payload.
pub fn render_landing(
    payload: &SharePayload,
    token: &str,
    scheme: &str,
    authority: &str,
    site_name: &str,
) -> Markup {
    let title = format!(
        "{}% Reliable: {} - {}",
        payload.score, payload.verdict, site_name
    );
    let description = truncate(&payload.summary, 200);
    let canonical = format!("{scheme}://{authority}/share?token={token}");
    let image_url = format!("{scheme}://{authority}/share/card.png?token={token}");

    let category = classify_verdict(&payload.verdict);
    let color = score_color(payload.score);
    let issued = format_issued_at(payload.issued_at_millis);
    let deep_link = deep_link(payload);

    let og = OpenGraphData {
        title: &title,
        description: &description,
        og_type: "article",
        image: Some(&image_url),
        twitter_card_type: "summary_large_image",
    };

    let body = html! {
        div class="card" {
            div class="score-row" {
                div class="score-figure" style={ "color:" (color) } {
                    (payload.score) span class="score-unit" { "%" }
                }
                div class="score-meta" {
                    span class={ "verdict-badge " (badge_class(category)) } {
                        (category.marker()) " " (payload.verdict)
                    }
                    @if let Some((display, iso)) = &issued {
                        time class="issued" datetime=(iso) { "Verified " (display) }
                    }
                }
            }

            p class="summary" { (payload.summary) }

            div class="original-label" { "Original subject" }
            blockquote class="original" { "\u{201c}" (payload.original_text) "\u{201d}" }

            @if let Some(link) = &deep_link {
                a class="verify-link" href=(link) { "Verify it yourself" }
            }
        }
    };

    page_shell(&title, &description, &canonical, og, body, site_name)
}

/// Deep link back into the interactive app, pre-filling the original
/// query. `None` (link omitted entirely) when the payload carries no site
/// base URL.
fn deep_link(payload: &SharePayload) -> Option<String> {
    if payload.site_base_url.is_empty() {
        return None;
    }
    let query = utf8_percent_encode(&payload.query_text, QUERY_VALUE);
    Some(format!("{}#/?q={}", payload.site_base_url, query))
}

/// CSS class for a verdict badge.
fn badge_class(category: VerdictCategory) -> &'static str {
    match category {
        VerdictCategory::Reliable => "verdict-reliable",
        VerdictCategory::PartiallyReliable => "verdict-partial",
        VerdictCategory::Unreliable => "verdict-unreliable",
        VerdictCategory::Unknown => "verdict-unknown",
    }
}

/// Format an issuance timestamp as "Mon DD, YYYY" plus an ISO form for the
/// `datetime` attribute. Returns `None` when the payload carries no
/// timestamp.
fn format_issued_at(millis: i64) -> Option<(String, String)> {
    if millis <= 0 {
        return None;
    }
    let ts = chrono::DateTime::from_timestamp_millis(millis)?;
    let display = ts.format("%b %d, %Y").to_string();
    let iso = ts.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    Some((display, iso))
}
