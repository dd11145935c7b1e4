//! Home page — simple landing page explaining the service.

use axum::response::IntoResponse;
use maud::{DOCTYPE, PreEscaped, html};

use crate::render::components::PAGE_CSS;

/// Render the home page.
pub async fn home_page() -> impl IntoResponse {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "checkSourceAI — Shareable Fact-Check Reports" }
                meta name="description" content="Signed, self-contained share links for fact-check results. No accounts, no storage: the link carries the verified report.";
                meta property="og:title" content="checkSourceAI Share";
                meta property="og:description" content="Signed, self-contained share links for fact-check results.";
                meta property="og:type" content="website";
                style { (PreEscaped(PAGE_CSS)) }
                style { (PreEscaped(HOME_CSS)) }
            }
            body {
                main class="home" {
                    h1 class="home-title" {
                        "checkSource" span class="home-accent" { "AI" }
                    }
                    p class="home-tagline" {
                        "Shareable fact-check reports, carried entirely by a signed link."
                    }

                    div class="home-how" {
                        p { "Every share link embeds its own report:" }
                        div class="home-examples" {
                            div class="home-example" {
                                span class="home-label" { "Report" }
                                code { "/share?token=" span class="home-highlight" { "..." } }
                            }
                            div class="home-example" {
                                span class="home-label" { "Card" }
                                code { "/share/card.png?token=" span class="home-highlight" { "..." } }
                            }
                        }
                        p class="home-note" {
                            "Tokens are tamper-evident: the report you see is exactly the "
                            "report that was issued, or the link does not open at all."
                        }
                    }
                }
                footer class="footer" {
                    "checkSourceAI — fact check and verify"
                }
            }
        }
    }
}

/// Additional CSS for the home page only.
const HOME_CSS: &str = r#"
.home{display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:60vh;text-align:center;padding:2rem 1rem}
.home-title{font-size:3rem;font-weight:800;letter-spacing:-.04em;color:var(--fg)}
.home-accent{color:var(--accent)}
.home-tagline{font-size:1.15rem;color:var(--fg2);margin-top:.5rem;max-width:420px}
.home-how{margin-top:2.5rem;width:100%;max-width:440px}
.home-how>p{font-size:.95rem;color:var(--fg2);margin-bottom:1rem}
.home-examples{display:flex;flex-direction:column;gap:.5rem}
.home-example{display:flex;align-items:center;gap:.75rem;padding:.5rem .75rem;border-radius:6px;border:1px solid var(--border);background:var(--surface)}
.home-label{font-size:.75rem;font-weight:600;color:var(--fg3);text-transform:uppercase;letter-spacing:.05em;width:52px;text-align:right;flex-shrink:0}
.home-example code{font-family:var(--mono);font-size:.85rem;color:var(--fg2)}
.home-highlight{color:var(--accent);font-weight:600}
.home-note{font-size:.85rem;color:var(--fg3);margin-top:1rem;line-height:1.6}
"#;
