//! Shared HTML components for the share pages.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for all share pages.
///
/// Flat, modern design; spacing and subtle background shifts for
/// hierarchy rather than borders and shadows.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#f8fafc;--fg:#0f172a;--fg2:#475569;--fg3:#94a3b8;--accent:#2563eb;--surface:#fff;--border:#e2e8f0;--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:640px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}

.card{background:var(--surface);padding:2rem;border:1px solid var(--border);border-radius:14px}
.score-row{display:flex;align-items:center;gap:1.5rem;margin-bottom:1.5rem}
.score-figure{font-weight:800;font-size:4rem;line-height:1;letter-spacing:-.03em}
.score-unit{font-size:1.5rem;font-weight:700;margin-left:.15rem}
.score-meta{display:flex;flex-direction:column;gap:.5rem}
.verdict-badge{display:inline-block;padding:.35rem 1rem;border-radius:100px;font-weight:700;font-size:.85rem;text-transform:uppercase;letter-spacing:.12em;width:fit-content}
.verdict-reliable{background:#d1fae5;color:#047857}
.verdict-partial{background:#fef3c7;color:#b45309}
.verdict-unreliable{background:#fee2e2;color:#b91c1c}
.verdict-unknown{background:#f1f5f9;color:#475569}
.issued{font-size:.8rem;color:var(--fg3);text-transform:uppercase;letter-spacing:.08em}
.summary{color:var(--fg2);font-size:1.05rem;line-height:1.7;margin-bottom:1.5rem}
.original-label{font-size:.75rem;font-weight:700;color:var(--fg3);text-transform:uppercase;letter-spacing:.15em;margin-bottom:.5rem}
.original{border-left:3px solid var(--accent);padding:.5rem 0 .5rem 1.25rem;font-style:italic;color:var(--fg);font-size:1.05rem;word-break:break-word;white-space:pre-wrap}
.verify-link{display:inline-block;margin-top:1.5rem;padding:.75rem 1.5rem;background:var(--accent);color:#fff;border-radius:10px;font-weight:700}
.verify-link:hover{background:#1d4ed8;text-decoration:none}

.footer{margin-top:2rem;font-size:.8rem;color:var(--fg3)}
.footer a{color:var(--fg2)}
"#;

/// Content-Security-Policy for share pages.
///
/// No scripts at all; the card image is served from the same origin.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src 'self' https: data:; form-action 'none'; frame-ancestors 'none'";

/// Render the full HTML page shell with `<head>`, OG tags, and body content.
pub fn page_shell(
    title: &str,
    description: &str,
    canonical_url: &str,
    og: OpenGraphData<'_>,
    body_content: Markup,
    site_name: &str,
) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                link rel="canonical" href=(canonical_url);

                // Open Graph
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:url" content=(canonical_url);
                meta property="og:site_name" content=(site_name);
                meta property="og:type" content=(og.og_type);
                @if let Some(image) = og.image {
                    meta property="og:image" content=(image);
                }

                // Twitter Card
                meta name="twitter:card" content=(og.twitter_card_type);
                meta name="twitter:title" content=(og.title);
                meta name="twitter:description" content=(og.description);
                @if let Some(image) = og.image {
                    meta name="twitter:image" content=(image);
                }

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
                footer class="footer" {
                    "Verified with " (site_name) " fact-checking"
                }
            }
        }
    }
}

/// Open Graph metadata for a page.
pub struct OpenGraphData<'a> {
    /// OG title.
    pub title: &'a str,
    /// OG description.
    pub description: &'a str,
    /// OG type (e.g., "article", "website").
    pub og_type: &'a str,
    /// OG image URL.
    pub image: Option<&'a str>,
    /// Twitter card type ("summary", "summary_large_image").
    pub twitter_card_type: &'a str,
}

/// Truncate a string to a maximum length, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_exact_length_unchanged() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn truncate_long_string_gets_marker() {
        assert_eq!(truncate("hello world", 5), "hello...");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // "é" is two bytes; cutting at 1 must not split it.
        let s = "été";
        let out = truncate(s, 1);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 4);
    }

    #[test]
    fn page_shell_escapes_dynamic_content() {
        let og = OpenGraphData {
            title: "<script>alert(1)</script>",
            description: "desc",
            og_type: "article",
            image: None,
            twitter_card_type: "summary",
        };
        let markup = page_shell(
            "<script>alert(1)</script>",
            "desc",
            "https://example.com/share",
            og,
            html! { p { "body" } },
            "checkSourceAI",
        );
        let rendered = markup.into_string();
        assert!(!rendered.contains("<script>alert(1)</script>"));
        assert!(rendered.contains("&lt;script&gt;"));
    }

    #[test]
    fn page_shell_emits_og_image_when_present() {
        let og = OpenGraphData {
            title: "t",
            description: "d",
            og_type: "article",
            image: Some("https://example.com/share/card.png?token=abc"),
            twitter_card_type: "summary_large_image",
        };
        let rendered = page_shell("t", "d", "https://example.com/share", og, html! {}, "s")
            .into_string();
        assert!(rendered.contains(r#"property="og:image""#));
        assert!(rendered.contains("card.png?token=abc"));
    }
}
