//! Share card image generation.
//!
//! Renders the reliability snapshot as a card image:
//! - Dark background (1200x630, standard OG dimensions)
//! - Site wordmark top-left
//! - Score in large type, tinted by the shared score color tiers
//! - Verdict badge with a category marker glyph
//! - Summary wrapped across a bounded number of lines
//!
//! The card is a pure function of the payload and site name; identical
//! inputs produce byte-identical PNGs.

use std::sync::{Arc, LazyLock};

use checksource_core::{SharePayload, classify_verdict, score_color};

use super::components::truncate;

/// Card dimensions (standard Open Graph).
pub const CARD_WIDTH: u32 = 1200;
pub const CARD_HEIGHT: u32 = 630;

/// Verdict text cap before layout.
const VERDICT_MAX_CHARS: usize = 40;

/// Summary wrapping: characters per line, maximum lines.
const SUMMARY_LINE_CHARS: usize = 58;
const SUMMARY_MAX_LINES: usize = 3;

/// Font family string for SVG text (sans single quotes that confuse `format!`).
const FONT_FAMILY: &str = "Inter, -apple-system, BlinkMacSystemFont, Segoe UI, Roboto, sans-serif";

/// Fonts for text rasterization, loaded once per process.
static FONTDB: LazyLock<Arc<resvg::usvg::fontdb::Database>> = LazyLock::new(|| {
    let mut db = resvg::usvg::fontdb::Database::new();
    db.load_system_fonts();
    Arc::new(db)
});

/// Render a share card for a validated payload.
pub fn render_card(payload: &SharePayload, site_name: &str) -> anyhow::Result<Vec<u8>> {
    rasterize(&compose_svg(payload, site_name))
}

/// Compose the card SVG. All free text goes through [`xml_escape`].
fn compose_svg(payload: &SharePayload, site_name: &str) -> String {
    let color = score_color(payload.score);
    let category = classify_verdict(&payload.verdict);
    let verdict = truncate(payload.verdict.trim(), VERDICT_MAX_CHARS);
    let summary_lines = wrap_text(
        payload.summary.trim(),
        SUMMARY_LINE_CHARS,
        SUMMARY_MAX_LINES,
    );

    let mut svg = String::with_capacity(4096);

    // Header + background + accent bar
    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="{w}" height="{h}" fill="#0f172a"/><rect width="{w}" height="10" fill="#2563eb"/>"##,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
    ));

    // Wordmark
    svg.push_str(&format!(
        r##"<text x="60" y="95" font-family="{font}" font-size="40" font-weight="800" fill="#f8fafc">{name}</text>"##,
        font = FONT_FAMILY,
        name = xml_escape(site_name),
    ));

    // Score, tinted by the shared tier color
    svg.push_str(&format!(
        r##"<text x="56" y="330" font-family="{font}" font-size="190" font-weight="900" letter-spacing="-6" fill="{color}">{score}<tspan font-size="72" font-weight="800">%</tspan></text>"##,
        font = FONT_FAMILY,
        color = color,
        score = payload.score,
    ));

    // Verdict badge: marker glyph + text on a translucent pill
    let badge_label = format!("{} {}", category.marker(), verdict);
    let badge_width = 48 + 18 * badge_label.chars().count() as u32;
    svg.push_str(&format!(
        r##"<rect x="60" y="372" width="{bw}" height="58" rx="29" fill="#ffffff" fill-opacity="0.10"/><text x="{tx}" y="411" text-anchor="middle" font-family="{font}" font-size="30" font-weight="700" fill="#e2e8f0">{label}</text>"##,
        bw = badge_width,
        tx = 60 + badge_width / 2,
        font = FONT_FAMILY,
        label = xml_escape(&badge_label),
    ));

    // Summary lines
    for (i, line) in summary_lines.iter().enumerate() {
        svg.push_str(&format!(
            r##"<text x="60" y="{y}" font-family="{font}" font-size="32" fill="#94a3b8">{line}</text>"##,
            y = 492 + 44 * i as u32,
            font = FONT_FAMILY,
            line = xml_escape(line),
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Parse the SVG and render it to PNG bytes.
fn rasterize(svg: &str) -> anyhow::Result<Vec<u8>> {
    let mut options = resvg::usvg::Options::default();
    options.fontdb = FONTDB.clone();
    let tree = resvg::usvg::Tree::from_str(svg, &options)
        .map_err(|e| anyhow::anyhow!("SVG parse error: {e}"))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(CARD_WIDTH, CARD_HEIGHT)
        .ok_or_else(|| anyhow::anyhow!("failed to create pixmap"))?;

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|e| anyhow::anyhow!("PNG encode error: {e}"))
}

/// Escape text for embedding in SVG markup.
fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Greedy word wrap into at most `max_lines` lines of `line_chars`
/// characters, hard-splitting over-long words. Appends "..." to the last
/// line when text was cut.
fn wrap_text(text: &str, line_chars: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut cut = false;

    'words: for word in text.split_whitespace() {
        let pieces: Vec<String> = word
            .chars()
            .collect::<Vec<_>>()
            .chunks(line_chars)
            .map(|chunk| chunk.iter().collect())
            .collect();
        for piece in pieces {
            let sep = usize::from(!current.is_empty());
            if current.chars().count() + sep + piece.chars().count() > line_chars {
                lines.push(std::mem::take(&mut current));
                if lines.len() == max_lines {
                    cut = true;
                    break 'words;
                }
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&piece);
        }
    }
    if !current.is_empty() {
        if lines.len() < max_lines {
            lines.push(current);
        } else {
            cut = true;
        }
    }
    if cut {
        if let Some(last) = lines.last_mut() {
            last.push_str("...");
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SharePayload {
        SharePayload {
            score: 92,
            verdict: "Reliable".to_string(),
            summary: "Confirmed by three independent outlets.".to_string(),
            original_text: "The sky is blue.".to_string(),
            site_base_url: String::new(),
            query_text: String::new(),
            issued_at_millis: 1_700_000_000_000,
        }
    }

    #[test]
    fn render_is_deterministic() {
        let a = render_card(&payload(), "checkSourceAI").unwrap();
        let b = render_card(&payload(), "checkSourceAI").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn render_produces_png() {
        let bytes = render_card(&payload(), "checkSourceAI").unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn render_survives_hostile_text() {
        let mut p = payload();
        p.verdict = r#"<script>"&'</script>"#.to_string();
        p.summary = "<&>\"'".repeat(200);
        let bytes = render_card(&p, "checkSourceAI").unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn svg_escapes_markup_characters() {
        let mut p = payload();
        p.verdict = "<Reliable & \"true\">".to_string();
        let svg = compose_svg(&p, "checkSourceAI");
        assert!(!svg.contains("<Reliable"));
        assert!(svg.contains("&lt;Reliable &amp; &quot;true&quot;&gt;"));
    }

    #[test]
    fn svg_uses_tier_color() {
        assert!(compose_svg(&payload(), "s").contains("#10b981"));
        let mut low = payload();
        low.score = 12;
        assert!(compose_svg(&low, "s").contains("#ef4444"));
    }

    #[test]
    fn long_verdict_is_capped() {
        let mut p = payload();
        p.verdict = "x".repeat(500);
        let svg = compose_svg(&p, "s");
        assert!(svg.contains(&format!("{}...", "x".repeat(VERDICT_MAX_CHARS))));
    }

    #[test]
    fn wrap_text_short_input_single_line() {
        assert_eq!(wrap_text("hello world", 20, 3), vec!["hello world"]);
    }

    #[test]
    fn wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("aaa bbb ccc", 7, 3),
            vec!["aaa bbb".to_string(), "ccc".to_string()]
        );
    }

    #[test]
    fn wrap_text_caps_lines_with_marker() {
        let lines = wrap_text(&"word ".repeat(100), 10, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("..."));
    }

    #[test]
    fn wrap_text_hard_splits_long_words() {
        let lines = wrap_text(&"a".repeat(25), 10, 3);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "a".repeat(10));
    }

    #[test]
    fn wrap_text_empty_input() {
        assert!(wrap_text("", 10, 3).is_empty());
        assert!(wrap_text("   ", 10, 3).is_empty());
    }

    #[test]
    fn xml_escape_covers_special_characters() {
        assert_eq!(xml_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&apos;");
    }
}
