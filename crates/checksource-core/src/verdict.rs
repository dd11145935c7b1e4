//! Verdict classification and score color tiers.
//!
//! Every surface that renders a score or a verdict badge (the share card,
//! the landing page) goes through these two mappings, so the thresholds
//! and wording rules live in exactly one place.

/// Semantic category of a free-form verdict string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictCategory {
    Reliable,
    PartiallyReliable,
    Unreliable,
    Unknown,
}

/// Ordered classification rules, evaluated top to bottom.
///
/// Order is load bearing: "partially reliable" and "unreliable" both
/// contain "reliable" as a substring, so the bare "reliable" rule must
/// come last.
const RULES: &[(&str, VerdictCategory)] = &[
    ("partially reliable", VerdictCategory::PartiallyReliable),
    ("unreliable", VerdictCategory::Unreliable),
    ("fictional", VerdictCategory::Unreliable),
    ("reliable", VerdictCategory::Reliable),
];

/// Classify verdict text by case-insensitive substring match.
///
/// Text matching none of the rules is [`VerdictCategory::Unknown`].
pub fn classify_verdict(verdict: &str) -> VerdictCategory {
    let haystack = verdict.to_lowercase();
    for (needle, category) in RULES {
        if haystack.contains(needle) {
            return *category;
        }
    }
    VerdictCategory::Unknown
}

impl VerdictCategory {
    /// Decorative marker glyph for verdict badges.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Reliable => "\u{2713}",          // ✓
            Self::PartiallyReliable => "\u{25d0}", // ◐
            Self::Unreliable => "\u{2715}",        // ✕
            Self::Unknown => "?",
        }
    }
}

/// Three-tier score color: high (>= 80) green, mid (>= 50) amber, low red.
pub fn score_color(score: i64) -> &'static str {
    if score >= 80 {
        "#10b981"
    } else if score >= 50 {
        "#f59e0b"
    } else {
        "#ef4444"
    }
}
