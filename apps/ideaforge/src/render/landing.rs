//! Landing Page — heuristic extraction of page fields from generated text.
//!
//! Line 0 is the title, line 1 the subtitle, lines 2..5 the bullets. No field is
//! validated; anything missing falls back to a static default.

use crate::render::templates::LANDING_PAGE_TEMPLATE;
use crate::render::{escape_html, fill_template};

pub const DEFAULT_TITLE: &str = "Top Idea — Faceless AI Product";
pub const DEFAULT_SUBTITLE: &str = "Automated, faceless, buildable in weeks.";
pub const DEFAULT_BULLETS: [&str; 3] = [
    "Automates a repetitive task for SMBs with AI",
    "No manual labor required after onboarding",
    "Monetized via subscription and templates",
];
pub const PRICE_ANCHOR: &str = "$29/mo or $79 one-time";
pub const CTA_TEXT: &str = "Get Early Access";

const MAX_BULLETS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct LandingPageModel {
    pub title: String,
    pub subtitle: String,
    pub bullets: Vec<String>,
    pub price_anchor: String,
    pub cta_text: String,
}

/// Trimmed, non-empty lines of `text`.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

/// Drops leading `-`, `•`, `*` and spaces from a list line.
pub fn strip_list_marker(line: &str) -> &str {
    line.trim_start_matches(['-', '•', '*', ' ']).trim()
}

impl LandingPageModel {
    /// Builds the model from the first response of a run.
    pub fn from_response(text: &str) -> Self {
        let lines = content_lines(text);

        let title = lines.first().copied().unwrap_or(DEFAULT_TITLE);
        let subtitle = lines.get(1).copied().unwrap_or(DEFAULT_SUBTITLE);
        let bullets: Vec<String> = lines
            .iter()
            .skip(2)
            .take(MAX_BULLETS)
            .map(|l| strip_list_marker(l))
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();

        Self::new(title, subtitle, bullets, &DEFAULT_BULLETS)
    }

    /// Assembles a model, substituting `fallback_bullets` when `bullets` is empty.
    pub fn new(title: &str, subtitle: &str, bullets: Vec<String>, fallback_bullets: &[&str]) -> Self {
        let bullets = if bullets.is_empty() {
            fallback_bullets.iter().map(|b| b.to_string()).collect()
        } else {
            bullets
        };

        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            bullets,
            price_anchor: PRICE_ANCHOR.to_string(),
            cta_text: CTA_TEXT.to_string(),
        }
    }

    /// Renders the self-contained HTML document. Every field is escaped.
    pub fn render(&self) -> String {
        let bullets_html: String = self
            .bullets
            .iter()
            .map(|b| format!("      <li>{}</li>\n", escape_html(b)))
            .collect();
        let title = escape_html(&self.title);
        let subtitle = escape_html(&self.subtitle);
        let price_anchor = escape_html(&self.price_anchor);
        let cta_text = escape_html(&self.cta_text);

        fill_template(
            LANDING_PAGE_TEMPLATE,
            &[
                ("title", title.as_str()),
                ("subtitle", subtitle.as_str()),
                ("bullets_html", bullets_html.as_str()),
                ("price_anchor", price_anchor.as_str()),
                ("cta_text", cta_text.as_str()),
            ],
        )
    }
}
