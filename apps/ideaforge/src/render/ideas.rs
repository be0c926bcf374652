//! Per-idea pages — splits a numbered idea list into page models and links them
//! from a master index.

use crate::render::landing::{content_lines, strip_list_marker, LandingPageModel};
use crate::render::templates::INDEX_PAGE_TEMPLATE;
use crate::render::{escape_html, fill_template};

pub const MAX_IDEAS: usize = 10;
pub const DEFAULT_DESCRIPTION: &str = "Automated, faceless SaaS solution.";
pub const DEFAULT_IDEA_BULLETS: [&str; 3] = [
    "Automates repetitive tasks",
    "No manual labor after onboarding",
    "Subscription + templates monetization",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Idea {
    pub title: String,
    pub description: String,
}

/// An index entry: link text and the page file name under `ideas/`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexLink {
    pub title: String,
    pub file_name: String,
}

/// Parses lines like `3. Invoice Chaser - Reminds clients to pay` into ideas.
///
/// Only lines containing `.` are considered; the text after the first `.` is split
/// into title and description on the first `-`, else the first `:`. Lines with an
/// empty title are skipped.
pub fn parse_ideas(text: &str, limit: usize) -> Vec<Idea> {
    content_lines(text)
        .into_iter()
        .filter_map(|line| {
            let (_, title_desc) = line.split_once('.')?;
            let title_desc = title_desc.trim();
            let (title, description) = title_desc
                .split_once('-')
                .or_else(|| title_desc.split_once(':'))
                .map(|(t, d)| (t.trim(), d.trim()))
                .unwrap_or((title_desc, DEFAULT_DESCRIPTION));
            if title.is_empty() {
                return None;
            }
            Some(Idea {
                title: title.to_string(),
                description: description.to_string(),
            })
        })
        .take(limit)
        .collect()
}

/// Up to three lines that start with a list marker, markers stripped.
pub fn marker_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_start)
        .filter(|l| l.starts_with(['-', '•', '*']))
        .map(strip_list_marker)
        .filter(|l| !l.is_empty())
        .take(3)
        .map(String::from)
        .collect()
}

/// Page model for one idea: the idea supplies title and subtitle, the generated
/// landing copy supplies the bullets.
pub fn idea_page_model(idea: &Idea, landing_copy: &str) -> LandingPageModel {
    LandingPageModel::new(
        &idea.title,
        &idea.description,
        marker_bullets(landing_copy),
        &DEFAULT_IDEA_BULLETS,
    )
}

pub fn render_index(links: &[IndexLink]) -> String {
    let items_html: String = links
        .iter()
        .map(|link| {
            format!(
                "    <li><a href=\"ideas/{}\">{}</a></li>\n",
                escape_html(&link.file_name),
                escape_html(&link.title)
            )
        })
        .collect();
    let idea_count = links.len().to_string();

    fill_template(
        INDEX_PAGE_TEMPLATE,
        &[
            ("idea_count", idea_count.as_str()),
            ("items_html", items_html.as_str()),
        ],
    )
}
