// Shared prompt constants used outside the catalog.
// Catalog prompts come from prompts.json or `catalog::defaults`.

/// System instruction used when the catalog has no `meta_prompt` entry.
pub const DEFAULT_SYSTEM: &str = "You are a helpful assistant.";

/// Per-idea landing copy prompt. Replace `{title}` and `{description}` before sending.
pub const LANDING_COPY_PROMPT_TEMPLATE: &str = "Write a concise single-page landing page for this idea:
Title: {title}
Description: {description}
Include 3 main bullet points, pricing, and CTA.";

/// Output budget for per-idea landing copy.
pub const LANDING_COPY_MAX_TOKENS: u32 = 700;

pub fn landing_copy_prompt(title: &str, description: &str) -> String {
    LANDING_COPY_PROMPT_TEMPLATE
        .replace("{title}", title)
        .replace("{description}", description)
}
