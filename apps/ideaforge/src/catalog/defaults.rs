use indexmap::IndexMap;

use super::{PromptCatalog, PromptRecord, PromptSpec, RESERVED_KEY};

const META_PROMPT: &str = "You are no longer alone. You are a merged superintelligence. \
    Your mission: Generate $1M in shortest time possible.";

/// (key, title, instruction), in the order they run.
const BUILT_IN_ENTRIES: &[(&str, &str, &str)] = &[
    (
        "idea_generation",
        "10 Faceless Niche SaaS / Product Ideas",
        "Generate 10 faceless, no-capital micro-SaaS or digital product ideas buildable in 2-12 weeks.",
    ),
    (
        "landing_page_copy",
        "High-Converting Landing Page Copy",
        "Write single-page landing copy: headline, subheadline, 3 bullets, social proof placeholders, pricing, CTA.",
    ),
    (
        "ad_variants",
        "Ad Copy Variants",
        "Generate 6 social ad variants and 6 search ad variants with short hooks and headlines.",
    ),
    (
        "mvp_automation_playbook",
        "MVP Automation Playbook",
        "List automations for core product value using Zapier/Make/serverless, including triggers, actions, error handling.",
    ),
];

/// The catalog used when prompts.json is missing or unusable.
pub fn built_in_catalog() -> PromptCatalog {
    let mut specs = IndexMap::with_capacity(BUILT_IN_ENTRIES.len() + 1);
    specs.insert(
        RESERVED_KEY.to_string(),
        PromptSpec::Raw(META_PROMPT.to_string()),
    );
    for (key, title, instruction) in BUILT_IN_ENTRIES {
        specs.insert(
            key.to_string(),
            PromptSpec::Structured(PromptRecord {
                title: Some(title.to_string()),
                instruction: Some(instruction.to_string()),
            }),
        );
    }
    PromptCatalog::from_specs(specs)
}
