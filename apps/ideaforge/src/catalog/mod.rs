//! Prompt Catalog — the named prompts a run iterates over.
//!
//! The catalog is a JSON object mapping prompt keys to either a raw instruction
//! string or a `{title, instruction}` record. The reserved `meta_prompt` key holds
//! the system instruction shared by every call and is never generated on its own.
//!
//! Loading never fails: a missing, unreadable or malformed document yields the
//! built-in catalog, and `CatalogSource` records which path was taken.

pub mod defaults;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{info, warn};

use crate::llm_client::prompts::DEFAULT_SYSTEM;

/// Catalog key whose value is the system instruction for every call.
pub const RESERVED_KEY: &str = "meta_prompt";

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// A single catalog value, as written in prompts.json.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PromptSpec {
    Raw(String),
    Structured(PromptRecord),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PromptRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub instruction: Option<String>,
}

/// One non-reserved catalog entry with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub key: String,
    /// Record title, or the key when absent.
    pub title: String,
    /// Record instruction, or empty when absent.
    pub instruction: String,
}

/// Ordered prompt catalog. Document order decides which response is "first".
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct PromptCatalog {
    specs: IndexMap<String, PromptSpec>,
}

/// Why the built-in catalog was used instead of the file.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    Missing,
    Unreadable(String),
    Malformed(String),
}

/// Where a loaded catalog came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    File(PathBuf),
    BuiltIn(FallbackReason),
}

impl CatalogSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, CatalogSource::BuiltIn(_))
    }
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: PromptCatalog,
    pub source: CatalogSource,
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

impl PromptCatalog {
    pub fn from_specs(specs: IndexMap<String, PromptSpec>) -> Self {
        Self { specs }
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The `meta_prompt` instruction, or the generic assistant instruction.
    pub fn system_instruction(&self) -> &str {
        match self.specs.get(RESERVED_KEY) {
            Some(PromptSpec::Raw(text)) => text.as_str(),
            Some(PromptSpec::Structured(PromptRecord {
                instruction: Some(text),
                ..
            })) => text.as_str(),
            _ => DEFAULT_SYSTEM,
        }
    }

    /// Entries in document order, excluding the reserved key.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.specs
            .iter()
            .filter(|(key, _)| key.as_str() != RESERVED_KEY)
            .map(|(key, spec)| match spec {
                PromptSpec::Raw(instruction) => CatalogEntry {
                    key: key.clone(),
                    title: key.clone(),
                    instruction: instruction.clone(),
                },
                PromptSpec::Structured(record) => CatalogEntry {
                    key: key.clone(),
                    title: record.title.clone().unwrap_or_else(|| key.clone()),
                    instruction: record.instruction.clone().unwrap_or_default(),
                },
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }
}

/// Loads the catalog at `path`, falling back to the built-in catalog on any failure.
pub fn load_catalog(path: &Path) -> LoadedCatalog {
    let fallback = |reason: FallbackReason| LoadedCatalog {
        catalog: defaults::built_in_catalog(),
        source: CatalogSource::BuiltIn(reason),
    };

    if !path.exists() {
        info!(
            "No catalog at {}, using built-in prompts",
            path.display()
        );
        return fallback(FallbackReason::Missing);
    }

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Error reading {}: {e}. Using built-in prompts.", path.display());
            return fallback(FallbackReason::Unreadable(e.to_string()));
        }
    };

    match PromptCatalog::parse(&raw) {
        Ok(catalog) => {
            info!(
                "Loaded {} catalog entries from {}",
                catalog.len(),
                path.display()
            );
            LoadedCatalog {
                catalog,
                source: CatalogSource::File(path.to_path_buf()),
            }
        }
        Err(e) => {
            warn!("Error loading {}: {e}. Using built-in prompts.", path.display());
            fallback(FallbackReason::Malformed(e.to_string()))
        }
    }
}
