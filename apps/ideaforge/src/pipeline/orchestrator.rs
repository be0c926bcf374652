//! Run orchestration.
//!
//! Flow: INIT → LOAD_CATALOG → GENERATE (per entry) → WRITE_SUMMARY →
//!       RENDER_PAGES → DONE.
//!
//! A placeholder result (mock or exhausted retries) flows through writing and
//! rendering like any other. Only filesystem errors stop a run, and nothing
//! already written is rolled back.

use std::fmt;
use std::path::PathBuf;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::{load_catalog, CatalogSource, LoadedCatalog};
use crate::config::{Config, LandingMode};
use crate::errors::AppError;
use crate::generation::{GenerationClient, GenerationResult};
use crate::llm_client::prompts::{landing_copy_prompt, LANDING_COPY_MAX_TOKENS};
use crate::render::ideas::{idea_page_model, render_index, MAX_IDEAS};
use crate::render::{parse_ideas, IndexLink, LandingPageModel};
use crate::responses::{sanitize_filename, write_text_file, ResponseWriter};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStage {
    Init,
    LoadCatalog,
    Generate { index: usize, total: usize },
    WriteSummary,
    RenderPages,
    Done,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStage::Init => write!(f, "INIT"),
            RunStage::LoadCatalog => write!(f, "LOAD_CATALOG"),
            RunStage::Generate { index, total } => write!(f, "GENERATE {index}/{total}"),
            RunStage::WriteSummary => write!(f, "WRITE_SUMMARY"),
            RunStage::RenderPages => write!(f, "RENDER_PAGES"),
            RunStage::Done => write!(f, "DONE"),
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub catalog_source: CatalogSource,
    pub results: Vec<GenerationResult>,
    pub response_files: Vec<PathBuf>,
    pub summary_path: PathBuf,
    pub pages: Vec<PathBuf>,
}

impl RunReport {
    pub fn placeholder_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.is_placeholder())
            .count()
    }
}

pub struct Orchestrator {
    config: Config,
    client: GenerationClient,
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestrator
// ────────────────────────────────────────────────────────────────────────────

impl Orchestrator {
    pub fn new(config: Config, client: GenerationClient) -> Self {
        Self { config, client }
    }

    /// Loads the catalog from `config.prompts_path` and runs it.
    pub async fn run(&self) -> Result<RunReport, AppError> {
        self.enter(RunStage::Init);
        std::fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| AppError::io(&self.config.output_dir, e))?;
        std::fs::create_dir_all(&self.config.responses_dir)
            .map_err(|e| AppError::io(&self.config.responses_dir, e))?;

        self.enter(RunStage::LoadCatalog);
        let loaded = load_catalog(&self.config.prompts_path);
        self.run_catalog(loaded).await
    }

    /// Runs an already-loaded catalog through generation, summary and rendering.
    pub async fn run_catalog(&self, loaded: LoadedCatalog) -> Result<RunReport, AppError> {
        let run_id = Uuid::new_v4();
        let LoadedCatalog { catalog, source } = loaded;
        if source.is_fallback() {
            info!("Using built-in catalog ({source:?})");
        }

        let system = catalog.system_instruction().to_string();
        let entries = catalog.entries();
        let total = entries.len();
        let mut writer = ResponseWriter::new(&self.config.responses_dir);
        let mut results = Vec::with_capacity(total);
        let mut response_files = Vec::with_capacity(total);

        for (i, entry) in entries.into_iter().enumerate() {
            self.enter(RunStage::Generate {
                index: i + 1,
                total,
            });
            info!("Running prompt: {}", entry.key);

            let generation = self.client.generate(&system, &entry.instruction, None).await;
            if generation.outcome.is_placeholder() {
                warn!(
                    "Prompt '{}' produced placeholder text ({})",
                    entry.key,
                    generation.outcome.label()
                );
            }

            let result = GenerationResult {
                key: entry.key,
                title: entry.title,
                text: generation.text,
                outcome: generation.outcome,
            };
            response_files.push(writer.write(&result)?);
            results.push(result);
        }

        self.enter(RunStage::WriteSummary);
        writer.write_summary(&self.config.summary_path, Utc::now(), run_id)?;

        self.enter(RunStage::RenderPages);
        let pages = match results.first() {
            Some(first) => match self.config.landing_mode {
                LandingMode::Single => vec![self.render_single(&first.text)?],
                LandingMode::PerIdea => self.render_per_idea(&system, &first.text).await?,
            },
            None => {
                info!("Catalog has no entries to render");
                Vec::new()
            }
        };

        self.enter(RunStage::Done);
        Ok(RunReport {
            run_id,
            catalog_source: source,
            results,
            response_files,
            summary_path: self.config.summary_path.clone(),
            pages,
        })
    }

    fn render_single(&self, first_text: &str) -> Result<PathBuf, AppError> {
        let model = LandingPageModel::from_response(first_text);
        let path = self.config.landing_page_path.clone();
        write_text_file(&path, &model.render())?;
        info!("Landing page generated at: {}", path.display());
        Ok(path)
    }

    /// Writes one page per idea parsed from `first_text`, then the master index.
    /// The index is the last path in the returned list.
    async fn render_per_idea(
        &self,
        system: &str,
        first_text: &str,
    ) -> Result<Vec<PathBuf>, AppError> {
        let ideas = parse_ideas(first_text, MAX_IDEAS);
        info!("Parsed {} ideas from the first response", ideas.len());

        let mut pages = Vec::with_capacity(ideas.len() + 1);
        let mut links = Vec::with_capacity(ideas.len());

        for idea in &ideas {
            info!("Creating landing page for: {}", idea.title);
            let prompt = landing_copy_prompt(&idea.title, &idea.description);
            let copy = self
                .client
                .generate(system, &prompt, Some(LANDING_COPY_MAX_TOKENS))
                .await;

            let file_name = format!("{}.html", sanitize_filename(&idea.title));
            let path = self.config.ideas_dir.join(&file_name);
            write_text_file(&path, &idea_page_model(idea, &copy.text).render())?;

            links.push(IndexLink {
                title: idea.title.clone(),
                file_name,
            });
            pages.push(path);
        }

        let index_path = self.config.index_page_path.clone();
        write_text_file(&index_path, &render_index(&links))?;
        info!("Master index page generated: {}", index_path.display());
        pages.push(index_path);

        Ok(pages)
    }

    fn enter(&self, stage: RunStage) {
        info!(stage = %stage, "run stage");
    }
}
