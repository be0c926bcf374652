// Run pipeline: catalog → generate → persist → summary → pages.
// Sequential by construction; one service call in flight at a time.

pub mod orchestrator;

pub use orchestrator::{Orchestrator, RunReport, RunStage};
