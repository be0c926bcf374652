// Generation: retrying client over the LLM backend, plus the result types
// carried through the rest of a run.
// All service calls go through llm_client — nothing here builds HTTP requests.

pub mod client;

pub use client::{GenerationClient, GenerationResult};
