//! Generation Client — bounded retry around a `CompletionBackend`.
//!
//! Never returns an error. With no backend configured every call yields the mock
//! placeholder; when all attempts fail it yields the failure placeholder. The
//! `GenerationOutcome` says which of the three paths produced the text.

use std::sync::Arc;

use tracing::warn;

use crate::config::RetryPolicy;
use crate::llm_client::CompletionBackend;

/// Characters of the user instruction echoed into placeholder text.
const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// The service answered on attempt `attempts`.
    Generated { attempts: u32 },
    /// No credential configured; no call was made.
    Mock,
    /// Every attempt failed.
    Exhausted { attempts: u32, last_error: String },
}

impl GenerationOutcome {
    pub fn label(&self) -> String {
        match self {
            GenerationOutcome::Generated { attempts } => format!("generated (attempt {attempts})"),
            GenerationOutcome::Mock => "mock".to_string(),
            GenerationOutcome::Exhausted { attempts, .. } => {
                format!("failed after {attempts} attempts")
            }
        }
    }

    pub fn is_placeholder(&self) -> bool {
        !matches!(self, GenerationOutcome::Generated { .. })
    }
}

/// Text produced by one client call.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub text: String,
    pub outcome: GenerationOutcome,
}

/// A catalog entry's generation, held in memory for the rest of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub key: String,
    pub title: String,
    pub text: String,
    pub outcome: GenerationOutcome,
}

#[derive(Clone)]
pub struct GenerationClient {
    backend: Option<Arc<dyn CompletionBackend>>,
    retry: RetryPolicy,
    default_max_tokens: u32,
}

impl GenerationClient {
    pub fn new(
        backend: Option<Arc<dyn CompletionBackend>>,
        retry: RetryPolicy,
        default_max_tokens: u32,
    ) -> Self {
        Self {
            backend,
            retry,
            default_max_tokens,
        }
    }

    /// Generates text for one (system, user) pair.
    ///
    /// Sleeps `retry.delay_after(n)` after failed attempt `n`, except after the last.
    pub async fn generate(
        &self,
        system: &str,
        prompt: &str,
        max_tokens: Option<u32>,
    ) -> Generation {
        let Some(backend) = &self.backend else {
            return Generation {
                text: mock_response(prompt),
                outcome: GenerationOutcome::Mock,
            };
        };

        let max_tokens = max_tokens.unwrap_or(self.default_max_tokens);
        let max_attempts = self.retry.max_attempts.max(1);
        let mut last_error = String::new();

        for attempt in 1..=max_attempts {
            match backend.complete(system, prompt, max_tokens).await {
                Ok(text) => {
                    return Generation {
                        text: text.trim().to_string(),
                        outcome: GenerationOutcome::Generated { attempts: attempt },
                    };
                }
                Err(e) => {
                    warn!("LLM call failed ({attempt}/{max_attempts}): {e}");
                    last_error = e.to_string();
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.retry.delay_after(attempt)).await;
            }
        }

        Generation {
            text: failure_placeholder(prompt),
            outcome: GenerationOutcome::Exhausted {
                attempts: max_attempts,
                last_error,
            },
        }
    }
}

/// Placeholder used when no credential is configured.
pub fn mock_response(prompt: &str) -> String {
    format!("[MOCK MODE] Prompt: {}...", prompt_preview(prompt))
}

/// Placeholder used when every attempt failed.
pub fn failure_placeholder(prompt: &str) -> String {
    format!("[FAILED after retries] Prompt: {}...", prompt_preview(prompt))
}

fn prompt_preview(prompt: &str) -> String {
    prompt.chars().take(PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_support::{overloaded, ScriptedBackend};

    fn client_with(backend: Arc<ScriptedBackend>) -> GenerationClient {
        let backend: Arc<dyn CompletionBackend> = backend;
        GenerationClient::new(Some(backend), RetryPolicy::default(), 900)
    }

    #[tokio::test]
    async fn test_mock_mode_embeds_first_50_chars() {
        let client = GenerationClient::new(None, RetryPolicy::default(), 900);
        let prompt = "Generate 10 faceless, no-capital micro-SaaS or digital product ideas.";

        let generation = client.generate("sys", prompt, None).await;

        assert_eq!(generation.outcome, GenerationOutcome::Mock);
        assert_eq!(
            generation.text,
            "[MOCK MODE] Prompt: Generate 10 faceless, no-capital micro-SaaS or dig..."
        );
    }

    #[test]
    fn test_preview_does_not_split_multibyte_chars() {
        let prompt = "é".repeat(60);
        assert_eq!(
            mock_response(&prompt),
            format!("[MOCK MODE] Prompt: {}...", "é".repeat(50))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_first_attempt_does_not_sleep() {
        let backend = ScriptedBackend::new(vec![Ok("  Idea one\nIdea two  ".to_string())]);
        let client = client_with(backend.clone());
        let start = tokio::time::Instant::now();

        let generation = client.generate("sys", "do A", None).await;

        assert_eq!(generation.text, "Idea one\nIdea two");
        assert_eq!(generation.outcome, GenerationOutcome::Generated { attempts: 1 });
        assert_eq!(backend.call_count(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_one_failure() {
        let backend = ScriptedBackend::new(vec![overloaded(), Ok("ok".to_string())]);
        let client = client_with(backend.clone());
        let start = tokio::time::Instant::now();

        let generation = client.generate("sys", "do A", None).await;

        assert_eq!(generation.outcome, GenerationOutcome::Generated { attempts: 2 });
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_failures_return_placeholder_and_stop() {
        let backend = ScriptedBackend::new(vec![
            overloaded(),
            overloaded(),
            overloaded(),
            Ok("never reached".to_string()),
        ]);
        let client = client_with(backend.clone());
        let start = tokio::time::Instant::now();

        let generation = client.generate("sys", "do A", None).await;

        assert_eq!(generation.text, "[FAILED after retries] Prompt: do A...");
        match generation.outcome {
            GenerationOutcome::Exhausted {
                attempts,
                last_error,
            } => {
                assert_eq!(attempts, 3);
                assert!(last_error.contains("Overloaded"));
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
        assert_eq!(backend.call_count(), 3);
        // 2s after attempt 1, 4s after attempt 2, nothing after the last.
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(
            GenerationOutcome::Generated { attempts: 2 }.label(),
            "generated (attempt 2)"
        );
        assert_eq!(GenerationOutcome::Mock.label(), "mock");
        assert!(GenerationOutcome::Mock.is_placeholder());
    }
}
