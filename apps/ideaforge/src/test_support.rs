use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::{CompletionBackend, LlmError};

/// Backend that replays a fixed script and records every call.
///
/// Once the script runs out every call fails with `LlmError::EmptyContent`.
pub(crate) struct ScriptedBackend {
    script: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
}

impl ScriptedBackend {
    pub(crate) fn new(script: Vec<Result<String, LlmError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// A backend whose every call fails.
    pub(crate) fn failing() -> Arc<Self> {
        Self::new(Vec::new())
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
            max_tokens,
        });
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}

pub(crate) fn overloaded() -> Result<String, LlmError> {
    Err(LlmError::Api {
        status: 529,
        message: "Overloaded".to_string(),
    })
}
