//! Mock completion backend for deterministic testing.
//!
//! Provides a scripted [`CompletionBackend`] implementation with builder-style
//! configuration and a call log for assertions.
//!
//! ## Usage
//!
//! Requires the `mock` feature.
//!
//! ```rust,ignore
//! use relevo_core::{CompletionBackend, CompletionRequest};
//! use relevo_inference::mock::MockCompletionBackend;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let backend = MockCompletionBackend::new().with_fixed_response("expanded query");
//! let completion = backend
//!     .complete(&CompletionRequest::new("anything"))
//!     .await
//!     .unwrap();
//! assert_eq!(completion.text, "expanded query");
//! # }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use relevo_core::{Completion, CompletionBackend, CompletionRequest, Error, Result};

/// Mock completion backend for testing.
#[derive(Clone)]
pub struct MockCompletionBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    available: bool,
    fail: bool,
    default_response: String,
    fixed_responses: HashMap<String, String>,
    model: String,
}

/// One recorded call, for assertions.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub prompt: String,
    pub system: String,
    pub temperature: f32,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            available: true,
            fail: false,
            default_response: "Mock response".to_string(),
            fixed_responses: HashMap::new(),
            model: "mock-model".to_string(),
        }
    }
}

impl MockCompletionBackend {
    /// Create a new mock backend with default configuration.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock backend that reports itself unavailable.
    pub fn unavailable() -> Self {
        Self::new().with_availability(false)
    }

    /// Set whether the backend reports itself available.
    pub fn with_availability(mut self, available: bool) -> Self {
        Arc::make_mut(&mut self.config).available = available;
        self
    }

    /// Make every `complete` call fail with an inference error.
    pub fn with_failure(mut self) -> Self {
        Arc::make_mut(&mut self.config).fail = true;
        self
    }

    /// Set the response returned for any prompt without a mapping.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).default_response = response.into();
        self
    }

    /// Map a prompt substring to a specific response. The first mapping whose
    /// key occurs in the prompt wins.
    pub fn with_response_mapping(
        mut self,
        prompt_contains: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Arc::make_mut(&mut self.config)
            .fixed_responses
            .insert(prompt_contains.into(), response.into());
        self
    }

    /// Get all logged calls for assertion.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of `complete` calls made.
    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.call_log.lock().unwrap().clear()
    }
}

impl Default for MockCompletionBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionBackend for MockCompletionBackend {
    async fn is_available(&self) -> bool {
        self.config.available
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        self.call_log.lock().unwrap().push(MockCall {
            prompt: request.prompt.clone(),
            system: request.system.clone(),
            temperature: request.temperature,
        });

        if self.config.fail {
            return Err(Error::Inference("simulated failure".to_string()));
        }

        let text = self
            .config
            .fixed_responses
            .iter()
            .find(|(needle, _)| request.prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| self.config.default_response.clone());

        Ok(Completion {
            text,
            tokens_used: None,
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
