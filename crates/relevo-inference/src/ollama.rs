//! Ollama completion backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use relevo_core::{Completion, CompletionBackend, CompletionRequest, Error, Result};

/// Default Ollama endpoint.
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Default generation model.
pub const DEFAULT_GEN_MODEL: &str = "qwen3:8b";

/// Default timeout for completion requests (seconds).
pub const GEN_TIMEOUT_SECS: u64 = 60;

/// Ollama completion backend.
///
/// Talks to the `/api/chat` endpoint for completions and `/api/tags` for
/// availability checks.
pub struct OllamaBackend {
    client: Client,
    base_url: String,
    gen_model: String,
    gen_timeout_secs: u64,
}

impl OllamaBackend {
    /// Create a new Ollama backend with default settings.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_OLLAMA_URL.to_string(), DEFAULT_GEN_MODEL.to_string())
    }

    /// Create a new Ollama backend with custom endpoint and model.
    pub fn with_config(base_url: String, gen_model: String) -> Self {
        let gen_timeout = std::env::var("RELEVO_GEN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(GEN_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(gen_timeout))
            .build()
            .expect("Failed to create HTTP client");

        info!(
            "Initializing Ollama backend: url={}, model={}",
            base_url, gen_model
        );

        Self {
            client,
            base_url,
            gen_model,
            gen_timeout_secs: gen_timeout,
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("RELEVO_OLLAMA_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());
        let gen_model =
            std::env::var("RELEVO_GEN_MODEL").unwrap_or_else(|_| DEFAULT_GEN_MODEL.to_string());

        Self::with_config(base_url, gen_model)
    }

    /// Set the generation model to use.
    pub fn set_gen_model(&mut self, model_name: String) {
        info!(
            "Switching generation model from {} to {}",
            self.gen_model, model_name
        );
        self.gen_model = model_name;
    }
}

impl Default for OllamaBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Chat API message for `/api/chat`.
#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Per-request generation options.
#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
    num_predict: u32,
}

/// Request payload for the Ollama `/api/chat` endpoint.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
    options: ChatOptions,
}

/// Response from the Ollama `/api/chat` endpoint.
#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[async_trait]
impl CompletionBackend for OllamaBackend {
    async fn is_available(&self) -> bool {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => true,
            Ok(resp) => {
                warn!("Ollama availability check failed: {}", resp.status());
                false
            }
            Err(e) => {
                warn!("Ollama availability check error: {}", e);
                false
            }
        }
    }

    #[instrument(skip(self, request), fields(component = "ollama", op = "complete", model = %self.gen_model, prompt_len = request.prompt.len()))]
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        let start = Instant::now();

        let mut messages = Vec::new();
        if !request.system.is_empty() {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: request.system.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: request.prompt.clone(),
        });

        let payload = ChatRequest {
            model: self.gen_model.clone(),
            messages,
            stream: false,
            options: ChatOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .timeout(Duration::from_secs(self.gen_timeout_secs))
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse response: {}", e)))?;

        let text = result.message.content;
        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            response_len = text.len(),
            duration_ms = elapsed,
            "Completion finished"
        );
        if elapsed > 30_000 {
            warn!(
                duration_ms = elapsed,
                prompt_len = request.prompt.len(),
                slow = true,
                "Slow completion operation"
            );
        }

        Ok(Completion {
            text,
            tokens_used: result.eval_count,
        })
    }

    fn model_name(&self) -> &str {
        &self.gen_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_OLLAMA_URL, "http://127.0.0.1:11434");
        assert_eq!(DEFAULT_GEN_MODEL, "qwen3:8b");
        assert_eq!(GEN_TIMEOUT_SECS, 60);
    }

    #[test]
    fn test_default_config() {
        let backend = OllamaBackend::new();
        assert_eq!(backend.base_url, DEFAULT_OLLAMA_URL);
        assert_eq!(backend.model_name(), DEFAULT_GEN_MODEL);
    }

    #[test]
    fn test_with_config() {
        let backend = OllamaBackend::with_config(
            "http://10.0.0.5:11434".to_string(),
            "mistral".to_string(),
        );
        assert_eq!(backend.base_url, "http://10.0.0.5:11434");
        assert_eq!(backend.model_name(), "mistral");
    }

    #[test]
    fn test_set_gen_model() {
        let mut backend = OllamaBackend::new();
        backend.set_gen_model("llama3:8b".to_string());
        assert_eq!(backend.model_name(), "llama3:8b");
    }

    #[test]
    fn test_chat_request_serialization_omits_nothing_required() {
        let payload = ChatRequest {
            model: "m".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
            stream: false,
            options: ChatOptions {
                temperature: 0.3,
                num_predict: 256,
            },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["num_predict"], 256);
    }
}
