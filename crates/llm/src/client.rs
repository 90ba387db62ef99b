use persona_common::{AppConfig, PersonaError, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::llm_trait::LlmClient;
use crate::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GenerationRequest, Part,
};

const MAX_RETRIES: u32 = 3;

/// Gemini generateContent API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    max_output_tokens: u32,
    client: Client,
}

impl GeminiClient {
    /// Create a client from the application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(PersonaError::config(
                "GOOGLE_API_KEY is not set. Add it to the environment or a .env file.",
            ));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // 5 minutes for LLM calls
            .build()
            .map_err(|e| PersonaError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Gemini client initialized: model={}, base_url={}",
            config.model, config.api_base_url
        );

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            max_output_tokens: config.max_output_tokens,
            client,
        })
    }

    /// Model name this client sends requests to
    pub fn model(&self) -> &str {
        &self.model
    }

    // Key stays out of logs; it only appears in the query string.
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Generate text with retry on transient failures
    pub async fn generate(&self, request: GenerationRequest) -> Result<String> {
        let url = self.endpoint();
        let body = self.build_body(&request);

        debug!(
            "Sending generate request - Model: {}, Prompt length: {}",
            self.model,
            request.prompt.len()
        );

        let mut last_error = None;

        for attempt in 1..=MAX_RETRIES {
            match self.try_generate(&url, &body).await {
                Ok(text) => {
                    debug!("Received completion - Length: {}", text.len());
                    return Ok(text);
                }
                Err(e) if e.is_retryable() && attempt < MAX_RETRIES => {
                    let delay = std::time::Duration::from_secs(2u64.pow(attempt - 1));
                    warn!(
                        "Gemini request failed (attempt {}/{}): {}. Retrying in {:?}...",
                        attempt, MAX_RETRIES, e, delay
                    );
                    last_error = Some(e);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error
            .unwrap_or_else(|| PersonaError::model_unavailable("All retries failed")))
    }

    fn build_body(&self, request: &GenerationRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: Some(
                    request.max_output_tokens.unwrap_or(self.max_output_tokens),
                ),
            }),
        }
    }

    /// Single attempt to generate text
    async fn try_generate(&self, url: &str, body: &GenerateContentRequest) -> Result<String> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| PersonaError::model_unavailable(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &detail));
        }

        let result: GenerateContentResponse = response.json().await.map_err(|e| {
            PersonaError::malformed_response(format!("Failed to parse response: {}", e))
        })?;

        result
            .first_text()
            .ok_or_else(|| PersonaError::malformed_response("Empty completion from Gemini"))
    }
}

/// Map an HTTP error status to a distinct error kind
fn map_status_error(status: StatusCode, detail: &str) -> PersonaError {
    let detail = truncate_detail(detail);
    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            PersonaError::quota_exceeded(format!("HTTP 429: {}", detail))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            PersonaError::config(format!("API key rejected (HTTP {}): {}", status.as_u16(), detail))
        }
        s if s.is_server_error() => {
            PersonaError::model_unavailable(format!("HTTP {}: {}", s.as_u16(), detail))
        }
        s => PersonaError::malformed_response(format!(
            "Unexpected HTTP {}: {}",
            s.as_u16(),
            detail
        )),
    }
}

fn truncate_detail(detail: &str) -> String {
    let detail = detail.trim();
    if detail.len() > 200 {
        let cut = detail
            .char_indices()
            .take_while(|(i, _)| *i < 200)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &detail[..cut])
    } else {
        detail.to_string()
    }
}

#[async_trait::async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String> {
        GeminiClient::generate(self, request).await
    }
}
