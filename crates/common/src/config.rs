use crate::error::PersonaError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persona pipeline configuration
///
/// Constructed once at process start from the environment and treated as
/// read-only afterwards. All model access goes through the values here;
/// nothing else reads the process environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Google API key (GOOGLE_API_KEY); never written out
    #[serde(skip_serializing, default)]
    pub api_key: String,

    /// Generative Language API base URL
    pub api_base_url: String,

    /// Model name
    pub model: String,

    /// Maximum tokens per completion
    pub max_output_tokens: u32,

    /// Training dataset path
    pub dataset_path: PathBuf,

    /// Compiled chain output path
    pub chain_path: PathBuf,

    /// Training metadata snapshot path
    pub memory_path: PathBuf,

    /// Persona the refinement step imitates
    pub persona_name: String,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            max_output_tokens: 3000,
            dataset_path: PathBuf::from("data/persona_dataset.json"),
            chain_path: PathBuf::from("persona_optimized_chain.json"),
            memory_path: PathBuf::from("persona_memory_chain.json"),
            persona_name: "Ankur Warikoo".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, PersonaError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();
        let config = Self {
            api_key: std::env::var("GOOGLE_API_KEY").unwrap_or_default(),
            api_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or(defaults.api_base_url),
            model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            max_output_tokens: std::env::var("MAX_OUTPUT_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_output_tokens),
            dataset_path: Self::get_env_path("DATASET_PATH")
                .unwrap_or(defaults.dataset_path),
            chain_path: Self::get_env_path("CHAIN_PATH").unwrap_or(defaults.chain_path),
            memory_path: Self::get_env_path("MEMORY_PATH").unwrap_or(defaults.memory_path),
            persona_name: std::env::var("PERSONA_NAME").unwrap_or(defaults.persona_name),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), PersonaError> {
        if self.model.is_empty() {
            return Err(PersonaError::config("Model name cannot be empty"));
        }

        if !self.api_base_url.starts_with("http://")
            && !self.api_base_url.starts_with("https://")
        {
            return Err(PersonaError::config(
                "API base URL must start with http:// or https://",
            ));
        }

        if self.max_output_tokens == 0 {
            return Err(PersonaError::config("max_output_tokens cannot be 0"));
        }

        Ok(())
    }
}
