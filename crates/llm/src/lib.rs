//! Persona LLM integration
//!
//! Gemini API client, prompt templates, and the few-shot persona chain

mod chain;
mod client;
mod compile;
mod llm_trait;
mod persist;
mod prompts;
mod template;
mod types;

pub use chain::PersonaChain;
pub use client::GeminiClient;
pub use compile::BootstrapFewShot;
pub use llm_trait::LlmClient;
pub use persist::{load_chain, save_chain};
pub use prompts::{refinement_prompt, PERSONA_POST_INSTRUCTION, REFINEMENT_INSTRUCTION};
pub use template::{CompiledTemplate, FieldSpec, PersonaExample, Signature};
pub use types::GenerationRequest;
