use crate::types::GenerationRequest;
use async_trait::async_trait;
use persona_common::Result;

/// Common trait for LLM clients
///
/// The compiler and chain take `&dyn LlmClient` so tests can run against
/// a stub instead of the hosted endpoint.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate text from a rendered prompt
    async fn generate(&self, request: GenerationRequest) -> Result<String>;
}
