use persona_common::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::prompts::refinement_prompt;
use crate::template::CompiledTemplate;
use crate::types::GenerationRequest;

/// The trained persona chain: base few-shot template plus refiner
///
/// Both halves are persisted together; the generation flow loads them as
/// one unit so the pair can never drift apart on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaChain {
    pub base: CompiledTemplate,
    pub refiner: CompiledTemplate,
}

impl PersonaChain {
    pub fn new(base: CompiledTemplate, refiner: CompiledTemplate) -> Self {
        Self { base, refiner }
    }

    /// Two-step generation: draft with the base template, then restyle the
    /// draft through the refiner. Returns the refined post, uncleaned.
    pub async fn generate(
        &self,
        client: &dyn LlmClient,
        persona_name: &str,
        topic: &str,
        post_type: &str,
        content_points: &str,
    ) -> Result<String> {
        info!("Generating base draft - topic={}, post_type={}", topic, post_type);

        let base_prompt = self.base.render(&[
            ("topic", topic),
            ("post_type", post_type),
            ("content_points", content_points),
        ]);
        let draft = client.generate(GenerationRequest::new(base_prompt)).await?;
        debug!("Base draft length: {}", draft.len());

        info!("Refining draft in {} style", persona_name);

        let styled = refinement_prompt(persona_name, &draft);
        let refine_prompt = self.refiner.render(&[("raw_post", &styled)]);
        let refined = client
            .generate(GenerationRequest::new(refine_prompt))
            .await?;
        debug!("Refined post length: {}", refined.len());

        Ok(refined)
    }
}
