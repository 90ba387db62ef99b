use persona_common::{PersonaError, Result};
use tracing::{debug, info, warn};

use crate::llm_trait::LlmClient;
use crate::template::{CompiledTemplate, PersonaExample, Signature};
use crate::types::GenerationRequest;

/// Bootstrap few-shot compiler
///
/// Walks the trainset in order and keeps an example as a demonstration if
/// the model completes its rendered prompt without error, stopping at
/// `max_demos`. No quality metric is applied; a non-error completion is
/// enough. If every probe fails, the first `max_demos` examples are bound
/// directly as labeled demonstrations.
pub struct BootstrapFewShot {
    pub max_demos: usize,
}

impl Default for BootstrapFewShot {
    fn default() -> Self {
        Self { max_demos: 5 }
    }
}

impl BootstrapFewShot {
    pub fn new(max_demos: usize) -> Self {
        Self { max_demos }
    }

    /// Select demonstrations from the trainset and bind them to the signature
    pub async fn compile(
        &self,
        client: &dyn LlmClient,
        signature: Signature,
        trainset: &[PersonaExample],
    ) -> Result<CompiledTemplate> {
        if trainset.is_empty() {
            return Err(PersonaError::dataset("Trainset is empty"));
        }

        info!(
            "Compiling few-shot template - {} candidates, max {} demos",
            trainset.len(),
            self.max_demos
        );

        let probe = CompiledTemplate::unbound(signature.clone());
        let mut demos = Vec::new();

        for (i, example) in trainset.iter().enumerate() {
            if demos.len() >= self.max_demos {
                break;
            }

            let inputs: Vec<(&str, &str)> = signature
                .inputs
                .iter()
                .filter_map(|field| {
                    example.field(&field.name).map(|v| (field.name.as_str(), v))
                })
                .collect();
            let prompt = probe.render(&inputs);

            match client.generate(GenerationRequest::new(prompt)).await {
                Ok(_) => {
                    debug!("Bootstrapped demo {} from example {}", demos.len() + 1, i);
                    demos.push(example.clone());
                }
                Err(e) => {
                    warn!("Probe failed for example {}: {}. Skipping.", i, e);
                }
            }
        }

        if demos.is_empty() {
            // Labeled fallback: bind examples without probing
            warn!("All probes failed, falling back to labeled demonstrations");
            demos = trainset.iter().take(self.max_demos).cloned().collect();
        }

        info!("Compiled template with {} demonstrations", demos.len());

        Ok(CompiledTemplate::new(signature, demos))
    }
}
