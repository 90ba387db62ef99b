use persona_common::{AppConfig, Result};
use persona_llm::{
    save_chain, BootstrapFewShot, CompiledTemplate, GeminiClient, PersonaChain, Signature,
};
use std::path::PathBuf;
use tracing::info;

use crate::dataset::{build_trainset, load_dataset};
use crate::memory::PersonaMemory;

/// Run the full training flow: dataset in, chain + memory snapshot out
pub async fn run(config: &AppConfig, dataset_override: Option<PathBuf>) -> Result<()> {
    let dataset_path = dataset_override.unwrap_or_else(|| config.dataset_path.clone());

    let records = load_dataset(&dataset_path)?;
    let trainset = build_trainset(&records);
    info!("Loaded {} training examples", trainset.len());

    let client = GeminiClient::from_config(config)?;

    let base = BootstrapFewShot::default()
        .compile(&client, Signature::persona_post(), &trainset)
        .await?;
    let refiner = CompiledTemplate::unbound(Signature::refinement());
    let chain = PersonaChain::new(base, refiner);

    // Both artifacts are written unconditionally at the end of the run.
    save_chain(&config.chain_path, &chain)?;
    PersonaMemory::from_trainset(&config.persona_name, &trainset).save(&config.memory_path)?;

    println!("Persona chain training completed!");
    println!("Saved: {}", config.chain_path.display());
    println!("Saved: {}", config.memory_path.display());

    Ok(())
}
