use persona_common::{PersonaError, Result};
use std::path::Path;
use tracing::info;

use crate::chain::PersonaChain;

/// Write the trained chain to disk as pretty JSON
pub fn save_chain(path: &Path, chain: &PersonaChain) -> Result<()> {
    let encoded = serde_json::to_string_pretty(chain)?;
    std::fs::write(path, encoded)?;
    info!("Saved trained chain: {}", path.display());
    Ok(())
}

/// Load a trained chain from disk
///
/// A missing file is reported as `NotTrained` before any network access
/// can happen; a present-but-unreadable file is a deserialization failure.
pub fn load_chain(path: &Path) -> Result<PersonaChain> {
    if !path.exists() {
        return Err(PersonaError::not_trained(path.display()));
    }

    let raw = std::fs::read_to_string(path)?;
    let chain: PersonaChain = serde_json::from_str(&raw).map_err(|e| {
        PersonaError::deserialization(format!(
            "Failed to decode {}: {}",
            path.display(),
            e
        ))
    })?;

    info!(
        "Loaded trained chain: {} ({} demos)",
        path.display(),
        chain.base.demos.len()
    );

    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{PersonaExample, Signature};
    use crate::CompiledTemplate;

    fn chain() -> PersonaChain {
        let demo = PersonaExample {
            topic: "career".to_string(),
            post_type: "advice".to_string(),
            content_points: "a | b".to_string(),
            post: "Demo post.".to_string(),
        };
        PersonaChain::new(
            CompiledTemplate::new(Signature::persona_post(), vec![demo]),
            CompiledTemplate::unbound(Signature::refinement()),
        )
    }

    #[test]
    fn test_missing_chain_file() {
        let err = load_chain(Path::new("does_not_exist_chain.json")).unwrap_err();
        assert!(matches!(err, PersonaError::NotTrained(_)));
        assert!(err.to_string().contains("Run training first"));
    }

    #[test]
    fn test_round_trip_preserves_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.json");

        save_chain(&path, &chain()).unwrap();
        let loaded = load_chain(&path).unwrap();

        assert_eq!(
            loaded.base.signature.input_names(),
            vec!["topic", "post_type", "content_points"]
        );
        assert_eq!(loaded.refiner.signature.input_names(), vec!["raw_post"]);
        assert_eq!(loaded.base.demos.len(), 1);
    }

    #[test]
    fn test_corrupt_chain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err = load_chain(&path).unwrap_err();
        assert!(matches!(err, PersonaError::Deserialization(_)));
    }
}
