use chrono::Utc;
use persona_common::Result;
use persona_llm::PersonaExample;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

/// Write-only snapshot of a training run
///
/// Purely informational; neither flow reads it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaMemory {
    pub persona_name: String,
    pub trained_on_topics: Vec<String>,
    pub training_date: String,
    pub post_count: usize,
}

impl PersonaMemory {
    /// Snapshot the trainset: deduplicated topics, today's date, count
    pub fn from_trainset(persona_name: &str, trainset: &[PersonaExample]) -> Self {
        let topics: BTreeSet<String> =
            trainset.iter().map(|example| example.topic.clone()).collect();

        Self {
            persona_name: persona_name.to_string(),
            trained_on_topics: topics.into_iter().collect(),
            training_date: Utc::now().format("%Y-%m-%d").to_string(),
            post_count: trainset.len(),
        }
    }

    /// Write the snapshot as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let encoded = serde_json::to_string_pretty(self)?;
        std::fs::write(path, encoded)?;
        info!("Saved training memory: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(topic: &str) -> PersonaExample {
        PersonaExample {
            topic: topic.to_string(),
            post_type: "advice".to_string(),
            content_points: "a | b".to_string(),
            post: "Post body.".to_string(),
        }
    }

    #[test]
    fn test_topics_deduplicated_and_count_kept() {
        let trainset = vec![
            example("career"),
            example("mindset"),
            example("productivity"),
        ];
        let memory = PersonaMemory::from_trainset("Ankur Warikoo", &trainset);

        assert_eq!(memory.post_count, 3);
        let topics: BTreeSet<&str> =
            memory.trained_on_topics.iter().map(String::as_str).collect();
        assert_eq!(
            topics,
            BTreeSet::from(["career", "mindset", "productivity"])
        );
    }

    #[test]
    fn test_repeated_topics_collapse() {
        let trainset = vec![example("career"), example("career"), example("mindset")];
        let memory = PersonaMemory::from_trainset("Ankur Warikoo", &trainset);

        assert_eq!(memory.post_count, 3);
        assert_eq!(memory.trained_on_topics, vec!["career", "mindset"]);
    }

    #[test]
    fn test_save_writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memory.json");

        let memory = PersonaMemory::from_trainset("Ankur Warikoo", &[example("career")]);
        memory.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let decoded: PersonaMemory = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded.post_count, 1);
        assert_eq!(decoded.persona_name, "Ankur Warikoo");
        // Date format is YYYY-MM-DD
        assert_eq!(decoded.training_date.len(), 10);
    }
}
