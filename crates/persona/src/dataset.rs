use persona_common::{PersonaError, Result};
use persona_llm::PersonaExample;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use crate::extract::extract_content_points;
use crate::text::remove_markdown;

/// One raw dataset record
///
/// Missing keys fall back to the same defaults the dataset has always
/// assumed; there is no schema validation beyond that.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    #[serde(default = "default_topic")]
    pub topic: String,

    #[serde(default = "default_post_type")]
    pub post_type: String,

    #[serde(default)]
    pub post: String,
}

fn default_topic() -> String {
    "general".to_string()
}

fn default_post_type() -> String {
    "advice".to_string()
}

/// Load the dataset JSON array from disk
pub fn load_dataset(path: &Path) -> Result<Vec<PostRecord>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        PersonaError::dataset(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let records: Vec<PostRecord> = serde_json::from_str(&raw).map_err(|e| {
        PersonaError::dataset(format!("Invalid dataset JSON in {}: {}", path.display(), e))
    })?;

    info!("Loaded {} dataset records from {}", records.len(), path.display());

    Ok(records)
}

/// Normalize records into labeled training examples
///
/// Posts that are empty after markdown cleanup are skipped.
pub fn build_trainset(records: &[PostRecord]) -> Vec<PersonaExample> {
    let mut trainset = Vec::new();

    for record in records {
        let post_text = remove_markdown(record.post.trim());
        if post_text.is_empty() {
            debug!("Skipping record with empty post - topic={}", record.topic);
            continue;
        }

        let content_points =
            extract_content_points(&post_text, &record.topic, &record.post_type);

        trainset.push(PersonaExample {
            topic: record.topic.clone(),
            post_type: record.post_type.clone(),
            content_points,
            post: post_text,
        });
    }

    trainset
}
