use serde::{Deserialize, Serialize};

use crate::prompts::{PERSONA_POST_INSTRUCTION, REFINEMENT_INSTRUCTION};

/// A named input or output field of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub desc: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
        }
    }

    /// Prompt-facing title ("content_points" renders as "Content Points")
    pub fn title(&self) -> String {
        self.name
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Task description plus the named fields a template reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub instruction: String,
    pub inputs: Vec<FieldSpec>,
    pub outputs: Vec<FieldSpec>,
}

impl Signature {
    /// Base persona-post signature
    pub fn persona_post() -> Self {
        Self {
            instruction: PERSONA_POST_INSTRUCTION.to_string(),
            inputs: vec![
                FieldSpec::new("topic", "What the post should talk about"),
                FieldSpec::new(
                    "post_type",
                    "Type of post: advice, lesson, framework, story, reflection",
                ),
                FieldSpec::new("content_points", "2-3 key points to include"),
            ],
            outputs: vec![FieldSpec::new("post", "Generated LinkedIn post")],
        }
    }

    /// Refinement signature
    pub fn refinement() -> Self {
        Self {
            instruction: REFINEMENT_INSTRUCTION.to_string(),
            inputs: vec![FieldSpec::new(
                "raw_post",
                "Base generated post from persona",
            )],
            outputs: vec![FieldSpec::new("refined_post", "Refined LinkedIn-ready post")],
        }
    }

    /// Input field names in declaration order
    pub fn input_names(&self) -> Vec<&str> {
        self.inputs.iter().map(|f| f.name.as_str()).collect()
    }
}

/// One labeled training example for the persona-post signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaExample {
    pub topic: String,
    pub post_type: String,
    pub content_points: String,
    pub post: String,
}

impl PersonaExample {
    /// Value of a named field, if the example carries it
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "topic" => Some(&self.topic),
            "post_type" => Some(&self.post_type),
            "content_points" => Some(&self.content_points),
            "post" => Some(&self.post),
            _ => None,
        }
    }
}

/// A signature bound to its selected in-context demonstrations
///
/// Immutable once compiled; this is the unit that gets persisted and
/// loaded back by the generation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledTemplate {
    pub signature: Signature,
    pub demos: Vec<PersonaExample>,
}

impl CompiledTemplate {
    pub fn new(signature: Signature, demos: Vec<PersonaExample>) -> Self {
        Self { signature, demos }
    }

    /// Template with no bound demonstrations
    pub fn unbound(signature: Signature) -> Self {
        Self {
            signature,
            demos: Vec::new(),
        }
    }

    /// Render the full prompt: instruction, format block, demos, then the
    /// query with an empty slot for the first output field.
    pub fn render(&self, inputs: &[(&str, &str)]) -> String {
        let mut out = String::new();

        out.push_str(&self.signature.instruction);
        out.push_str("\n\nFollow this format.\n\n");

        for field in self.signature.inputs.iter().chain(&self.signature.outputs) {
            out.push_str(&format!("{}: {}\n", field.title(), field.desc));
        }

        for demo in &self.demos {
            out.push_str("\n---\n\n");
            for field in &self.signature.inputs {
                let value = demo.field(&field.name).unwrap_or_default();
                out.push_str(&format!("{}: {}\n", field.title(), value));
            }
            for field in &self.signature.outputs {
                let value = demo.field(&field.name).unwrap_or_default();
                out.push_str(&format!("{}: {}\n", field.title(), value));
            }
        }

        out.push_str("\n---\n\n");
        for field in &self.signature.inputs {
            let value = inputs
                .iter()
                .find(|(name, _)| *name == field.name)
                .map(|(_, value)| *value)
                .unwrap_or_default();
            out.push_str(&format!("{}: {}\n", field.title(), value));
        }
        if let Some(field) = self.signature.outputs.first() {
            out.push_str(&format!("{}:", field.title()));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(topic: &str) -> PersonaExample {
        PersonaExample {
            topic: topic.to_string(),
            post_type: "advice".to_string(),
            content_points: "point one | point two".to_string(),
            post: "Full post body.".to_string(),
        }
    }

    #[test]
    fn test_field_title() {
        assert_eq!(FieldSpec::new("topic", "").title(), "Topic");
        assert_eq!(FieldSpec::new("content_points", "").title(), "Content Points");
        assert_eq!(FieldSpec::new("raw_post", "").title(), "Raw Post");
    }

    #[test]
    fn test_persona_post_field_names() {
        let signature = Signature::persona_post();
        assert_eq!(
            signature.input_names(),
            vec!["topic", "post_type", "content_points"]
        );
        assert_eq!(signature.outputs[0].name, "post");
    }

    #[test]
    fn test_render_includes_demos_and_query() {
        let template = CompiledTemplate::new(
            Signature::persona_post(),
            vec![example("career")],
        );
        let prompt = template.render(&[
            ("topic", "mindset"),
            ("post_type", "lesson"),
            ("content_points", "a | b"),
        ]);

        assert!(prompt.starts_with("Generate a LinkedIn post"));
        assert!(prompt.contains("Topic: career"));
        assert!(prompt.contains("Post: Full post body."));
        assert!(prompt.contains("Topic: mindset"));
        assert!(prompt.contains("Content Points: a | b"));
        assert!(prompt.trim_end().ends_with("Post:"));
    }

    #[test]
    fn test_render_unbound_refinement() {
        let template = CompiledTemplate::unbound(Signature::refinement());
        let prompt = template.render(&[("raw_post", "draft text")]);
        assert!(prompt.contains("Raw Post: draft text"));
        assert!(prompt.trim_end().ends_with("Refined Post:"));
        assert!(!prompt.contains("---\n\n---"));
    }

    #[test]
    fn test_template_serde_preserves_field_names() {
        let template = CompiledTemplate::new(
            Signature::persona_post(),
            vec![example("career"), example("mindset")],
        );
        let encoded = serde_json::to_string(&template).unwrap();
        let decoded: CompiledTemplate = serde_json::from_str(&encoded).unwrap();

        assert_eq!(
            decoded.signature.input_names(),
            template.signature.input_names()
        );
        assert_eq!(decoded.demos.len(), 2);
        assert_eq!(decoded, template);
    }
}
