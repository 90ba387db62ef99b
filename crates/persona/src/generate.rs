use persona_common::{AppConfig, Result};
use persona_llm::{load_chain, GeminiClient};
use std::io::{self, Write};

use crate::text::clean_text;

const DEFAULT_TOPIC: &str = "Mindset and adaptability";
const DEFAULT_POST_TYPE: &str = "advice";
const DEFAULT_CONTENT_POINTS: &str = "growth mindset | resilience | self-belief";

/// Inputs for the generation flow; None means ask interactively
#[derive(Debug, Default)]
pub struct GenerateArgs {
    pub topic: Option<String>,
    pub post_type: Option<String>,
    pub content_points: Option<String>,
}

/// Run the generation flow: load chain, gather inputs, generate, print
pub async fn run(config: &AppConfig, args: GenerateArgs) -> Result<()> {
    // The chain loads before anything touches the network, so a missing
    // file fails here with the not-trained message.
    let chain = load_chain(&config.chain_path)?;
    println!("Persona model loaded!\n");

    let topic = resolve_input(args.topic, "Topic", DEFAULT_TOPIC)?;
    let post_type = resolve_input(
        args.post_type,
        "Type (advice/lesson/framework/story)",
        DEFAULT_POST_TYPE,
    )?;
    let content_points =
        resolve_input(args.content_points, "Content points", DEFAULT_CONTENT_POINTS)?;

    let client = GeminiClient::from_config(config)?;

    println!("\nGenerating persona-based LinkedIn post...\n");

    let refined = chain
        .generate(
            &client,
            &config.persona_name,
            &topic,
            &post_type,
            &content_points,
        )
        .await?;

    println!("Generated Post:\n");
    println!("{}", clean_text(&refined));

    Ok(())
}

/// Use the flag value if given, otherwise prompt with a default
fn resolve_input(flag: Option<String>, label: &str, default: &str) -> Result<String> {
    if let Some(value) = flag {
        let value = value.trim().to_string();
        if !value.is_empty() {
            return Ok(value);
        }
    }

    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let line = line.trim();

    if line.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(line.to_string())
    }
}
