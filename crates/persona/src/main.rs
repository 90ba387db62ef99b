use anyhow::Result;
use clap::{Parser, Subcommand};
use persona_common::{logger, AppConfig};
use std::path::PathBuf;

mod dataset;
mod extract;
mod generate;
mod memory;
mod text;
mod train;

#[derive(Parser)]
#[command(name = "persona")]
#[command(about = "Few-shot persona post trainer and generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the persona chain from the post dataset
    Train {
        /// Dataset path (overrides DATASET_PATH)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },

    /// Generate a post with the trained chain
    Generate {
        /// Topic for the post (prompted interactively when omitted)
        #[arg(long)]
        topic: Option<String>,

        /// Post type: advice, lesson, framework, story, reflection
        #[arg(long)]
        post_type: Option<String>,

        /// Pipe-delimited content points
        #[arg(long)]
        content_points: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    logger::setup_console_logging(&config.log_level)?;
    config.validate()?;

    match cli.command {
        Commands::Train { dataset } => {
            train::run(&config, dataset).await?;
        }
        Commands::Generate {
            topic,
            post_type,
            content_points,
        } => {
            generate::run(
                &config,
                generate::GenerateArgs {
                    topic,
                    post_type,
                    content_points,
                },
            )
            .await?;
        }
    }

    Ok(())
}
