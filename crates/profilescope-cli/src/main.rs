mod lookup;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "profilescope-cli")]
#[command(about = "Fetch and score public social profiles")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch one profile and print its metrics and scores
    Lookup {
        /// Profile handle, with or without a leading `@`
        username: String,
        /// Print the full record as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
    /// List a profile's recent videos
    Videos {
        username: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = profilescope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, base_url = %config.base_url, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Lookup { username, json }) => {
            lookup::run_lookup(&config, &username, json).await?;
        }
        Some(Commands::Videos { username, limit }) => {
            lookup::run_videos(&config, &username, limit)?;
        }
        None => println!("profilescope-cli: run `profilescope-cli lookup <username>`"),
    }

    Ok(())
}
