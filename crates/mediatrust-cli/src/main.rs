mod analyze;
mod sources;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mediatrust-cli")]
#[command(about = "MediaTrust command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch, score, rank and summarize recent articles about a topic
    Analyze {
        /// Search topic, e.g. "Tesla"
        topic: String,

        /// Number of articles to flag as most extreme (overrides `MEDIATRUST_TOP_N`)
        #[arg(long)]
        top_n: Option<usize>,

        /// Print the full enriched records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the news sources with a known political lean
    Sources,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze { topic, top_n, json }) => {
            let mut config = mediatrust_core::load_app_config()?;
            if let Some(top_n) = top_n {
                config.top_n = top_n;
            }
            analyze::run_analyze(&config, &topic, json).await?;
        }
        Some(Commands::Sources) => sources::run_sources(),
        None => println!("mediatrust-cli ready; run `mediatrust-cli --help` for commands"),
    }

    Ok(())
}
