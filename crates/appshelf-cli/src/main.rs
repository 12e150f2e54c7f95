use clap::{Parser, Subcommand};

mod fetch;

#[derive(Debug, Parser)]
#[command(name = "appshelf")]
#[command(about = "Resolve App Store URLs into normalized app metadata")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve one or more App Store product URLs.
    Fetch {
        /// App Store product URLs, in display order.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print the resolved listings as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },
    /// Resolve every app referenced by a hosted manifest document.
    Manifest {
        /// URL of the JSON manifest document.
        url: String,
        /// Print the resolved listings as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },
    /// Resolve the built-in two-entry sample manifest.
    Sample {
        /// Print the resolved listings as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = appshelf_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch { urls, json } => fetch::run_fetch_urls(&config, &urls, json).await,
        Commands::Manifest { url, json } => fetch::run_fetch_manifest(&config, &url, json).await,
        Commands::Sample { json } => fetch::run_fetch_sample(&config, json).await,
    }
}
