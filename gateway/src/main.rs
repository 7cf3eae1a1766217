use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "API gateway for the app catalog service")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "gateway.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match gateway::config::load_from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(path = %cli.config.display(), error = %e, "Failed to load config");
            process::exit(1);
        }
    };

    if let Err(e) = gateway::run(config).await {
        tracing::error!(error = %e, "Gateway exited with error");
        process::exit(1);
    }
}
