mod commands;
mod output;

use anyhow::{Context, Result};
use btcjam_api::Client;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "btcjam")]
#[command(about = "Browse BTCJam loan listings and your profile")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API root to send requests to
    #[arg(long, env = "BTCJAM_BASE_URL", default_value = btcjam_api::DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Application id for authenticated requests
    #[arg(long, env = "BTCJAM_APP_ID", global = true)]
    app_id: Option<String>,

    /// Application secret for authenticated requests
    #[arg(long, env = "BTCJAM_APP_SECRET", hide_env_values = true, global = true)]
    app_secret: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List open loan listings
    Listings(commands::listings::ListingsArgs),
    /// Show your own profile (always printed as JSON)
    Profile,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("btcjam=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);
    let client = build_client(&cli)?;

    match &cli.command {
        Commands::Listings(args) => commands::listings::run(args, &client, &format).await?,
        Commands::Profile => commands::profile::run(&client).await?,
    }

    Ok(())
}

fn build_client(cli: &Cli) -> Result<Client> {
    let mut client = Client::with_base_url(&cli.base_url)
        .with_context(|| format!("Failed to create client for {}", cli.base_url))?;
    if cli.app_id.is_some() || cli.app_secret.is_some() {
        client.set_authentication(
            cli.app_id.as_deref().unwrap_or_default(),
            cli.app_secret.as_deref().unwrap_or_default(),
        );
    }
    Ok(client)
}
