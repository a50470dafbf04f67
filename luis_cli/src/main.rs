mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use luis_api::Client;
use tracing_subscriber::EnvFilter;

use crate::config::ConnectionArgs;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "luis")]
#[command(about = "Query a LUIS language-understanding model")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send an utterance and show the intents and entities found
    Query(commands::query::QueryArgs),
    /// Print the query URL for an utterance without sending it
    Url(commands::url::UrlArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::from_arg(&cli.output);
    let settings = config::Settings::from_args(&cli.connection)?;
    let client = Client::with_base_url(&settings.base_url, settings.model)?;

    match &cli.command {
        Commands::Query(args) => commands::query::run(args, &client, &format).await?,
        Commands::Url(args) => commands::url::run(args, &client)?,
    }

    Ok(())
}

/// `RUST_LOG` wins when set and valid; otherwise `luis=info`.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("luis=info"))
}
