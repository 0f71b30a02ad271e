mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sultek_api::{Config, ConfigError, Session};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "sultek")]
#[command(about = "Query account and campaign data from the Sultek analytics API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Base URI of the API
    #[arg(long, env = "SULTEK_URI", global = true)]
    uri: Option<String>,

    /// Bearer token
    #[arg(long, env = "SULTEK_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Client timeout in seconds
    #[arg(long, env = "SULTEK_CLIENT_TIMEOUT", default_value = "30", global = true)]
    timeout: i64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List ad accounts
    Accounts(commands::accounts::AccountsArgs),
    /// Show campaign performance aggregated by date
    Campaigns(commands::campaigns::CampaignsArgs),
    /// Fetch accounts and campaign data concurrently
    Report(commands::report::ReportArgs),
}

impl Cli {
    fn config(&self) -> Result<Config, ConfigError> {
        let uri = self
            .uri
            .as_deref()
            .ok_or(ConfigError::MissingVariable("SULTEK_URI"))?;
        let token = self
            .token
            .clone()
            .ok_or(ConfigError::MissingVariable("SULTEK_TOKEN"))?;
        Config::new(uri, token, self.timeout)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sultek=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let config = cli.config()?;
    tracing::debug!(?config, "loaded configuration");
    let session = Session::new(&config)?;

    match &cli.command {
        Commands::Accounts(args) => commands::accounts::run(args, &session, &format).await?,
        Commands::Campaigns(args) => commands::campaigns::run(args, &session, &format).await?,
        Commands::Report(args) => commands::report::run(args, &session, &format).await?,
    }

    Ok(())
}
