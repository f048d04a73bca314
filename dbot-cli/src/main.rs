//! dbot: runs the Telegram bot. Config from env (and `.env`); `--token` overrides BOT_TOKEN.

use anyhow::Result;
use clap::Parser;
use dbot_cli::{load_config, Cli, Commands};
use dbot_core::init_tracing;
use dbot_telegram::log_file_from_env;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_file = log_file_from_env();
    init_tracing(&log_file)?;

    match cli.command {
        Commands::Run { token } => run(token).await.inspect_err(|e| {
            error!("Failed to start bot: {:#}", e);
        }),
    }
}

async fn run(token: Option<String>) -> Result<()> {
    let config = load_config(token)?;
    info!(
        log_file = %config.log_file,
        custom_api_url = config.telegram_api_url.is_some(),
        "Initializing bot"
    );
    dbot_telegram::run(&config).await
}
