//! mhsbot: run the admin bot, the student search bot, or both. Config from env (and `.env`).

use clap::Parser;
use mhsbot_cli::{run, Cli, Plan};
use mhsbot_core::init_tracing;
use mhsbot_telegram::BaseConfig;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let base = BaseConfig::load();

    if let Err(e) = init_tracing(&base.log_file) {
        eprintln!("Failed to initialize logging: {:#}", e);
        std::process::exit(1);
    }

    let plan = match Plan::load(cli.command) {
        Ok(plan) => plan,
        Err(e) => {
            error!(error = %format!("{:#}", e), "Invalid configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(plan, &base).await {
        error!(error = %format!("{:#}", e), "mhsbot stopped with an error");
        std::process::exit(1);
    }
}
