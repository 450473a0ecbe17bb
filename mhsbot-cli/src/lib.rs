//! # mhsbot-cli
//!
//! Argument parsing, config loading, store wiring and signal handling for the `mhsbot` binary.

pub mod cli;

pub use cli::{Cli, Commands};

use std::future::Future;
use std::sync::Arc;

use admin_bot::AdminConfig;
use anyhow::Result;
use mhsbot_telegram::{shutdown_channel, BaseConfig, ShutdownSender};
use storage::{ActivityLogStore, AllowListStore, JsonActivityLog, JsonAllowListStore};
use student_bot::{MaintenanceDirectory, StudentConfig, StudentDirectory};
use tracing::{error, info, instrument};

/// Bot configs resolved from the subcommand. Loading happens before any bot starts, so a missing
/// variable aborts the whole process.
#[derive(Debug)]
pub enum Plan {
    Admin(AdminConfig),
    Student(StudentConfig),
    All(AdminConfig, StudentConfig),
}

impl Plan {
    pub fn load(command: Commands) -> Result<Self> {
        let plan = match command {
            Commands::Admin { token } => Plan::Admin(AdminConfig::load(token)?),
            Commands::Student { token } => Plan::Student(StudentConfig::load(token)?),
            Commands::All => Plan::All(AdminConfig::load(None)?, StudentConfig::load(None)?),
        };
        match &plan {
            Plan::Admin(admin) => admin.validate()?,
            Plan::Student(student) => student.validate()?,
            Plan::All(admin, student) => {
                admin.validate()?;
                student.validate()?;
            }
        }
        Ok(plan)
    }
}

/// Runs the planned bots until SIGINT/SIGTERM.
#[instrument(skip_all)]
pub async fn run(plan: Plan, base: &BaseConfig) -> Result<()> {
    info!(
        allowed_users_file = %base.allowed_users_file,
        user_logs_file = %base.user_logs_file,
        "Opening JSON stores"
    );
    let allow_list: Arc<dyn AllowListStore> =
        Arc::new(JsonAllowListStore::new(&base.allowed_users_file));
    let activity: Arc<dyn ActivityLogStore> = Arc::new(JsonActivityLog::new(&base.user_logs_file));
    let directory: Arc<dyn StudentDirectory> = Arc::new(MaintenanceDirectory);

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let shutdown_tx = Arc::new(shutdown_tx);
    tokio::spawn(forward_signals(shutdown_tx.clone()));

    match plan {
        Plan::Admin(config) => admin_bot::run(config, allow_list, activity, shutdown_rx).await,
        Plan::Student(config) => {
            student_bot::run(config, allow_list, directory, shutdown_rx).await
        }
        Plan::All(admin, student) => {
            run_both(
                admin_bot::run(admin, allow_list.clone(), activity, shutdown_rx.clone()),
                student_bot::run(student, allow_list, directory, shutdown_rx),
                &shutdown_tx,
            )
            .await
        }
    }
}

/// Drives both bots to completion. The first one to fail signals `shutdown` so the other stops too;
/// its error is returned.
async fn run_both<A, B>(first: A, second: B, shutdown: &ShutdownSender) -> Result<()>
where
    A: Future<Output = Result<()>>,
    B: Future<Output = Result<()>>,
{
    tokio::pin!(first, second);
    let stop_on_error = |result: Result<()>| {
        if let Err(e) = &result {
            error!(error = %e, "Bot stopped with an error, shutting down the other bot");
            let _ = shutdown.send(true);
        }
        result
    };
    tokio::select! {
        result = &mut first => {
            let result = stop_on_error(result);
            let other = second.await;
            result.and(other)
        }
        result = &mut second => {
            let result = stop_on_error(result);
            let other = first.await;
            result.and(other)
        }
    }
}

async fn forward_signals(shutdown: Arc<ShutdownSender>) {
    wait_for_signal().await;
    info!("Shutdown signal received");
    let _ = shutdown.send(true);
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut term) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = term.recv() => {}
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "SIGTERM handler unavailable, listening for Ctrl-C only");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for key in [
            "TELEGRAM_BOT_TOKEN",
            "ADMIN_BOT_TOKEN",
            "ADMIN_CHAT_ID",
            "ADMIN_ID",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_plan_all_needs_both_bots() {
        clear_env();
        env::set_var("ADMIN_BOT_TOKEN", "111:admin");
        env::set_var("ADMIN_CHAT_ID", "42");
        assert!(Plan::load(Commands::Admin { token: None }).is_ok());

        let err = Plan::load(Commands::All).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));

        env::set_var("TELEGRAM_BOT_TOKEN", "222:student");
        assert!(matches!(Plan::load(Commands::All).unwrap(), Plan::All(..)));
        clear_env();
    }

    /// **Test: When one bot fails, the other is told to shut down and the error is returned.**
    #[tokio::test]
    async fn test_run_both_stops_other_bot_on_error() {
        let (tx, mut rx) = shutdown_channel();
        let failing = async { Err(anyhow::anyhow!("notifier setup failed")) };
        let waiting = async move {
            while !*rx.borrow() {
                if rx.changed().await.is_err() {
                    break;
                }
            }
            Ok(())
        };

        let result = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            run_both(waiting, failing, &tx),
        )
        .await
        .expect("other bot was not shut down");

        assert_eq!(result.unwrap_err().to_string(), "notifier setup failed");
        assert!(*tx.borrow());
    }

    #[test]
    #[serial]
    fn test_plan_rejects_invalid_api_url() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "222:student");
        env::set_var("ADMIN_BOT_TOKEN", "111:admin");
        env::set_var("ADMIN_CHAT_ID", "42");
        env::set_var("TELEGRAM_API_URL", "::not a url::");
        assert!(Plan::load(Commands::Student { token: None }).is_err());
        clear_env();
    }
}
