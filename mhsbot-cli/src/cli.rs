//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mhsbot")]
#[command(about = "Student search bot and its admin bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the admin bot (config from env; token can override ADMIN_BOT_TOKEN).
    Admin {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Run the student search bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Student {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Run both bots in one process, sharing the JSON stores.
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["mhsbot", "admin", "--token", "111:abc"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Admin {
                token: Some("111:abc".to_string())
            }
        );

        let cli = Cli::try_parse_from(["mhsbot", "student"]).unwrap();
        assert_eq!(cli.command, Commands::Student { token: None });

        let cli = Cli::try_parse_from(["mhsbot", "all"]).unwrap();
        assert_eq!(cli.command, Commands::All);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["mhsbot"]).is_err());
        assert!(Cli::try_parse_from(["mhsbot", "all", "--token", "x"]).is_err());
    }
}
