mod clerk_error;
mod cli;
mod config;
mod constant;
mod default_config;
mod host;
mod jenkins;
mod model;
mod notify;
mod pretty_log;
mod report;

use crate::clerk_error::ClerkError;
use crate::notify::notify_params::NotifyParams;
use crate::pretty_log::{colored_println, ThemeColor};
use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::io::stdout;
use std::path::PathBuf;
use strum_macros::Display;

#[derive(Parser)]
#[command(name="Build Clerk Notifier",
  author,
  version,
  about(env!("CARGO_PKG_DESCRIPTION")),
  long_about=None,
  arg_required_else_help=true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Display)]
enum Commands {
    /// Send the report of the current build to the backend.
    /// Run it as the last step of a Jenkins build.
    Notify {
        #[command(flatten)]
        params: NotifyParams,
    },
    /// Show the settings read from the config file.
    Debug {
        /// config file or the directory holding it.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoginMethod {
    Pwd,
    ApiToken,
}

impl Display for LoginMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginMethod::Pwd => write!(f, "Password"),
            LoginMethod::ApiToken => write!(f, "API Token"),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Some(command) = cli.command {
        let command_name = command.to_string();
        show_title(command_name.as_str());

        if let Err(err) = main_cli(command).await {
            err.colored_println(&mut stdout());
            std::process::exit(1);
        }
    }
}

async fn main_cli(command: Commands) -> Result<(), ClerkError> {
    let mut stdout = stdout();
    match command {
        Commands::Notify { params } => {
            // bcn notify
            cli::cli_do_notify(&mut stdout, params).await?;
        }
        Commands::Debug { config } => {
            // bcn debug
            cli::cli_do_debug(&mut stdout, config.as_deref());
        }
    }

    Ok(())
}

fn show_title(title: &str) {
    colored_println(
        &mut stdout(),
        ThemeColor::Second,
        format!("[Build Clerk | {}]", title.to_uppercase()).as_str(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_notify() {
        let cli = Cli::try_parse_from([
            "bcn",
            "notify",
            "--server",
            "http://clerk:9090",
            "--result",
            "FAILURE",
            "--building",
            "false",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Notify { params }) => {
                assert_eq!(params.server.as_deref(), Some("http://clerk:9090"));
                assert_eq!(params.result.as_deref(), Some("FAILURE"));
                assert!(!params.building);
                assert!(!params.dry_run);
            }
            _ => panic!("expected notify"),
        }
    }

    #[test]
    fn test_building_defaults_to_true() {
        let cli = Cli::try_parse_from(["bcn", "notify"]).unwrap();
        match cli.command {
            Some(Commands::Notify { params }) => assert!(params.building),
            _ => panic!("expected notify"),
        }
    }

    #[test]
    fn test_login_method_display() {
        assert_eq!(LoginMethod::Pwd.to_string(), "Password");
        assert_eq!(LoginMethod::ApiToken.to_string(), "API Token");
    }
}
