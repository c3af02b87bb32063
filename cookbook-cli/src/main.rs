//! Cookbook - recipe manifest generator and catalog inspector

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use cookbook_core::recipe::{label_for_path, title_for_path};

mod catalog_cli;
mod generate_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "cookbook",
    about = "Recipe manifest generator and catalog inspector for the Blazor Cookbook",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level (RUST_LOG takes precedence when set)
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan the solution for recipe pages and write recipe-manifest.json
    Generate(generate_cli::GenerateArgs),

    /// List recipes the way the running application would serve them
    List(catalog_cli::ListArgs),

    /// Show the chapter/recipe label for a URL path
    Route {
        /// URL path, e.g. /ch01r04
        route: String,

        /// Page title to combine with the label
        #[clap(long)]
        title: Option<String>,
    },
}

fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries command output only
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    match cli.command {
        Command::Generate(args) => generate_cli::execute(args).await,
        Command::List(args) => catalog_cli::execute(args).await,
        Command::Route { route, title } => {
            match title {
                Some(title) => println!("{}", title_for_path(&route, &title)),
                None => println!("{}", label_for_path(&route)),
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["cookbook", "generate"]).unwrap();
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.root, std::path::PathBuf::from("."));
                assert!(args.output.is_none());
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_cli_parses_global_log_level_after_subcommand() {
        let cli =
            Cli::try_parse_from(["cookbook", "list", "--all", "--log-level", "debug"]).unwrap();
        assert!(matches!(cli.log_level, LogLevel::Debug));
        match cli.command {
            Command::List(args) => assert!(args.all),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["cookbook", "route", "/ch01r01", "--log-level", "loud"]).is_err());
    }
}
