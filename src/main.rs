use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxc::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxc::AppCommand {
    fn from(cmd: Commands) -> fxc::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                swap,
            } => fxc::AppCommand::Convert {
                amount,
                from,
                to,
                swap,
            },
            Commands::Rates { bases } => fxc::AppCommand::Rates { bases },
            Commands::Currencies => fxc::AppCommand::Currencies,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount from one currency to another
    Convert {
        /// Amount to convert, must be greater than zero
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Currency to convert from (defaults to the configured pair)
        from: Option<String>,
        /// Currency to convert to (defaults to the configured pair)
        to: Option<String>,
        /// Also show the conversion with the currencies swapped
        #[arg(short, long)]
        swap: bool,
    },
    /// Display the latest rate tables for one or more base currencies
    Rates {
        /// Base currencies (defaults to the configured source currency)
        bases: Vec<String>,
    },
    /// List supported currencies
    Currencies,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxc::cli::setup::setup(),
        Some(cmd) => fxc::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
