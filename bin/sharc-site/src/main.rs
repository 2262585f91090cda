//! SHARC site CLI
//!
//! Resolves the documentation site configuration and checks its links.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the SHARC site configuration.
#[derive(Parser)]
#[command(
    name = "sharc-site",
    version,
    about = "Resolve and check the SHARC documentation site configuration"
)]
struct Cli {
    /// Path to a configuration file (defaults to the built-in SHARC site)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Print the resolved configuration as JSON
    Show {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Validate configuration and links
    Check {
        /// Site directory holding docs/, blog/ and src/pages/
        #[arg(short, long, default_value = ".")]
        site_dir: PathBuf,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    sharc_site::init_tracing(cli.verbose);

    match cli.command {
        Commands::Show { pretty } => {
            sharc_site::cmd::show::run(cli.config.as_deref(), pretty)?;
        }
        Commands::Check { site_dir, strict } => {
            sharc_site::cmd::check::run(cli.config.as_deref(), &site_dir, strict)?;
        }
    }

    Ok(())
}
