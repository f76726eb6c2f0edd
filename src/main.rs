use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use docula::state::{OsFileSystem, StateManager};
use docula::{Context, Result};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docula")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Docula provides tooling for various documentation types.", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Start the .docula search from DIR instead of the working directory
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// ADR provides tooling for managing architecture decision records
    #[command(subcommand)]
    Adr(docula::cli::adr::AdrCommands),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    docula::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Adr(cmd) => {
            let manager = match cli.directory {
                Some(dir) => {
                    let dir = std::fs::canonicalize(&dir)
                        .with_context(|| format!("resolving directory '{}'", dir.display()))?;
                    StateManager::new(OsFileSystem, dir)
                }
                None => StateManager::from_current_dir().context("resolving working directory")?,
            };
            docula::cli::adr::run(cmd, &manager)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "docula", &mut io::stdout());
        }
    }

    Ok(())
}
