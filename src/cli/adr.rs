//! ADR CLI commands

use crate::models::IndexType;
use crate::state::{FileSystem, StateManager};
use crate::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum AdrCommands {
    /// Sets up a directory as an ADR directory, creating it if needed
    Init {
        /// Directory to register, relative to the .docula file
        path: String,

        /// Name for the directory (skips the interactive prompt)
        #[arg(short, long)]
        name: Option<String>,

        /// Index type used when --name is given
        #[arg(short, long, value_enum, requires = "name")]
        index: Option<IndexType>,
    },

    /// List registered ADR directories
    List {
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },
}

pub fn run<F: FileSystem>(cmd: AdrCommands, manager: &StateManager<F>) -> Result<()> {
    match cmd {
        AdrCommands::Init { path, name, index } => {
            super::init::run(manager, &path, name.as_deref(), index)?;
        }
        AdrCommands::List { json } => {
            super::list::run(manager, json)?;
        }
    }
    Ok(())
}
