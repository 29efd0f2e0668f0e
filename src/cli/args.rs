use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(
    version,
    about = "Personal portfolio with an admin dashboard and project idea board"
)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// Directory used for the session record and theme preference
    #[clap(long, value_parser)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the folio application
    #[clap(subcommand)]
    pub command: Commands,
}

/// One line typed into the interactive shell
#[derive(Parser, Debug)]
#[clap(no_binary_name = true, name = "folio>")]
pub struct ShellLine {
    #[clap(subcommand)]
    pub command: Commands,
}
