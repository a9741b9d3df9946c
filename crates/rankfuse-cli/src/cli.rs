//! CLI argument definitions for rankfuse.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "rankfuse",
    version,
    about = "Fuse two rankings-with-ties into one consensus ranking",
    long_about = "Rankfuse aggregates two independently produced rankings-with-ties over a \
                  shared universe of objects into a single consensus ranking, merging tied \
                  and contradicted objects into consensus clusters."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fuse two encoded rankings into a consensus ranking
    Fuse {
        /// Path to the first encoded ranking
        ranking_a: PathBuf,
        /// Path to the second encoded ranking
        ranking_b: PathBuf,
        /// Pretty-print the consensus JSON
        #[arg(long)]
        pretty: bool,
        /// Write the consensus to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Check that an encoded ranking file is well-formed
    Validate {
        /// Path to the encoded ranking
        ranking: PathBuf,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
