//! Command dispatch and handler modules.

mod fuse;
mod validate;

use std::path::Path;

use miette::Result;
use rankfuse_core::errors::RankfuseError;
use rankfuse_core::ranking::Ranking;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Fuse {
            ranking_a,
            ranking_b,
            pretty,
            out,
        } => fuse::exec(&ranking_a, &ranking_b, pretty, out.as_deref()),
        Command::Validate { ranking } => validate::exec(&ranking),
    }
}

/// Read and decode one encoded ranking file.
pub(crate) fn read_ranking(path: &Path) -> Result<Ranking> {
    if !path.is_file() {
        return Err(RankfuseError::InvalidRanking {
            message: format!("no such ranking file: {}", path.display()),
        }
        .into());
    }
    let text = std::fs::read_to_string(path).map_err(RankfuseError::Io)?;
    let ranking = Ranking::from_json(&text).map_err(|err| match err {
        RankfuseError::InvalidRanking { message } => RankfuseError::InvalidRanking {
            message: format!("{}: {message}", path.display()),
        },
        other => other,
    })?;
    Ok(ranking)
}
