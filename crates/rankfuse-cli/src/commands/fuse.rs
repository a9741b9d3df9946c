//! Handler for `rankfuse fuse`.

use std::path::Path;

use miette::Result;
use rankfuse_core::errors::RankfuseError;

use super::read_ranking;

pub fn exec(ranking_a: &Path, ranking_b: &Path, pretty: bool, out: Option<&Path>) -> Result<()> {
    let a = read_ranking(ranking_a)?;
    let b = read_ranking(ranking_b)?;

    let result = rankfuse_fusion::fusion::fuse(&a, &b);
    if !result.contradictions.is_empty() {
        tracing::debug!("{}", result.contradictions);
    }

    let encoded = if pretty {
        result.consensus.to_json_pretty()?
    } else {
        result.consensus.to_json()?
    };

    match out {
        Some(path) => {
            std::fs::write(path, encoded + "\n").map_err(RankfuseError::Io)?;
            println!("Wrote consensus ranking to {}", path.display());
        }
        None => println!("{encoded}"),
    }
    Ok(())
}
