//! Handler for `rankfuse validate`.

use std::path::Path;

use miette::Result;

use super::read_ranking;

pub fn exec(path: &Path) -> Result<()> {
    let ranking = read_ranking(path)?;
    let objects = ranking.objects().count();
    println!(
        "{}: {} tiers, {} objects",
        path.display(),
        ranking.len(),
        objects
    );
    Ok(())
}
