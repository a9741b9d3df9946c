//! Contradiction detection between the two input rankings.

use std::fmt;

use rankfuse_core::object::ObjectId;
use rankfuse_core::ranking::Ranking;
use rankfuse_core::universe::Universe;

use crate::relation::Relation;

/// All tier-adjacent strict reversals found between the two rankings.
///
/// A contradiction is a pair of objects occupying directly adjacent tiers
/// in one ranking for which the two rankings assert opposite strict
/// order. Contradicted pairs are forced into the same consensus cluster
/// downstream.
#[derive(Debug)]
pub struct ContradictionReport {
    /// The symmetric contradiction relation K over canonical indices.
    pub relation: Relation,
    /// The contradicted pairs as objects, smaller member first.
    pub pairs: Vec<(ObjectId, ObjectId)>,
}

impl ContradictionReport {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl fmt::Display for ContradictionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return write!(f, "No contradictions.");
        }
        writeln!(f, "Contradictions ({}):", self.pairs.len())?;
        for (a, b) in &self.pairs {
            writeln!(f, "  {a} <-> {b}")?;
        }
        Ok(())
    }
}

/// Detect tier-adjacent strict reversals between the two rankings.
///
/// The scan runs once rooted at each ranking's tier structure, so a
/// reversal is caught whichever ranking's adjacency makes it visible.
/// Only pairs exactly one tier apart are examined; non-adjacent
/// disagreements and strict-versus-tie disagreements never count.
pub fn detect(
    ranking_a: &Ranking,
    ranking_b: &Ranking,
    strict_a: &Relation,
    strict_b: &Relation,
    universe: &Universe,
) -> ContradictionReport {
    let mut relation = Relation::new(universe.len());
    let mut pairs = Vec::new();
    scan_adjacent(ranking_a, strict_a, strict_b, universe, &mut relation, &mut pairs);
    scan_adjacent(ranking_b, strict_b, strict_a, universe, &mut relation, &mut pairs);
    ContradictionReport { relation, pairs }
}

/// Walk one ranking's consecutive tier pairs, flagging pairs where the
/// rooted ranking's strict relation and the other ranking's strict
/// relation point in opposite directions.
fn scan_adjacent(
    ranking: &Ranking,
    strict_here: &Relation,
    strict_there: &Relation,
    universe: &Universe,
    relation: &mut Relation,
    pairs: &mut Vec<(ObjectId, ObjectId)>,
) {
    for window in ranking.tiers.windows(2) {
        for a in window[0].members() {
            let Some(ia) = universe.index_of(a) else {
                continue;
            };
            for b in window[1].members() {
                let Some(ib) = universe.index_of(b) else {
                    continue;
                };
                if strict_here.get(ia, ib) && strict_there.get(ib, ia) && !relation.get(ia, ib) {
                    relation.set(ia, ib);
                    relation.set(ib, ia);
                    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                    pairs.push((lo.clone(), hi.clone()));
                }
            }
        }
    }
}
