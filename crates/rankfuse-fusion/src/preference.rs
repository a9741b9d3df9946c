//! Preference relations derived from a single ranking.

use rankfuse_core::ranking::Ranking;
use rankfuse_core::universe::Universe;

use crate::relation::Relation;

/// Build the reflexive at-least-as-preferred relation Y for one ranking.
///
/// Objects sharing a tier are related both ways (including to
/// themselves); every member of an earlier tier is related to every
/// member of every later tier. Tier members absent from the universe are
/// ignored; the builder is total.
pub fn preference_relation(ranking: &Ranking, universe: &Universe) -> Relation {
    let mut y = Relation::new(universe.len());
    let tiers = &ranking.tiers;
    for (t, tier) in tiers.iter().enumerate() {
        for a in tier.members() {
            let Some(ia) = universe.index_of(a) else {
                continue;
            };
            for b in tier.members() {
                if let Some(ib) = universe.index_of(b) {
                    y.set(ia, ib);
                }
            }
            for later in &tiers[t + 1..] {
                for b in later.members() {
                    if let Some(ib) = universe.index_of(b) {
                        y.set(ia, ib);
                    }
                }
            }
        }
    }
    y
}

/// The asymmetric strict-dominance part of a preference relation:
/// `S[i][j] = Y[i][j] ∧ ¬Y[j][i]`, false on the diagonal.
pub fn strict_part(y: &Relation) -> Relation {
    let n = y.len();
    let mut s = Relation::new(n);
    for i in 0..n {
        for j in 0..n {
            if i != j && y.get(i, j) && !y.get(j, i) {
                s.set(i, j);
            }
        }
    }
    s
}

/// The symmetric tie part of a preference relation:
/// `E[i][j] = Y[i][j] ∧ Y[j][i]`.
pub fn tie_part(y: &Relation) -> Relation {
    let n = y.len();
    let mut e = Relation::new(n);
    for i in 0..n {
        for j in 0..n {
            if y.get(i, j) && y.get(j, i) {
                e.set(i, j);
            }
        }
    }
    e
}
