//! Transitive closure of the augmented tie relation.

use crate::relation::Relation;

/// Union both tie relations with the contradiction relation and force
/// reflexivity. This is the seed E0 the closure runs on; reflexivity is
/// forced unconditionally so objects appearing in neither tie relation
/// still form their own class.
pub fn closure_seed(tie_a: &Relation, tie_b: &Relation, contradictions: &Relation) -> Relation {
    let mut seed = tie_a.union(tie_b).union(contradictions);
    for i in 0..seed.len() {
        seed.set(i, i);
    }
    seed
}

/// Close a relation under transitivity.
///
/// Standard pivot propagation: for each pivot k, every i reaching k is
/// connected to every j reachable from k. Operates on an owned copy;
/// the seed is never mutated.
pub fn transitive_closure(seed: &Relation) -> Relation {
    let mut closed = seed.clone();
    let n = closed.len();
    for k in 0..n {
        for i in 0..n {
            if closed.get(i, k) {
                for j in 0..n {
                    if closed.get(k, j) {
                        closed.set(i, j);
                    }
                }
            }
        }
    }
    closed
}
