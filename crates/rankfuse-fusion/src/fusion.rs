//! The rank-fusion pipeline: two rankings in, one consensus ranking out.

use rankfuse_core::object::ObjectId;
use rankfuse_core::ranking::{Ranking, Tier};
use rankfuse_core::universe::Universe;

use crate::closure::{closure_seed, transitive_closure};
use crate::cluster::{extract_clusters, Cluster};
use crate::conflict::{self, ContradictionReport};
use crate::order::order_clusters;
use crate::preference::{preference_relation, strict_part, tie_part};

/// The output of fusing two rankings.
pub struct FusionResult {
    /// The consensus ranking: singleton clusters as bare tiers,
    /// multi-member clusters as groups sorted by the canonical order.
    pub consensus: Ranking,
    /// The tier-adjacent strict reversals found between the inputs.
    pub contradictions: ContradictionReport,
    /// Number of consensus clusters.
    pub cluster_count: usize,
    /// Clusters a residual dominance cycle left unresolved (appended at
    /// the end of the consensus in index order).
    pub unresolved: usize,
}

/// Fuse two rankings-with-ties into a consensus ranking.
///
/// Total and deterministic: every stage allocates fresh matrices and the
/// whole computation is a pure function of the two inputs. An empty
/// universe degenerates to an empty consensus.
pub fn fuse(ranking_a: &Ranking, ranking_b: &Ranking) -> FusionResult {
    let universe = Universe::from_rankings(ranking_a, ranking_b);
    tracing::debug!(objects = universe.len(), "built universe");

    let pref_a = preference_relation(ranking_a, &universe);
    let pref_b = preference_relation(ranking_b, &universe);
    let strict_a = strict_part(&pref_a);
    let strict_b = strict_part(&pref_b);

    let contradictions = conflict::detect(ranking_a, ranking_b, &strict_a, &strict_b, &universe);
    tracing::debug!(pairs = contradictions.len(), "scanned contradictions");

    let seed = closure_seed(&tie_part(&pref_a), &tie_part(&pref_b), &contradictions.relation);
    let closed = transitive_closure(&seed);

    let clusters = extract_clusters(&closed);
    tracing::debug!(clusters = clusters.len(), "extracted consensus clusters");

    let consensus_strict = strict_a.intersection(&strict_b);
    let (ordered, unresolved) = order_clusters(&clusters, &consensus_strict);
    if unresolved > 0 {
        tracing::warn!(
            unresolved,
            "dominance cycle left clusters unordered; appending in index order"
        );
    }

    let tiers = ordered
        .iter()
        .map(|cluster| cluster_tier(cluster, &universe))
        .collect();

    FusionResult {
        consensus: Ranking::new(tiers),
        contradictions,
        cluster_count: ordered.len(),
        unresolved,
    }
}

/// Map a placed cluster to its output tier. Members are ascending
/// canonical indices into the sorted universe, so the objects come out
/// already ordered by the canonical comparator.
fn cluster_tier(cluster: &Cluster, universe: &Universe) -> Tier {
    let mut objects: Vec<ObjectId> = cluster
        .members
        .iter()
        .map(|&i| universe.object(i).clone())
        .collect();
    if objects.len() == 1 {
        Tier::Single(objects.remove(0))
    } else {
        Tier::Group(objects)
    }
}
