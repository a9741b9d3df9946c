//! Consensus cluster extraction from the closed relation.

use crate::relation::Relation;

/// A consensus tie-cluster: one equivalence class of the closed relation,
/// held as ascending canonical indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub members: Vec<usize>,
}

impl Cluster {
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }
}

/// Read the equivalence classes off a closed relation.
///
/// Forward pass: the smallest unvisited index seeds a cluster holding
/// every index its row relates to. Clusters come out ordered by their
/// smallest member, with members ascending; both fall out of the scan
/// order. Exactness of the partition relies on the input being an
/// equivalence relation.
pub fn extract_clusters(closure: &Relation) -> Vec<Cluster> {
    let n = closure.len();
    let mut visited = vec![false; n];
    let mut clusters = Vec::new();
    for i in 0..n {
        if visited[i] {
            continue;
        }
        let mut members = Vec::new();
        for j in 0..n {
            if closure.get(i, j) {
                members.push(j);
                visited[j] = true;
            }
        }
        clusters.push(Cluster { members });
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(n: usize) -> Relation {
        let mut r = Relation::new(n);
        for i in 0..n {
            r.set(i, i);
        }
        r
    }

    #[test]
    fn identity_relation_gives_singletons() {
        let clusters = extract_clusters(&identity(3));
        assert_eq!(clusters.len(), 3);
        for (i, cluster) in clusters.iter().enumerate() {
            assert!(cluster.is_singleton());
            assert_eq!(cluster.members, [i]);
        }
    }

    #[test]
    fn merged_pair_shares_a_cluster() {
        let mut r = identity(4);
        r.set(1, 3);
        r.set(3, 1);
        let clusters = extract_clusters(&r);
        assert_eq!(clusters.len(), 3);
        assert_eq!(clusters[0].members, [0]);
        assert_eq!(clusters[1].members, [1, 3]);
        assert_eq!(clusters[2].members, [2]);
    }

    #[test]
    fn clusters_partition_the_universe() {
        let mut r = identity(6);
        for &(i, j) in &[(0, 2), (2, 4), (1, 5)] {
            r.set(i, j);
            r.set(j, i);
        }
        let closed = crate::closure::transitive_closure(&r);
        let clusters = extract_clusters(&closed);
        let mut seen = vec![0usize; 6];
        for cluster in &clusters {
            for &m in &cluster.members {
                seen[m] += 1;
            }
        }
        assert!(seen.iter().all(|&c| c == 1));
    }

    #[test]
    fn empty_relation_gives_no_clusters() {
        assert!(extract_clusters(&Relation::new(0)).is_empty());
    }
}
