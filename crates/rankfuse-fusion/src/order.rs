//! Cluster dominance and deterministic linearization.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::cluster::Cluster;
use crate::relation::Relation;

/// Partial order between consensus clusters, derived from the consensus
/// strict relation `P = SA ∧ SB`.
///
/// One node per cluster, added in cluster order so node indices coincide
/// with cluster indices. An edge i→j exists iff some member pair gives
/// forward evidence `P[a][b]` and no member pair gives backward evidence
/// `P[b][a]`; pairs with evidence both ways stay mutually unordered.
pub struct DominanceGraph {
    graph: DiGraph<usize, ()>,
}

impl DominanceGraph {
    /// Derive the dominance graph over `clusters` from the consensus
    /// strict relation.
    pub fn build(clusters: &[Cluster], consensus: &Relation) -> Self {
        let mut graph = DiGraph::new();
        for idx in 0..clusters.len() {
            graph.add_node(idx);
        }
        for (i, from) in clusters.iter().enumerate() {
            for (j, to) in clusters.iter().enumerate() {
                if i == j {
                    continue;
                }
                let mut forward = false;
                let mut backward = false;
                for &a in &from.members {
                    for &b in &to.members {
                        forward |= consensus.get(a, b);
                        backward |= consensus.get(b, a);
                    }
                }
                if forward && !backward {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                }
            }
        }
        Self { graph }
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.graph
            .find_edge(NodeIndex::new(from), NodeIndex::new(to))
            .is_some()
    }

    /// Linearize the clusters: a Kahn topological sort that always places
    /// the smallest ready cluster index next.
    ///
    /// If a residual dominance cycle leaves clusters that never become
    /// ready, they are appended in ascending cluster index order as a
    /// trailing unresolved run; the sort never stalls. Returns cluster
    /// indices in placement order and the count of unresolved clusters.
    pub fn topo_order(&self) -> (Vec<usize>, usize) {
        let n = self.graph.node_count();
        let mut in_degree: Vec<usize> = (0..n)
            .map(|i| {
                self.graph
                    .neighbors_directed(NodeIndex::new(i), Direction::Incoming)
                    .count()
            })
            .collect();

        let mut ready: BinaryHeap<Reverse<usize>> = (0..n)
            .filter(|&i| in_degree[i] == 0)
            .map(Reverse)
            .collect();
        let mut placed = Vec::with_capacity(n);
        let mut done = vec![false; n];

        while let Some(Reverse(i)) = ready.pop() {
            placed.push(i);
            done[i] = true;
            for succ in self
                .graph
                .neighbors_directed(NodeIndex::new(i), Direction::Outgoing)
            {
                let j = succ.index();
                in_degree[j] -= 1;
                if in_degree[j] == 0 {
                    ready.push(Reverse(j));
                }
            }
        }

        let unresolved = n - placed.len();
        if unresolved > 0 {
            placed.extend((0..n).filter(|&i| !done[i]));
        }
        (placed, unresolved)
    }
}

/// Order clusters by consensus dominance, smallest cluster index first
/// among ties.
pub fn order_clusters(clusters: &[Cluster], consensus: &Relation) -> (Vec<Cluster>, usize) {
    let dominance = DominanceGraph::build(clusters, consensus);
    let (placement, unresolved) = dominance.topo_order();
    let ordered = placement.into_iter().map(|i| clusters[i].clone()).collect();
    (ordered, unresolved)
}
