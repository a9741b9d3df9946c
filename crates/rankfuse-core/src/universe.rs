use std::collections::HashMap;

use crate::object::ObjectId;
use crate::ranking::Ranking;

/// The shared universe of both input rankings.
///
/// Holds the sorted, deduplicated union of the rankings' members and the
/// object→index map. The sort happens exactly once, here; every matrix,
/// cluster, and ordering downstream is indexed by these canonical
/// integers and never by raw identity.
#[derive(Debug, Clone, Default)]
pub struct Universe {
    objects: Vec<ObjectId>,
    index: HashMap<ObjectId, usize>,
}

impl Universe {
    /// Build the canonical index from two rankings.
    pub fn from_rankings(a: &Ranking, b: &Ranking) -> Self {
        let mut objects: Vec<ObjectId> = a.objects().chain(b.objects()).cloned().collect();
        objects.sort();
        objects.dedup();
        let index = objects
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        Self { objects, index }
    }

    /// Canonical index of an object, if it belongs to the universe.
    pub fn index_of(&self, id: &ObjectId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The object at a canonical index.
    pub fn object(&self, idx: usize) -> &ObjectId {
        &self.objects[idx]
    }

    /// All objects in canonical order.
    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }

    /// Universe size.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
