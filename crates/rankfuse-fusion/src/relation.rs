//! Square boolean relations over canonical object indices.

/// An n×n boolean relation stored as a row-major flat arena.
///
/// Every pipeline stage allocates its own `Relation` and never aliases
/// another stage's; cells are addressed by canonical universe index only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    n: usize,
    cells: Vec<bool>,
}

impl Relation {
    /// An empty (all-false) relation over `n` indices.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
        }
    }

    /// Number of indices the relation ranges over.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize) {
        self.cells[i * self.n + j] = true;
    }

    /// Elementwise disjunction.
    pub fn union(&self, other: &Relation) -> Relation {
        debug_assert_eq!(self.n, other.n);
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(&a, &b)| a || b)
            .collect();
        Relation { n: self.n, cells }
    }

    /// Elementwise conjunction.
    pub fn intersection(&self, other: &Relation) -> Relation {
        debug_assert_eq!(self.n, other.n);
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(&a, &b)| a && b)
            .collect();
        Relation { n: self.n, cells }
    }

    /// Number of true cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_false() {
        let r = Relation::new(3);
        assert_eq!(r.len(), 3);
        assert_eq!(r.count(), 0);
        assert!(!r.get(0, 2));
    }

    #[test]
    fn set_and_get() {
        let mut r = Relation::new(3);
        r.set(1, 2);
        assert!(r.get(1, 2));
        assert!(!r.get(2, 1));
        assert_eq!(r.count(), 1);
    }

    #[test]
    fn union_and_intersection() {
        let mut a = Relation::new(2);
        a.set(0, 1);
        let mut b = Relation::new(2);
        b.set(0, 1);
        b.set(1, 0);

        let u = a.union(&b);
        assert!(u.get(0, 1));
        assert!(u.get(1, 0));

        let i = a.intersection(&b);
        assert!(i.get(0, 1));
        assert!(!i.get(1, 0));
    }

    #[test]
    fn zero_sized_relation() {
        let r = Relation::new(0);
        assert!(r.is_empty());
        assert_eq!(r.union(&Relation::new(0)).count(), 0);
    }
}
