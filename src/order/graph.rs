use std::collections::{BTreeMap, BTreeSet};

/// A directed precedence graph over a small set of symbols.
///
/// Tracks which symbols are present, deduplicated directed edges
/// (`u` must come before `v`), and the indegree of every present symbol.
/// Instances are built fresh for each inference call and never shared,
/// so concurrent callers each work on independent counters.
///
/// Ordered containers are used throughout so iteration follows canonical
/// symbol order, which keeps derivation idempotent and lets the solver
/// seed its queue deterministically without an extra sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrecedenceGraph<S> {
    present: BTreeSet<S>,
    successors: BTreeMap<S, BTreeSet<S>>,
    indegree: BTreeMap<S, usize>,
    edge_count: usize,
}

impl<S: Copy + Ord> PrecedenceGraph<S> {
    /// Creates an empty graph with no symbols or edges.
    pub fn new() -> Self {
        Self {
            present: BTreeSet::new(),
            successors: BTreeMap::new(),
            indegree: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Marks `symbol` as present with indegree zero if it was not seen before.
    pub fn insert_symbol(&mut self, symbol: S) {
        if self.present.insert(symbol) {
            self.indegree.insert(symbol, 0);
        }
    }

    /// Records the constraint "`u` must come before `v`".
    ///
    /// Both endpoints are registered as present. Duplicate edges are ignored:
    /// `v`'s indegree is incremented only the first time this exact edge is
    /// inserted, so repeating a constraint cannot inflate the count and
    /// corrupt the scheduler. Returns `true` if the edge was new.
    pub fn insert_edge(&mut self, u: S, v: S) -> bool {
        self.insert_symbol(u);
        self.insert_symbol(v);
        let added = self.successors.entry(u).or_default().insert(v);
        if added {
            self.edge_count += 1;
            if let Some(deg) = self.indegree.get_mut(&v) {
                *deg += 1;
            }
        }
        added
    }

    /// Returns `true` if `symbol` occurs anywhere in the input batch.
    pub fn contains(&self, symbol: S) -> bool {
        self.present.contains(&symbol)
    }

    /// Number of present symbols.
    pub fn symbol_count(&self) -> usize {
        self.present.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Present symbols in canonical order.
    pub fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        self.present.iter().copied()
    }

    /// Successors of `u` in canonical order (empty if `u` has none).
    pub fn successors(&self, u: S) -> impl Iterator<Item = S> + '_ {
        self.successors
            .get(&u)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Count of distinct edges terminating at `symbol` (zero if absent).
    pub fn indegree(&self, symbol: S) -> usize {
        self.indegree.get(&symbol).copied().unwrap_or(0)
    }

    /// Snapshot of every symbol's indegree, keyed in canonical order.
    pub fn indegrees(&self) -> BTreeMap<S, usize> {
        self.indegree.clone()
    }

    /// All distinct edges `(u, v)` in canonical order.
    pub fn edges(&self) -> impl Iterator<Item = (S, S)> + '_ {
        self.successors
            .iter()
            .flat_map(|(&u, vs)| vs.iter().map(move |&v| (u, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_symbol_is_idempotent() {
        let mut g = PrecedenceGraph::new();
        g.insert_symbol('a');
        g.insert_symbol('a');
        assert_eq!(g.symbol_count(), 1);
        assert_eq!(g.indegree('a'), 0);
    }

    #[test]
    fn test_duplicate_edge_does_not_inflate_indegree() {
        let mut g = PrecedenceGraph::new();
        assert!(g.insert_edge('a', 'b'));
        assert!(!g.insert_edge('a', 'b'));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.indegree('b'), 1);
    }

    #[test]
    fn test_edge_registers_endpoints() {
        let mut g = PrecedenceGraph::new();
        g.insert_edge('x', 'y');
        assert!(g.contains('x'));
        assert!(g.contains('y'));
        assert_eq!(g.indegree('x'), 0);
    }

    #[test]
    fn test_edges_iterate_in_canonical_order() {
        let mut g = PrecedenceGraph::new();
        g.insert_edge('c', 'a');
        g.insert_edge('a', 'b');
        g.insert_edge('a', 'c');
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![('a', 'b'), ('a', 'c'), ('c', 'a')]);
    }

    #[test]
    fn test_successors_of_absent_symbol_is_empty() {
        let g: PrecedenceGraph<char> = PrecedenceGraph::new();
        assert_eq!(g.successors('z').count(), 0);
        assert_eq!(g.indegree('z'), 0);
    }
}
