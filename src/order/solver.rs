use std::collections::VecDeque;

use log::debug;

use crate::error::{OrderError, Result};
use crate::order::graph::PrecedenceGraph;

/// Computes one total ordering of the present symbols consistent with every
/// precedence edge, using Kahn's indegree-driven scheduling.
///
/// The ready-queue is seeded with all zero-indegree symbols in canonical
/// symbol order, which fixes *which* valid ordering this function produces.
/// After seeding the discipline is strict FIFO: symbols reaching indegree
/// zero are enqueued at the back, never re-sorted. Multiple symbols may be
/// eligible at any step, so other valid orderings usually exist; callers
/// comparing candidate orderings must check constraints, not equality with
/// this output.
///
/// The input graph is not mutated; indegrees are decremented on a local copy,
/// so the same graph can be solved repeatedly or from several threads.
///
/// # Arguments
/// * `graph` - Present symbols and deduplicated precedence edges
///
/// # Returns
/// * `Ok(order)` - A permutation of exactly the present symbols
/// * `Err(OrderError::CycleDetected)` - No total order satisfies the edges
///
/// # Examples
/// ```
/// use lexorder::{compute_order, PrecedenceGraph};
///
/// let mut graph = PrecedenceGraph::new();
/// graph.insert_edge('b', 'a');
/// graph.insert_edge('a', 'c');
/// assert_eq!(compute_order(&graph).unwrap(), vec!['b', 'a', 'c']);
/// ```
///
/// # Complexity
/// * Time: O(V + E) over present symbols and distinct edges
/// * Space: O(V)
pub fn compute_order<S: Copy + Ord>(graph: &PrecedenceGraph<S>) -> Result<Vec<S>> {
    let mut indegree = graph.indegrees();

    // Canonical order here only; FIFO thereafter.
    let mut ready: VecDeque<S> = indegree
        .iter()
        .filter(|(_, &deg)| deg == 0)
        .map(|(&symbol, _)| symbol)
        .collect();

    let mut order = Vec::with_capacity(graph.symbol_count());
    while let Some(u) = ready.pop_front() {
        order.push(u);
        for v in graph.successors(u) {
            if let Some(deg) = indegree.get_mut(&v) {
                *deg -= 1;
                if *deg == 0 {
                    ready.push_back(v);
                }
            }
        }
    }

    if order.len() == graph.symbol_count() {
        Ok(order)
    } else {
        debug!(
            "{} of {} symbols never reached indegree zero",
            graph.symbol_count() - order.len(),
            graph.symbol_count()
        );
        Err(OrderError::CycleDetected)
    }
}
