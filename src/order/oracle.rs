use std::collections::BTreeMap;

use log::debug;
use rayon::prelude::*;

use crate::order::constraints::derive_constraints;
use crate::order::solver::compute_order;

/// Infers one symbol ordering consistent with the given sorted keys.
///
/// This is the solving front-end: constraints are derived and solved, and
/// both failure causes — a prefix contradiction in the input and a cycle in
/// the derived constraints — collapse into the single empty-string failure
/// marker. Callers that need to distinguish the causes can call
/// [`derive_constraints`] and [`compute_order`] directly.
///
/// # Examples
/// ```
/// use lexorder::{infer_order, is_valid_order};
///
/// let keys = ["wrt", "wrf", "er", "ett", "rftt"];
/// let order = infer_order(&keys);
/// assert!(is_valid_order(&keys, &order));
///
/// assert_eq!(infer_order(&["abc", "ab"]), "");
/// ```
pub fn infer_order(keys: &[&str]) -> String {
    match derive_constraints(keys).and_then(|graph| compute_order(&graph)) {
        Ok(order) => order.into_iter().collect(),
        Err(err) => {
            debug!("no ordering exists for this key batch: {err}");
            String::new()
        }
    }
}

/// Checks whether `candidate` is an acceptable ordering for the given keys.
///
/// The check re-derives constraints from `keys` and validates `candidate`
/// against them directly, so *any* constraint-respecting total order is
/// accepted — not just the one [`infer_order`] happens to produce. When the
/// keys admit no ordering at all (prefix contradiction or cyclic
/// constraints), the only acceptable candidate is the empty failure marker.
///
/// A structurally malformed candidate (wrong length, duplicated symbols,
/// symbols that occur in no key) is reported as `false`, never as an error.
///
/// # Examples
/// ```
/// use lexorder::is_valid_order;
///
/// let keys = ["wrt", "wrf", "er", "ett", "rftt"];
/// assert!(is_valid_order(&keys, "wertf"));
/// assert!(!is_valid_order(&keys, "ewrtf")); // violates w < e
/// ```
pub fn is_valid_order(keys: &[&str], candidate: &str) -> bool {
    let graph = match derive_constraints(keys) {
        Ok(graph) => graph,
        Err(_) => return candidate.is_empty(),
    };
    if compute_order(&graph).is_err() {
        return candidate.is_empty();
    }

    // Coverage: every present symbol exactly once, nothing foreign.
    let mut position = BTreeMap::new();
    for (i, symbol) in candidate.chars().enumerate() {
        if !graph.contains(symbol) || position.insert(symbol, i).is_some() {
            return false;
        }
    }
    if position.len() != graph.symbol_count() {
        return false;
    }

    let respects_edges = graph
        .edges()
        .all(|(u, v)| match (position.get(&u), position.get(&v)) {
            (Some(pu), Some(pv)) => pu < pv,
            _ => false,
        });
    respects_edges
}

/// Judges a batch of independently produced candidates against one key batch.
///
/// Each candidate is validated on its own fresh constraint graph, so the
/// validations share no mutable state and parallelize safely. Verdicts are
/// returned in candidate order.
pub fn validate_batch(keys: &[&str], candidates: &[&str]) -> Vec<bool> {
    candidates
        .par_iter()
        .map(|candidate| is_valid_order(keys, candidate))
        .collect()
}
