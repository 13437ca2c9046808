use log::{debug, trace};

use crate::error::{OrderError, Result};
use crate::order::graph::PrecedenceGraph;

/// Derives the pairwise precedence constraints implied by a sequence of keys
/// assumed to be sorted under an unknown total order of their symbols.
///
/// Every symbol occurring in any key is registered as present. For each
/// adjacent pair of keys, the first position where they differ yields one
/// directed constraint: the earlier key's symbol must come before the later
/// key's symbol. Adjacent keys that never differ carry no constraint, unless
/// the earlier key is *longer* — an extension sorted before its own prefix —
/// which no total order can satisfy.
///
/// Runs in time linear in the total symbol length of `keys`. The derived
/// present-set and edge-set depend only on the input, not on iteration
/// order, and repeated calls on identical input produce identical graphs.
///
/// # Arguments
/// * `keys` - Composite keys in their assumed sorted order
///
/// # Returns
/// * `Ok(graph)` - Present symbols plus deduplicated precedence edges
/// * `Err(OrderError::InvalidPrefix)` - A longer key precedes its own prefix
///
/// # Examples
/// ```
/// use lexorder::derive_constraints;
///
/// let graph = derive_constraints(&["wrt", "wrf", "er"]).unwrap();
/// // "wrt"/"wrf" force t before f; "wrf"/"er" force w before e.
/// assert!(graph.edges().any(|e| e == ('t', 'f')));
/// assert!(graph.edges().any(|e| e == ('w', 'e')));
/// assert_eq!(graph.symbol_count(), 5);
/// ```
pub fn derive_constraints(keys: &[&str]) -> Result<PrecedenceGraph<char>> {
    let mut graph = PrecedenceGraph::new();
    for key in keys {
        for symbol in key.chars() {
            graph.insert_symbol(symbol);
        }
    }

    for (index, pair) in keys.windows(2).enumerate() {
        let (earlier, later) = (pair[0], pair[1]);
        match first_divergence(earlier, later) {
            Some((u, v)) => {
                if graph.insert_edge(u, v) {
                    trace!("derived constraint {u:?} < {v:?} from adjacent keys {index}/{}", index + 1);
                }
            }
            // One key is a prefix of the other. Shorter-first is consistent
            // with any order; longer-first is satisfiable by none.
            None if earlier.len() > later.len() => {
                debug!("key {earlier:?} at position {index} extends the key {later:?} that follows it");
                return Err(OrderError::InvalidPrefix { index });
            }
            None => {}
        }
    }

    Ok(graph)
}

/// First differing symbol pair within the common length of `a` and `b`.
fn first_divergence(a: &str, b: &str) -> Option<(char, char)> {
    a.chars().zip(b.chars()).find(|(x, y)| x != y)
}
