pub mod constraints;
pub mod graph;
pub mod oracle;
pub mod solver;

// Re-export the engine's entry points with descriptive names
pub use constraints::derive_constraints;
pub use graph::PrecedenceGraph;
pub use oracle::{infer_order, is_valid_order, validate_batch};
pub use solver::compute_order;
