pub mod error;
pub mod order;

pub use error::{OrderError, Result};
pub use order::{
    compute_order, derive_constraints, infer_order, is_valid_order, validate_batch,
    PrecedenceGraph,
};
