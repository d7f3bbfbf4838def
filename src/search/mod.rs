pub mod context;
pub mod eval;
pub mod ordering;
pub mod pesto;
pub mod picker;
pub mod search;
pub mod see;
pub mod tt;

pub use search::{SearchLimits, search, search_with_limits};
pub use tt::TranspositionTable;
