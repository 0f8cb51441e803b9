pub mod searchable_select;

// Re-exports for convenience
pub use searchable_select::*;
