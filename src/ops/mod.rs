pub mod query;
pub mod reorder;
pub mod tree;
