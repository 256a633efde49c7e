//! Collection listing loader and module exports.

mod load_collection;
pub use load_collection::load_collection;

pub mod collection_queries;
