//! Product detail loader and module exports.

mod load_product;
pub use load_product::load_product;

pub mod product_queries;
