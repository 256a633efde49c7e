//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod storefront_const;
pub mod query_params;
pub mod pagination;
pub mod collection_filter;
pub mod analytics;
pub mod product;
pub mod collection;
pub mod cart;
pub mod page_data;
pub mod seo;
