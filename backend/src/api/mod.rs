//! Route loaders and actions, one module per page.

pub mod layout;
pub mod home;
pub mod collections;
pub mod products;
pub mod product_slider;
pub mod cart;
pub mod analytics;
