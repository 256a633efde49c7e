//! Server side of the storefront: Storefront API access, page loaders and
//! cart actions.

pub mod api;
pub mod storefront_utils;
