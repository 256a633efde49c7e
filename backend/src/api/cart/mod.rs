//! Cart form actions and module exports.

mod cart_action;
pub use cart_action::perform_cart_action;

pub mod cart_queries;
