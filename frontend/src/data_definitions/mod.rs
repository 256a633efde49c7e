pub mod analytics_state;
pub mod cart_state;
