pub mod storefront_api;
pub mod browser_params;
pub mod cart_cookie;
