pub mod home_page;
pub mod collection_page;
pub mod product_page;
pub mod product_slider_page;
pub mod not_found_page;
