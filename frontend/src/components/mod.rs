pub mod error_boundary;
pub mod suspend_boundary;
pub mod storefront_layout;
pub mod analytics_dispatcher;
pub mod product_card;
pub mod product_slider;
pub mod product_gallery;
pub mod product_options;
pub mod product_form;
pub mod sort_filter;
pub mod money;
pub mod cart_summary;
