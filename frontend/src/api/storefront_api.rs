//! Server functions bridging pages to the storefront loaders.

use common::{
    analytics::AnalyticsEvent,
    cart::CartActionResult,
    page_data::{CollectionPageData, HomePageData, LayoutData, ProductPageData, ProductSliderData},
    query_params::QueryParams,
};
use dioxus::prelude::*;

const NOT_FOUND_CODE: u16 = 404;

#[allow(dead_code)]
fn server_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::ServerError { message: e.to_string(), code: 500, details: None }
}

#[allow(dead_code)]
fn not_found(what: &str) -> ServerFnError {
    ServerFnError::ServerError { message: format!("{} not found", what), code: NOT_FOUND_CODE, details: None }
}

pub fn is_not_found(e: &ServerFnError) -> bool {
    matches!(e, ServerFnError::ServerError { code, .. } if *code == NOT_FOUND_CODE)
}


#[server]
pub async fn load_layout(cart_id: Option<String>) -> Result<LayoutData, ServerFnError> {
    let x = backend::api::layout::load_layout(cart_id).await;
    x.map_err(server_error)
}

#[server]
pub async fn load_home() -> Result<HomePageData, ServerFnError> {
    let x = backend::api::home::load_home().await;
    x.map_err(server_error)
}

#[server]
pub async fn load_collection(handle: String, query: QueryParams) -> Result<CollectionPageData, ServerFnError> {
    let x = backend::api::collections::load_collection(handle, query).await;
    x.map_err(server_error)?.ok_or_else(|| not_found("Collection"))
}

#[server]
pub async fn load_product(handle: String, query: QueryParams) -> Result<ProductPageData, ServerFnError> {
    let x = backend::api::products::load_product(handle, query).await;
    x.map_err(server_error)?.ok_or_else(|| not_found("Product"))
}

#[server]
pub async fn load_product_slider() -> Result<ProductSliderData, ServerFnError> {
    let x = backend::api::product_slider::load_product_slider().await;
    x.map_err(server_error)?.ok_or_else(|| not_found("Products"))
}

#[server]
pub async fn cart_action(cart_id: Option<String>, form_data: QueryParams) -> Result<CartActionResult, ServerFnError> {
    let x = backend::api::cart::perform_cart_action(cart_id, form_data).await;
    x.map_err(server_error)
}

#[server]
pub async fn send_analytics_event(event: AnalyticsEvent) -> Result<(), ServerFnError> {
    let x = backend::api::analytics::send_analytics_event(event).await;
    x.map_err(server_error)
}
