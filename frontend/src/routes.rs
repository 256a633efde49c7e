use common::query_params::QueryParams;
use dioxus::prelude::*;

use crate::components::storefront_layout::StorefrontLayout;
use crate::pages::home_page::HomePage;
use crate::pages::collection_page::CollectionPage;
use crate::pages::product_page::ProductPage;
use crate::pages::product_slider_page::ProductSliderPage;
use crate::pages::not_found_page::NotFoundPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StorefrontLayout)]


    #[route("/")]
    HomePage {},


    #[route("/collections/:handle?:..query")]
    CollectionPage { handle: String, query: QueryParams },


    #[route("/products/:handle?:..query")]
    ProductPage { handle: String, query: QueryParams },


    #[route("/product-slider")]
    ProductSliderPage {},


    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },

}

impl Route {
    pub fn collection(handle: impl Into<String>) -> Self {
        Self::CollectionPage { handle: handle.into(), query: QueryParams::new() }
    }

    pub fn product(handle: impl Into<String>) -> Self {
        Self::ProductPage { handle: handle.into(), query: QueryParams::new() }
    }
}
