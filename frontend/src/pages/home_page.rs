use common::collection::FeaturedCollection;
use common::page_data::HomePageData;
use dioxus::prelude::*;

use crate::api::storefront_api::load_home;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::product_slider::ProductSlider;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::analytics_state::use_page_route_result;
use crate::routes::Route;

/// Best sellers and featured collections.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        SuspendWrapper {
            HomePageContent {}
        }
    }
}

#[component]
fn HomePageContent() -> Element {
    let page = use_resource(move || async move {
        (Route::HomePage {}.to_string(), load_home().await)
    });
    use_page_route_result(page);

    let (_, page) = page.suspend()?.cloned();
    let HomePageData { products, collections } = match page {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(page) => page,
    };

    rsx! {
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 40px;
                width: 100%;
                padding: 32px 40px;
                box-sizing: border-box;
            ",
            section {
                style: "width: 100%;",
                ProductSlider { products }
            }
            section {
                style: "width: 100%;",
                h2 { class: "section-title", "Collections" }
                div {
                    class: "collection-grid",
                    for collection in collections {
                        FeaturedCollectionCard { key: "{collection.id}", collection: collection.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturedCollectionCard(collection: ReadSignal<FeaturedCollection>) -> Element {
    let collection = collection.read().clone();
    rsx! {
        Link {
            to: Route::collection(collection.handle.clone()),
            class: "collection-card",
            if let Some(image) = collection.image.clone() {
                img {
                    src: "{image.url}",
                    alt: "Image of {collection.title}",
                    sizes: "(max-width: 32em) 100vw, 33vw",
                    loading: "lazy",
                }
            }
            h2 { class: "collection-card-title", "{collection.title}" }
        }
    }
}
