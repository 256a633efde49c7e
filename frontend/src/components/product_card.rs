use common::product::ProductSummary;
use dioxus::prelude::*;

use crate::components::money::MoneyText;
use crate::routes::Route;

#[component]
pub fn ProductCard(product: ReadSignal<ProductSummary>) -> Element {
    let product = product.read().clone();
    let variant = product.first_variant().cloned();
    let is_discounted = variant.as_ref().map(|v| v.is_discounted()).unwrap_or(false);

    rsx! {
        Link {
            to: Route::product(product.handle.clone()),
            class: "product-card",
            div {
                class: "product-card-image",
                if is_discounted {
                    label { class: "sale-badge", "Sale" }
                }
                if let Some(image) = variant.as_ref().and_then(|v| v.image.clone()) {
                    img {
                        src: "{image.url}",
                        alt: "{product.title}",
                        loading: "lazy",
                        sizes: "(min-width: 45em) 50vw, 100vw",
                    }
                }
            }
            div {
                class: "product-card-body",
                h3 { class: "product-card-title", "{product.title}" }
                if let Some(variant) = variant.clone() {
                    div {
                        class: "product-card-price",
                        MoneyText { data: variant.price.clone(), without_trailing_zeros: true }
                        if is_discounted {
                            if let Some(compare_at) = variant.compare_at_price.clone() {
                                MoneyText {
                                    data: compare_at,
                                    without_trailing_zeros: true,
                                    class: "compare-at-price".to_string(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
