use common::product::ProductSummary;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronLeft, MdChevronRight};
use dioxus_free_icons::Icon;

use crate::components::product_card::ProductCard;

const SLIDES_PER_VIEW: usize = 4;

/// Products shown a window at a time, stepped one card per arrow click.
#[component]
pub fn ProductSlider(products: ReadSignal<Vec<ProductSummary>>, header: Option<String>) -> Element {
    let header = header.unwrap_or_else(|| "Featured products".to_string());
    let mut first_visible = use_signal(|| 0usize);

    let product_count = products.read().len();
    if product_count == 0 {
        return rsx! { p { "No products found." } };
    }
    let last_start = product_count.saturating_sub(SLIDES_PER_VIEW);
    let start = first_visible().min(last_start);
    let visible = products
        .read()
        .iter()
        .skip(start)
        .take(SLIDES_PER_VIEW)
        .cloned()
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "product-slider",
            h2 { class: "product-slider-header", "{header}" }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                button {
                    class: "slider-arrow",
                    "aria-label": "Previous products",
                    disabled: start == 0,
                    onclick: move |_| first_visible.set(start.saturating_sub(1)),
                    Icon { icon: MdChevronLeft, style: "width: 28px; height: 28px;" }
                }
                div {
                    class: "product-slider-track",
                    for product in visible {
                        div {
                            key: "{product.id}",
                            class: "product-slider-slide",
                            ProductCard { product: product.clone() }
                        }
                    }
                }
                button {
                    class: "slider-arrow",
                    "aria-label": "Next products",
                    disabled: start >= last_start,
                    onclick: move |_| first_visible.set((start + 1).min(last_start)),
                    Icon { icon: MdChevronRight, style: "width: 28px; height: 28px;" }
                }
            }
            div {
                class: "slider-pagination",
                for i in 0..=last_start {
                    button {
                        key: "{i}",
                        class: if i == start { "slider-dot slider-dot-active" } else { "slider-dot" },
                        "aria-label": "Go to slide {i + 1}",
                        onclick: move |_| first_visible.set(i),
                    }
                }
            }
        }
    }
}
