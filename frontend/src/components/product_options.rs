use common::product::{ProductOption, ProductVariant};
use common::query_params::QueryParams;
use dioxus::prelude::*;

use crate::routes::Route;

/// Option pickers as links: choosing a value rewrites that option in the
/// product URL and the loader resolves the matching variant.
#[component]
pub fn ProductOptions(
    handle: ReadSignal<String>,
    options: ReadSignal<Vec<ProductOption>>,
    selected_variant: ReadSignal<Option<ProductVariant>>,
    query: ReadSignal<QueryParams>,
) -> Element {
    let selected_options = selected_variant
        .read()
        .as_ref()
        .map(|v| v.selected_options.clone())
        .unwrap_or_default();
    let options = options
        .read()
        .iter()
        .filter(|o| o.values.len() > 1)
        .cloned()
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "product-options",
            for option in options {
                div {
                    key: "{option.name}",
                    class: "product-option",
                    h3 { class: "product-option-name", "{option.name}" }
                    div {
                        class: "product-option-values",
                        for value in option.values.iter().cloned() {
                            {
                                let is_selected = selected_options
                                    .iter()
                                    .any(|s| s.name == option.name && s.value == value);
                                let to = Route::ProductPage {
                                    handle: handle.read().clone(),
                                    query: query.read().with_set(&option.name, &value),
                                };
                                rsx! {
                                    Link {
                                        key: "{value}",
                                        to,
                                        class: if is_selected { "option-value option-value-selected" } else { "option-value" },
                                        "{value}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
