use common::cart::{CartAction, form_field};
use common::query_params::QueryParams;
use dioxus::prelude::*;

use crate::api::storefront_api::cart_action;
use crate::components::money::MoneyText;
use crate::data_definitions::cart_state::CartState;

/// Drop-down list of cart lines with a checkout link.
#[component]
pub fn CartSummary() -> Element {
    let cart_state = use_context::<CartState>();
    let cart = cart_state.cart.read().clone();

    let Some(cart) = cart.filter(|c| !c.lines.nodes.is_empty()) else {
        return rsx! {
            div { class: "cart-summary", p { "Your cart is empty." } }
        };
    };

    rsx! {
        div {
            class: "cart-summary",
            ul {
                for line in cart.lines.nodes.clone() {
                    li {
                        key: "{line.id}",
                        class: "cart-line",
                        if let Some(image) = line.merchandise.image.clone() {
                            img {
                                src: "{image.url}",
                                alt: image.alt_text.clone().unwrap_or_default(),
                                width: "48",
                                height: "48",
                            }
                        }
                        span {
                            class: "cart-line-title",
                            "{line.merchandise.title.clone().unwrap_or_default()}"
                        }
                        span { class: "cart-line-quantity", "× {line.quantity}" }
                        RemoveLineButton { line_id: line.id.clone() }
                    }
                }
            }
            if let Some(cost) = cart.cost.clone() {
                div {
                    class: "cart-subtotal",
                    "Subtotal: "
                    MoneyText { data: cost.subtotal_amount, without_trailing_zeros: false }
                }
            }
            if let Some(checkout_url) = cart.checkout_url.clone() {
                a { class: "button", href: "{checkout_url}", "Checkout" }
            }
        }
    }
}

#[component]
fn RemoveLineButton(line_id: String) -> Element {
    let cart_state = use_context::<CartState>();
    let mut pending = use_signal(|| false);

    rsx! {
        button {
            class: "button button-secondary",
            disabled: pending(),
            onclick: move |_| {
                let lines_ids = serde_json::json!([line_id.clone()]).to_string();
                let form_data = QueryParams(vec![
                    (form_field::CART_ACTION.to_string(), CartAction::RemoveFromCart.as_form_value().to_string()),
                    (form_field::LINE_IDS.to_string(), lines_ids),
                ]);
                let cart_id = cart_state.cart_id.peek().clone();
                pending.set(true);
                spawn(async move {
                    match cart_action(cart_id, form_data).await {
                        Ok(result) => cart_state.set_cart(result.cart),
                        Err(e) => dioxus::logger::tracing::warn!("remove from cart failed: {e}"),
                    }
                    pending.set(false);
                });
            },
            "Remove"
        }
    }
}
