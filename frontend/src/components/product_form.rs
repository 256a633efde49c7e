use common::analytics::{ProductAnalyticsItem, add_to_cart_form_analytics};
use common::cart::{CartAction, CartLineInput, form_field};
use common::query_params::QueryParams;
use common::storefront_const::DEFAULT_COUNTRY_CODE;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::api::storefront_api::cart_action;
use crate::data_definitions::analytics_state::AnalyticsState;
use crate::data_definitions::cart_state::CartState;

/// Fields an add-to-cart submission posts for one unit of the variant.
fn add_to_cart_form(variant_id: &str, product_analytics: &ProductAnalyticsItem) -> QueryParams {
    let lines = vec![CartLineInput { merchandise_id: variant_id.to_string(), quantity: 1 }];
    QueryParams(vec![
        (form_field::CART_ACTION.to_string(), CartAction::AddToCart.as_form_value().to_string()),
        (form_field::COUNTRY_CODE.to_string(), DEFAULT_COUNTRY_CODE.to_string()),
        (form_field::ANALYTICS.to_string(), add_to_cart_form_analytics(product_analytics).to_string()),
        (form_field::LINES.to_string(), serde_json::to_string(&lines).unwrap_or_default()),
    ])
}

#[component]
pub fn ProductForm(variant_id: ReadSignal<String>, product_analytics: ReadSignal<ProductAnalyticsItem>) -> Element {
    let cart_state = use_context::<CartState>();
    let analytics = use_context::<AnalyticsState>();
    let mut pending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: MouseEvent| {
        let form_data = add_to_cart_form(&variant_id.read(), &product_analytics.read());
        let cart_id = cart_state.cart_id.peek().clone();
        let submission_id = analytics.begin_submission(form_data.clone());
        pending.set(true);
        error.set(None);
        spawn(async move {
            match cart_action(cart_id, form_data).await {
                Ok(result) => {
                    info!("added to cart {}", result.cart.id);
                    cart_state.set_cart(result.cart.clone());
                    analytics.complete_submission(submission_id, &result);
                }
                Err(e) => {
                    warn!("add to cart failed: {e}");
                    analytics.discard_submission(submission_id);
                    error.set(Some("Could not add this item to your cart.".to_string()));
                }
            }
            pending.set(false);
        });
    };

    rsx! {
        div {
            class: "product-form",
            button {
                class: "button add-to-cart",
                disabled: pending(),
                onclick: submit,
                if pending() { "Adding..." } else { "Add to Cart" }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
        }
    }
}
