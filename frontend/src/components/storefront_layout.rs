//! Page shell: header with shop name and cart, shared state for every page.

use common::page_data::LayoutData;
use common::seo::document_title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdShoppingCart;
use dioxus_free_icons::Icon;

use crate::api::storefront_api::load_layout;
use crate::components::analytics_dispatcher::AnalyticsDispatcher;
use crate::components::cart_summary::CartSummary;
use crate::components::error_boundary::{ComponentErrorDisplay, GlobalErrorBoundary};
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::analytics_state::{AnalyticsState, LAYOUT_ROUTE_DEPTH};
use crate::data_definitions::cart_state::CartState;
use crate::routes::Route;

const LAYOUT_ROUTE_ID: &str = "root";

#[component]
pub fn StorefrontLayout() -> Element {
    use_context_provider(CartState::new);
    use_context_provider(AnalyticsState::new);

    rsx! {
        Title { "{document_title(None)}" }
        document::Meta { name: "viewport", content: "width=device-width,initial-scale=1" }
        div {
            id: "x-layout-container",
            style: "
                display: flex;
                flex-direction: column;
                min-height: 100vh;
                width: 100%;
            ",
            SuspendWrapper {
                StorefrontHeader {}
            }
            main {
                id: "x-page-container",
                style: "flex-grow: 1; width: 100%;",
                GlobalErrorBoundary {
                    boundary_name: "StorefrontLayout".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
        AnalyticsDispatcher {}
    }
}

#[component]
fn StorefrontHeader() -> Element {
    let cart_state = use_context::<CartState>();
    let analytics = use_context::<AnalyticsState>();
    let mut cart_open = use_signal(|| false);

    let mut layout = use_resource(move || {
        let cart_id = cart_state.cart_id.peek().clone();
        load_layout(cart_id)
    });
    // Effects only run in the browser, where the cart cookie lives.
    use_effect(move || {
        if cart_state.restore_cart_id() {
            layout.restart();
        }
    });
    use_effect(move || {
        if let Some(Ok(layout)) = &*layout.read() {
            analytics.publish_route_result(LAYOUT_ROUTE_DEPTH, LAYOUT_ROUTE_ID.to_string(), layout);
            if let Some(cart) = layout.cart.clone() {
                cart_state.set_cart(cart);
            }
        }
    });
    let layout: LayoutData = match layout.suspend()?.cloned() {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(layout) => layout,
    };
    let cart_count = cart_state.total_quantity();

    rsx! {
        header {
            id: "x-storefront-header",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
                height: 64px;
                padding: 0 32px;
                border-bottom: 1px solid #E5E7EB;
                background: white;
                position: sticky;
                top: 0;
                z-index: 100;
            ",
            Link {
                to: Route::HomePage {},
                class: "shop-name",
                "{layout.shop.name}"
            }
            button {
                class: "cart-button",
                onclick: move |_| {
                    let open = *cart_open.peek();
                    cart_open.set(!open);
                },
                Icon { icon: MdShoppingCart, style: "width: 24px; height: 24px;" }
                span { class: "cart-count", "{cart_count}" }
            }
        }
        if cart_open() {
            CartSummary {}
        }
    }
}
