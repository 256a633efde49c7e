use dioxus::prelude::*;

use crate::data_definitions::analytics_state::{AnalyticsState, PAGE_ROUTE_DEPTH};
use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let analytics = use_context::<AnalyticsState>();
    let route_id = Route::NotFoundPage { segments }.to_string();
    use_effect(use_reactive!(|route_id| {
        analytics.publish_route_result(PAGE_ROUTE_DEPTH, route_id, &serde_json::Value::Null);
    }));

    rsx! {
        NotFoundView {}
    }
}

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        Title { "Not found" }
        section {
            class: "not-found",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
                padding: 80px 24px;
            ",
            h1 { class: "page-title", "We couldn't find this page" }
            p { "The page you were looking for does not exist or was moved." }
            Link { to: Route::HomePage {}, class: "button", "Continue shopping" }
        }
    }
}
