//! Sends page views and add-to-cart events built from the aggregated
//! analytics of loaders and cart submissions.

use common::analytics::{
    AnalyticsEvent, AnalyticsEventName, AnalyticsPayload, aggregate_action_analytics,
    aggregate_loader_analytics, build_add_to_cart_payload, build_page_view_payload,
};
use common::storefront_const::ANALYTICS_DATA_KEY;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::api::browser_params::client_browser_parameters;
use crate::api::storefront_api::send_analytics_event;
use crate::data_definitions::analytics_state::{AnalyticsState, PAGE_ROUTE_DEPTH};

const HAS_USER_CONSENT: bool = true;

fn dispatch(event_name: AnalyticsEventName, payload: AnalyticsPayload) {
    debug!("dispatching {:?}", event_name);
    spawn(async move {
        if let Err(e) = send_analytics_event(AnalyticsEvent { event_name, payload }).await {
            warn!("analytics event {:?} not delivered: {}", event_name, e);
        }
    });
}

#[component]
pub fn AnalyticsDispatcher() -> Element {
    let analytics = use_context::<AnalyticsState>();
    let mut last_page_view = use_signal(|| None::<String>);

    // one page view per visited location, once layout and page data are in
    use_effect(move || {
        let routes = analytics.route_results();
        if routes.len() <= PAGE_ROUTE_DEPTH {
            return;
        }
        let Some(page) = routes.last() else {
            return;
        };
        // keyed by path and query: revisiting the current URL is not a new view
        if last_page_view.peek().as_deref() == Some(page.route_id.as_str()) {
            return;
        }
        last_page_view.set(Some(page.route_id.clone()));

        let page_analytics = aggregate_loader_analytics(&routes, ANALYTICS_DATA_KEY);
        let payload = build_page_view_payload(&client_browser_parameters(), &page_analytics, HAS_USER_CONSENT);
        dispatch(AnalyticsEventName::PageView, payload);
    });

    use_effect(move || {
        let submissions = analytics.submissions();
        if submissions.iter().all(|s| s.result.is_none()) {
            return;
        }
        if let Some(actions) = aggregate_action_analytics(&submissions, ANALYTICS_DATA_KEY) {
            let page_analytics = aggregate_loader_analytics(&analytics.peek_route_results(), ANALYTICS_DATA_KEY);
            if let Some(payload) = build_add_to_cart_payload(&client_browser_parameters(), &page_analytics, &actions) {
                dispatch(AnalyticsEventName::AddToCart, payload);
            }
        }
        analytics.clear_completed_submissions();
    });

    rsx! {}
}
