//! Snapshots of loader results and cart submissions read by the analytics
//! dispatcher.

use std::collections::BTreeMap;

use common::analytics::{FormSubmission, RouteResult};
use common::query_params::QueryParams;
use dioxus::prelude::*;
use serde::Serialize;

/// Depth of the layout loader; pages sit directly below it.
pub const LAYOUT_ROUTE_DEPTH: usize = 0;
pub const PAGE_ROUTE_DEPTH: usize = 1;

#[derive(Clone, Copy)]
pub struct AnalyticsState {
    route_results: Signal<BTreeMap<usize, RouteResult>>,
    submissions: Signal<BTreeMap<u64, FormSubmission>>,
    next_submission_id: Signal<u64>,
}

impl AnalyticsState {
    pub fn new() -> Self {
        Self {
            route_results: Signal::new(BTreeMap::new()),
            submissions: Signal::new(BTreeMap::new()),
            next_submission_id: Signal::new(0),
        }
    }

    /// Records the data a route at `depth` resolved. A different route at the
    /// same depth invalidates everything nested below it.
    pub fn publish_route_result(mut self, depth: usize, route_id: String, data: &impl Serialize) {
        let data = serde_json::to_value(data).ok();
        insert_route_result(&mut self.route_results.write(), depth, RouteResult::new(route_id, data));
    }

    /// Outer to inner. Subscribes the caller to changes.
    pub fn route_results(&self) -> Vec<RouteResult> {
        self.route_results.read().values().cloned().collect()
    }

    pub fn peek_route_results(&self) -> Vec<RouteResult> {
        self.route_results.peek().values().cloned().collect()
    }

    /// Subscribes the caller to changes.
    pub fn submissions(&self) -> Vec<FormSubmission> {
        self.submissions.read().values().cloned().collect()
    }

    pub fn begin_submission(mut self, form_data: QueryParams) -> u64 {
        let id = *self.next_submission_id.peek();
        self.next_submission_id.set(id + 1);
        self.submissions.write().insert(id, FormSubmission { form_data: Some(form_data), result: None });
        id
    }

    pub fn complete_submission(mut self, id: u64, result: &impl Serialize) {
        if let Some(submission) = self.submissions.write().get_mut(&id) {
            submission.result = serde_json::to_value(result).ok();
        }
    }

    pub fn discard_submission(mut self, id: u64) {
        self.submissions.write().remove(&id);
    }

    /// Drops completed submissions once their events were dispatched.
    pub fn clear_completed_submissions(mut self) {
        self.submissions.write().retain(|_, s| s.result.is_none());
    }
}

/// Loaders resolve in any order, so an empty slot never drops nested results.
fn insert_route_result(routes: &mut BTreeMap<usize, RouteResult>, depth: usize, result: RouteResult) {
    if routes.get(&depth).is_some_and(|r| r.route_id != result.route_id) {
        let _nested = routes.split_off(&(depth + 1));
    }
    routes.insert(depth, result);
}

/// Publishes what a page's loader resolved, tagged with the location it was
/// loaded for. Failed loads still count as a visited page.
pub fn use_page_route_result<T: Serialize + Clone + 'static>(page: Resource<(String, Result<T, ServerFnError>)>) {
    let analytics = use_context::<AnalyticsState>();
    use_effect(move || {
        if let Some((route_id, result)) = &*page.read() {
            match result {
                Ok(data) => analytics.publish_route_result(PAGE_ROUTE_DEPTH, route_id.clone(), data),
                Err(_) => analytics.publish_route_result(PAGE_ROUTE_DEPTH, route_id.clone(), &serde_json::Value::Null),
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(routes: &BTreeMap<usize, RouteResult>) -> Vec<(usize, &str)> {
        routes.iter().map(|(depth, r)| (*depth, r.route_id.as_str())).collect()
    }

    #[test]
    fn page_resolving_before_layout_is_kept() {
        let mut routes = BTreeMap::new();
        insert_route_result(&mut routes, PAGE_ROUTE_DEPTH, RouteResult::new("/products/snowboard", None));
        insert_route_result(&mut routes, LAYOUT_ROUTE_DEPTH, RouteResult::new("root", None));
        assert_eq!(ids(&routes), vec![(0, "root"), (1, "/products/snowboard")]);
    }

    #[test]
    fn layout_resolving_before_page_is_kept() {
        let mut routes = BTreeMap::new();
        insert_route_result(&mut routes, LAYOUT_ROUTE_DEPTH, RouteResult::new("root", None));
        insert_route_result(&mut routes, PAGE_ROUTE_DEPTH, RouteResult::new("/products/snowboard", None));
        assert_eq!(ids(&routes), vec![(0, "root"), (1, "/products/snowboard")]);
    }

    #[test]
    fn republishing_the_same_layout_keeps_the_page() {
        let mut routes = BTreeMap::new();
        insert_route_result(&mut routes, LAYOUT_ROUTE_DEPTH, RouteResult::new("root", None));
        insert_route_result(&mut routes, PAGE_ROUTE_DEPTH, RouteResult::new("/", None));
        insert_route_result(&mut routes, LAYOUT_ROUTE_DEPTH, RouteResult::new("root", Some(serde_json::json!({"cart": null}))));
        assert_eq!(ids(&routes), vec![(0, "root"), (1, "/")]);
        assert_eq!(routes[&0].data, Some(serde_json::json!({"cart": null})));
    }

    #[test]
    fn different_route_at_a_depth_drops_nested_results() {
        let mut routes = BTreeMap::new();
        insert_route_result(&mut routes, LAYOUT_ROUTE_DEPTH, RouteResult::new("root", None));
        insert_route_result(&mut routes, PAGE_ROUTE_DEPTH, RouteResult::new("/", None));
        insert_route_result(&mut routes, LAYOUT_ROUTE_DEPTH, RouteResult::new("other", None));
        assert_eq!(ids(&routes), vec![(0, "other")]);
    }

    #[test]
    fn new_page_replaces_the_previous_page() {
        let mut routes = BTreeMap::new();
        insert_route_result(&mut routes, LAYOUT_ROUTE_DEPTH, RouteResult::new("root", None));
        insert_route_result(&mut routes, PAGE_ROUTE_DEPTH, RouteResult::new("/", None));
        insert_route_result(&mut routes, PAGE_ROUTE_DEPTH, RouteResult::new("/collections/all", None));
        assert_eq!(ids(&routes), vec![(0, "root"), (1, "/collections/all")]);
    }
}
