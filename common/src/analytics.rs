//! Analytics payload aggregation across route loaders and form submissions.
//!
//! Both aggregations are pure: they read snapshots of the current route
//! results and submissions and build a fresh payload every call. Malformed or
//! missing contributions are skipped, never reported.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::product::{Product, ProductVariant};
use crate::query_params::QueryParams;

pub type AnalyticsPayload = Map<String, Value>;

pub const SHOPIFY_SALES_CHANNEL: &str = "hydrogen";
pub const ADD_TO_CART_EVENT: &str = "addToCart";

pub mod page_type {
    pub const COLLECTION: &str = "collection";
    pub const PRODUCT: &str = "product";
}

/// Data a resolved route loader exposed, identified by its route path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub route_id: String,
    pub data: Option<Value>,
}

impl RouteResult {
    pub fn new(route_id: impl Into<String>, data: Option<Value>) -> Self {
        Self { route_id: route_id.into(), data }
    }
}

/// A form submission that is in flight (`result` is `None`) or completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FormSubmission {
    pub form_data: Option<QueryParams>,
    pub result: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalyticsEventName {
    PageView,
    AddToCart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub event_name: AnalyticsEventName,
    pub payload: AnalyticsPayload,
}

/// Merges the `data_key` field of every route, outer routes first so inner
/// routes win on key collisions.
pub fn aggregate_loader_analytics(routes: &[RouteResult], data_key: &str) -> AnalyticsPayload {
    let mut data = AnalyticsPayload::new();
    for route in routes {
        let field = route.data.as_ref().and_then(|d| d.get(data_key));
        if let Some(field) = field.filter(|v| is_truthy(v)) {
            merge_object(&mut data, field);
        }
    }
    data
}

/// Merges the analytics of every completed submission. Within a submission
/// the JSON encoded in its own form field wins over the result's field.
///
/// Returns `None` when no submission contributed anything.
pub fn aggregate_action_analytics(submissions: &[FormSubmission], data_key: &str) -> Option<AnalyticsPayload> {
    let mut data = AnalyticsPayload::new();
    for submission in submissions {
        let (Some(form_data), Some(result)) = (&submission.form_data, &submission.result) else {
            continue;
        };
        let Some(field) = result.get(data_key).filter(|v| is_truthy(v)) else {
            continue;
        };
        merge_object(&mut data, field);

        if let Some(raw) = form_data.get(data_key).filter(|raw| !raw.is_empty()) {
            if let Ok(in_form) = serde_json::from_str::<Value>(raw) {
                merge_object(&mut data, &in_form);
            }
        }
    }
    if data.is_empty() { None } else { Some(data) }
}

/// Shallow copy of an object's keys; other values contribute nothing.
fn merge_object(target: &mut AnalyticsPayload, source: &Value) {
    if let Value::Object(source) = source {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn build_page_view_payload(
    browser: &AnalyticsPayload,
    page: &AnalyticsPayload,
    has_user_consent: bool,
) -> AnalyticsPayload {
    let mut payload = browser.clone();
    payload.extend(page.iter().map(|(k, v)| (k.clone(), v.clone())));
    payload.insert("hasUserConsent".to_string(), Value::Bool(has_user_consent));
    payload.insert("shopifySalesChannel".to_string(), Value::from(SHOPIFY_SALES_CHANNEL));
    payload
}

/// `None` unless the submitted actions carried an `addToCart` event.
pub fn build_add_to_cart_payload(
    browser: &AnalyticsPayload,
    page: &AnalyticsPayload,
    actions: &AnalyticsPayload,
) -> Option<AnalyticsPayload> {
    if actions.get("event").and_then(Value::as_str) != Some(ADD_TO_CART_EVENT) {
        return None;
    }
    let mut payload = browser.clone();
    payload.extend(page.iter().map(|(k, v)| (k.clone(), v.clone())));
    payload.insert("shopifySalesChannel".to_string(), Value::from(SHOPIFY_SALES_CHANNEL));
    payload.insert("cartId".to_string(), actions.get("cartId").cloned().unwrap_or(Value::Null));
    Some(payload)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalyticsItem {
    pub product_gid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_gid: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub quantity: u32,
}

impl ProductAnalyticsItem {
    pub fn new(product: &Product, variant: Option<&ProductVariant>) -> Self {
        Self {
            product_gid: product.id.clone(),
            variant_gid: variant.map(|v| v.id.clone()),
            name: product.title.clone(),
            variant_name: variant.and_then(|v| v.title.clone()),
            brand: product.vendor.clone(),
            price: variant.map(|v| v.price.amount.clone()),
            quantity: 1,
        }
    }
}

/// The `analytics` field an add-to-cart form submits.
pub fn add_to_cart_form_analytics(item: &ProductAnalyticsItem) -> Value {
    serde_json::json!({
        "event": ADD_TO_CART_EVENT,
        "products": [item],
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn obj(value: Value) -> AnalyticsPayload {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn submission(form: &[(&str, &str)], result: Option<Value>) -> FormSubmission {
        FormSubmission {
            form_data: Some(QueryParams(
                form.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            )),
            result,
        }
    }

    #[test]
    fn inner_loader_overrides_outer() {
        let routes = vec![
            RouteResult::new("root", Some(json!({"analytics": {"a": 1}}))),
            RouteResult::new("/products/x", Some(json!({"analytics": {"a": 2, "b": 3}}))),
        ];
        assert_eq!(aggregate_loader_analytics(&routes, "analytics"), obj(json!({"a": 2, "b": 3})));
    }

    #[test]
    fn loaders_without_the_field_contribute_nothing() {
        let routes = vec![
            RouteResult::new("root", Some(json!({"analytics": {"shopId": "gid://shopify/Shop/1"}}))),
            RouteResult::new("/", Some(json!({"products": []}))),
            RouteResult::new("/other", None),
            RouteResult::new("/null", Some(json!({"analytics": null}))),
        ];
        assert_eq!(
            aggregate_loader_analytics(&routes, "analytics"),
            obj(json!({"shopId": "gid://shopify/Shop/1"}))
        );
    }

    #[test]
    fn loader_aggregation_is_empty_without_contributions() {
        assert!(aggregate_loader_analytics(&[], "analytics").is_empty());
        let routes = vec![RouteResult::new("root", Some(json!([1, 2])))];
        assert!(aggregate_loader_analytics(&routes, "analytics").is_empty());
    }

    #[test]
    fn loader_aggregation_honours_custom_key() {
        let routes = vec![RouteResult::new("root", Some(json!({"analytics": {"a": 1}, "tracking": {"t": true}})))];
        assert_eq!(aggregate_loader_analytics(&routes, "tracking"), obj(json!({"t": true})));
    }

    #[test]
    fn loader_aggregation_does_not_mutate_input() {
        let routes = vec![RouteResult::new("root", Some(json!({"analytics": {"a": 1}})))];
        let before = routes.clone();
        let _ = aggregate_loader_analytics(&routes, "analytics");
        let _ = aggregate_loader_analytics(&routes, "analytics");
        assert_eq!(routes, before);
    }

    #[test]
    fn no_submissions_is_the_no_data_sentinel() {
        assert_eq!(aggregate_action_analytics(&[], "analytics"), None);
    }

    #[test]
    fn pending_or_analytics_free_submissions_are_no_data() {
        let submissions = vec![
            submission(&[("analytics", r#"{"x":2}"#)], None),
            submission(&[], Some(json!({"cart": {}}))),
            FormSubmission { form_data: None, result: Some(json!({"analytics": {"x": 1}})) },
        ];
        assert_eq!(aggregate_action_analytics(&submissions, "analytics"), None);
    }

    #[test]
    fn submitted_analytics_win_over_result() {
        let submissions = vec![submission(&[("analytics", r#"{"x":2}"#)], Some(json!({"analytics": {"x": 1}})))];
        assert_eq!(aggregate_action_analytics(&submissions, "analytics"), Some(obj(json!({"x": 2}))));
    }

    #[test]
    fn malformed_submitted_json_keeps_result_side() {
        let submissions = vec![submission(&[("analytics", "{bad")], Some(json!({"analytics": {"x": 1}})))];
        assert_eq!(aggregate_action_analytics(&submissions, "analytics"), Some(obj(json!({"x": 1}))));
    }

    #[test]
    fn submissions_merge_in_order() {
        let submissions = vec![
            submission(&[("analytics", r#"{"event":"addToCart"}"#)], Some(json!({"analytics": {"cartId": "c1"}}))),
            submission(&[], Some(json!({"analytics": {"cartId": "c2"}}))),
        ];
        assert_eq!(
            aggregate_action_analytics(&submissions, "analytics"),
            Some(obj(json!({"event": "addToCart", "cartId": "c2"})))
        );
    }

    #[test]
    fn page_view_payload_layers_page_over_browser() {
        let browser = obj(json!({"url": "https://shop.test/", "path": "/"}));
        let page = obj(json!({"path": "/products/x", "pageType": "product"}));
        let payload = build_page_view_payload(&browser, &page, true);
        assert_eq!(payload["path"], json!("/products/x"));
        assert_eq!(payload["url"], json!("https://shop.test/"));
        assert_eq!(payload["hasUserConsent"], json!(true));
        assert_eq!(payload["shopifySalesChannel"], json!("hydrogen"));
    }

    #[test]
    fn add_to_cart_payload_requires_the_event() {
        let browser = AnalyticsPayload::new();
        let page = obj(json!({"shopId": "gid://shopify/Shop/1"}));
        assert_eq!(build_add_to_cart_payload(&browser, &page, &obj(json!({"cartId": "c1"}))), None);

        let actions = obj(json!({"event": "addToCart", "cartId": "c1"}));
        let payload = build_add_to_cart_payload(&browser, &page, &actions).unwrap();
        assert_eq!(payload["cartId"], json!("c1"));
        assert_eq!(payload["shopId"], json!("gid://shopify/Shop/1"));
    }
}
