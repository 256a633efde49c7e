//! Browser details attached to every analytics event.

use common::analytics::AnalyticsPayload;

/// Empty outside the browser.
pub fn client_browser_parameters() -> AnalyticsPayload {
    #[allow(unused_mut)]
    let mut params = AnalyticsPayload::new();

    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        use serde_json::Value;

        let location = window.location();
        if let Ok(href) = location.href() {
            params.insert("url".to_string(), Value::from(href));
        }
        if let Ok(path) = location.pathname() {
            params.insert("path".to_string(), Value::from(path));
        }
        if let Ok(search) = location.search() {
            params.insert("search".to_string(), Value::from(search));
        }
        if let Some(document) = window.document() {
            params.insert("title".to_string(), Value::from(document.title()));
            params.insert("referrer".to_string(), Value::from(document.referrer()));
        }
        let navigator = window.navigator();
        if let Ok(user_agent) = navigator.user_agent() {
            params.insert("userAgent".to_string(), Value::from(user_agent));
        }
        if let Some(language) = navigator.language() {
            params.insert("navigatorLanguage".to_string(), Value::from(language));
        }
    }

    params
}
