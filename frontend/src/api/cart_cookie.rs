//! Cart id kept in `document.cookie` so the cart survives a reload.
//! Outside the browser there is no cookie jar and both calls do nothing.

#[cfg(target_arch = "wasm32")]
pub fn read_cart_id() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    common::cart::cart_id_from_cookies(&cookies)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_cart_id() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn store_cart_id(cart_id: &str) {
    let Some(document) = html_document() else {
        return;
    };
    if let Err(e) = document.set_cookie(&common::cart::cart_id_cookie(cart_id)) {
        dioxus::logger::tracing::warn!("failed to store cart cookie: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_cart_id(_cart_id: &str) {}

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}
