use dioxus::prelude::*;

use crate::api::storefront_api::{is_not_found, load_product_slider};
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::product_slider::ProductSlider;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::analytics_state::use_page_route_result;
use crate::pages::not_found_page::NotFoundView;
use crate::routes::Route;

#[component]
pub fn ProductSliderPage() -> Element {
    rsx! {
        SuspendWrapper {
            ProductSliderPageContent {}
        }
    }
}

#[component]
fn ProductSliderPageContent() -> Element {
    let page = use_resource(move || async move {
        (Route::ProductSliderPage {}.to_string(), load_product_slider().await)
    });
    use_page_route_result(page);

    let page = match page.suspend()?.cloned().1 {
        Err(e) if is_not_found(&e) => return rsx! { NotFoundView {} },
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(page) => page,
    };

    rsx! {
        section {
            style: "padding: 32px 40px;",
            ProductSlider { products: page.products }
        }
    }
}
