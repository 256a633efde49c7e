use common::analytics::ProductAnalyticsItem;
use common::page_data::ProductPageData;
use common::product::shop_pay_url;
use common::query_params::QueryParams;
use common::seo::product_seo;
use dioxus::prelude::*;

use crate::api::storefront_api::{is_not_found, load_product};
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::money::MoneyText;
use crate::components::product_form::ProductForm;
use crate::components::product_gallery::ProductGallery;
use crate::components::product_options::ProductOptions;
use crate::components::product_slider::ProductSlider;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::analytics_state::use_page_route_result;
use crate::pages::not_found_page::NotFoundView;
use crate::routes::Route;

/// Product detail. Every query parameter is read as a selected option.
#[component]
pub fn ProductPage(handle: String, query: QueryParams) -> Element {
    rsx! {
        SuspendWrapper {
            ProductPageContent { handle, query }
        }
    }
}

#[component]
fn ProductPageContent(handle: ReadSignal<String>, query: ReadSignal<QueryParams>) -> Element {
    let page = use_resource(move || {
        let handle = handle();
        let query = query();
        let route_id = Route::ProductPage { handle: handle.clone(), query: query.clone() }.to_string();
        async move { (route_id, load_product(handle, query).await) }
    });
    use_page_route_result(page);

    let page: ProductPageData = match page.suspend()?.cloned().1 {
        Err(e) if is_not_found(&e) => return rsx! { NotFoundView {} },
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(page) => page,
    };
    let seo = product_seo(&page.product);
    let product = page.product;
    let selected_variant = page.selected_variant;
    let orderable = selected_variant.as_ref().map(|v| v.available_for_sale).unwrap_or(false);
    let product_analytics = ProductAnalyticsItem::new(&product, selected_variant.as_ref());
    let shop_pay = selected_variant
        .as_ref()
        .and_then(|v| shop_pay_url(&page.store_domain, std::slice::from_ref(&v.id)));

    rsx! {
        Title { "{seo.document_title()}" }
        document::Meta { name: "description", content: seo.meta_description() }
        if let Some(media) = seo.media.clone() {
            document::Meta { property: "og:image", content: media }
        }
        section {
            id: "x-product-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 48px;
                padding: 32px 40px;
            ",
            div {
                class: "product-layout",
                div {
                    class: "product-media",
                    ProductGallery { media: product.media.nodes.clone() }
                }
                div {
                    class: "product-details",
                    div {
                        style: "display: grid; gap: 8px;",
                        h1 { class: "page-title", "{product.title}" }
                        span { class: "product-vendor", "{product.vendor}" }
                    }
                    ProductOptions {
                        handle,
                        options: product.options.clone(),
                        selected_variant: selected_variant.clone(),
                        query,
                    }
                    if let Some(variant) = selected_variant.clone() {
                        MoneyText {
                            data: variant.price,
                            without_trailing_zeros: true,
                            class: "product-price".to_string(),
                        }
                        if orderable {
                            div {
                                style: "display: grid; gap: 8px;",
                                if let Some(url) = shop_pay {
                                    a { class: "button shop-pay", href: "{url}", "Buy with Shop Pay" }
                                }
                                ProductForm { variant_id: variant.id, product_analytics }
                            }
                        }
                    }
                    div {
                        class: "product-description",
                        dangerous_inner_html: "{product.description_html}",
                    }
                }
            }
            ProductSlider {
                products: page.product_recommendations,
                header: "Recommendations".to_string(),
            }
        }
    }
}
