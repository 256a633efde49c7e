use common::page_data::CollectionPageData;
use common::pagination::{PageDirection, page_link_params};
use common::query_params::QueryParams;
use common::seo::collection_seo;
use dioxus::prelude::*;

use crate::api::storefront_api::{is_not_found, load_collection};
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::product_card::ProductCard;
use crate::components::sort_filter::SortFilter;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::analytics_state::use_page_route_result;
use crate::pages::not_found_page::NotFoundView;
use crate::routes::Route;

/// Filtered, sorted and paginated product listing of one collection.
#[component]
pub fn CollectionPage(handle: String, query: QueryParams) -> Element {
    rsx! {
        SuspendWrapper {
            CollectionPageContent { handle, query }
        }
    }
}

#[component]
fn CollectionPageContent(handle: ReadSignal<String>, query: ReadSignal<QueryParams>) -> Element {
    let page = use_resource(move || {
        let handle = handle();
        let query = query();
        let route_id = Route::CollectionPage { handle: handle.clone(), query: query.clone() }.to_string();
        async move { (route_id, load_collection(handle, query).await) }
    });
    use_page_route_result(page);

    let page: CollectionPageData = match page.suspend()?.cloned().1 {
        Err(e) if is_not_found(&e) => return rsx! { NotFoundView {} },
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(page) => page,
    };
    let seo = collection_seo(&page.collection);
    let collection = page.collection;

    rsx! {
        Title { "{seo.document_title()}" }
        document::Meta { name: "description", content: seo.meta_description() }
        if let Some(media) = seo.media.clone() {
            document::Meta { property: "og:image", content: media }
        }
        div {
            id: "x-collection-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                padding: 32px 40px;
            ",
            header {
                style: "display: grid; gap: 16px; padding: 16px 0;",
                h1 { class: "page-title", "{collection.title}" }
                if !collection.description.is_empty() {
                    p { class: "collection-description", "{collection.description}" }
                }
            }
            SortFilter {
                handle,
                query,
                filters: collection.products.filters.clone(),
                applied_filters: page.applied_filters,
                collections: page.collections,
                if collection.products.nodes.is_empty() {
                    div {
                        style: "text-align: center;",
                        h3 { class: "empty-title", "Products not found" }
                        span { class: "empty-hint", "Try another filters" }
                    }
                } else {
                    CollectionProducts { handle, query, page: collection.products.clone() }
                }
            }
        }
    }
}

#[component]
fn CollectionProducts(
    handle: ReadSignal<String>,
    query: ReadSignal<QueryParams>,
    page: ReadSignal<common::collection::CollectionProducts>,
) -> Element {
    let page = page.read().clone();
    let page_link = move |cursor: &str, direction: PageDirection| Route::CollectionPage {
        handle: handle.read().clone(),
        query: page_link_params(&query.read(), cursor, direction),
    };
    let previous = page
        .page_info
        .start_cursor
        .as_deref()
        .filter(|_| page.page_info.has_previous_page)
        .map(|cursor| page_link(cursor, PageDirection::Previous));
    let next = page
        .page_info
        .end_cursor
        .as_deref()
        .filter(|_| page.page_info.has_next_page)
        .map(|cursor| page_link(cursor, PageDirection::Next));

    rsx! {
        if let Some(to) = previous {
            div {
                class: "pagination-row",
                Link { to, class: "button button-secondary", "Load previous" }
            }
        }
        div {
            class: "product-grid",
            for product in page.nodes {
                ProductCard { key: "{product.id}", product: product.clone() }
            }
        }
        if let Some(to) = next {
            div {
                class: "pagination-row",
                Link { to, class: "button button-secondary", "Load more products" }
            }
        }
    }
}
