//! Collection sidebar: applied filters, sort menu, storefront filters and the
//! list of collections.

use common::collection::{CollectionLink, Filter};
use common::collection_filter::{AppliedFilter, SORT_OPTIONS, SortSpec, filter_input_to_url_params};
use common::query_params::QueryParams;
use common::storefront_const::{CURSOR_KEY, DIRECTION_KEY, MAX_PRICE_KEY, MIN_PRICE_KEY, SORT_KEY};
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_content_icons::MdClear;
use dioxus_free_icons::Icon;

use crate::routes::Route;

const PRICE_RANGE_FILTER_TYPE: &str = "PRICE_RANGE";

/// Changing what is listed always restarts from the first page.
fn first_page(query: &QueryParams) -> QueryParams {
    query.without_key(CURSOR_KEY).without_key(DIRECTION_KEY)
}

fn remove_filter_params(query: &QueryParams, filter: &AppliedFilter) -> QueryParams {
    first_page(&query.without_pair(&filter.url_param.key, &filter.url_param.value))
}

fn sort_params(query: &QueryParams, token: &str) -> QueryParams {
    first_page(&query.with_set(SORT_KEY, token))
}

/// Adds the filter value's parameters, or `None` when they are all applied.
fn add_filter_params(query: &QueryParams, input: &str) -> Option<QueryParams> {
    let pairs = filter_input_to_url_params(input);
    if pairs.is_empty() || pairs.iter().all(|pair| query.pairs().contains(pair)) {
        return None;
    }
    let mut params = first_page(query);
    for (key, value) in pairs {
        if !params.pairs().contains(&(key.clone(), value.clone())) {
            params.0.push((key, value));
        }
    }
    Some(params)
}

fn price_params(query: &QueryParams, key: &str, raw: &str) -> QueryParams {
    let raw = raw.trim();
    if raw.is_empty() {
        first_page(&query.without_key(key))
    } else {
        first_page(&query.with_set(key, raw))
    }
}

#[component]
pub fn SortFilter(
    handle: ReadSignal<String>,
    query: ReadSignal<QueryParams>,
    filters: ReadSignal<Vec<Filter>>,
    applied_filters: ReadSignal<Vec<AppliedFilter>>,
    collections: ReadSignal<Vec<CollectionLink>>,
    children: Element,
) -> Element {
    let filters = filters.read().clone();
    rsx! {
        div {
            id: "x-sort-filter",
            style: "
                display: flex;
                flex-direction: row;
                gap: 32px;
                width: 100%;
            ",
            aside {
                class: "filter-sidebar",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 24px;
                    width: 260px;
                    flex-shrink: 0;
                ",
                AppliedFilters { handle, query, applied_filters }
                SortMenu { handle, query }
                for filter in filters {
                    if filter.filter_type == PRICE_RANGE_FILTER_TYPE {
                        PriceRangeFilter { key: "{filter.id}", handle, query }
                    } else {
                        FilterValues { key: "{filter.id}", handle, query, filter: filter.clone() }
                    }
                }
                CollectionList { collections }
            }
            div {
                style: "flex-grow: 1; min-width: 0;",
                {children}
            }
        }
    }
}

#[component]
fn AppliedFilters(
    handle: ReadSignal<String>,
    query: ReadSignal<QueryParams>,
    applied_filters: ReadSignal<Vec<AppliedFilter>>,
) -> Element {
    let applied_filters = applied_filters.read().clone();
    if applied_filters.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            class: "applied-filters",
            h4 { "Applied filters" }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                for filter in applied_filters {
                    Link {
                        key: "{filter.url_param.key}={filter.url_param.value}",
                        to: Route::CollectionPage {
                            handle: handle.read().clone(),
                            query: remove_filter_params(&query.read(), &filter),
                        },
                        class: "filter-chip",
                        span { "{filter.label}" }
                        Icon { icon: MdClear, style: "width: 14px; height: 14px;" }
                    }
                }
            }
        }
    }
}

#[component]
fn SortMenu(handle: ReadSignal<String>, query: ReadSignal<QueryParams>) -> Element {
    let current = SortSpec::from_param(query.read().get(SORT_KEY)).to_param();
    rsx! {
        div {
            class: "sort-menu",
            h4 { "Sort by" }
            ul {
                for (token, label) in SORT_OPTIONS {
                    li {
                        key: "{token}",
                        Link {
                            to: Route::CollectionPage {
                                handle: handle.read().clone(),
                                query: sort_params(&query.read(), token),
                            },
                            class: if current == Some(token) { "sort-option sort-option-active" } else { "sort-option" },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterValues(handle: ReadSignal<String>, query: ReadSignal<QueryParams>, filter: ReadSignal<Filter>) -> Element {
    let filter = filter.read().clone();
    rsx! {
        div {
            class: "filter-group",
            h4 { "{filter.label}" }
            ul {
                for value in filter.values.iter().cloned() {
                    li {
                        key: "{value.id}",
                        {
                            match add_filter_params(&query.read(), &value.input) {
                                Some(params) => rsx! {
                                    Link {
                                        to: Route::CollectionPage { handle: handle.read().clone(), query: params },
                                        class: "filter-value",
                                        "{value.label} ({value.count})"
                                    }
                                },
                                None => rsx! {
                                    span { class: "filter-value filter-value-applied", "{value.label} ({value.count})" }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PriceRangeFilter(handle: ReadSignal<String>, query: ReadSignal<QueryParams>) -> Element {
    let nav = navigator();
    let apply = move |key: &'static str, raw: String| {
        let params = price_params(&query.read(), key, &raw);
        if params != *query.read() {
            nav.push(Route::CollectionPage { handle: handle.read().clone(), query: params });
        }
    };
    let min = query.read().get(MIN_PRICE_KEY).unwrap_or_default().to_string();
    let max = query.read().get(MAX_PRICE_KEY).unwrap_or_default().to_string();

    rsx! {
        div {
            class: "filter-group",
            h4 { "Price" }
            div {
                style: "display: flex; flex-direction: row; gap: 8px;",
                label {
                    "From"
                    input {
                        r#type: "number",
                        name: MIN_PRICE_KEY,
                        value: "{min}",
                        placeholder: "$",
                        onchange: move |e| apply(MIN_PRICE_KEY, e.value()),
                    }
                }
                label {
                    "To"
                    input {
                        r#type: "number",
                        name: MAX_PRICE_KEY,
                        value: "{max}",
                        placeholder: "$",
                        onchange: move |e| apply(MAX_PRICE_KEY, e.value()),
                    }
                }
            }
        }
    }
}

#[component]
fn CollectionList(collections: ReadSignal<Vec<CollectionLink>>) -> Element {
    let collections = collections.read().clone();
    rsx! {
        div {
            class: "collection-list",
            h4 { "Collections" }
            ul {
                for collection in collections {
                    li {
                        key: "{collection.handle}",
                        Link { to: Route::collection(collection.handle.clone()), "{collection.title}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use common::collection_filter::UrlParamPair;

    use super::*;

    #[test]
    fn removing_a_filter_keeps_other_values_and_resets_paging() {
        let query = QueryParams::parse("productVendor=A&productVendor=B&cursor=abc&direction=next&sort=newest");
        let filter = AppliedFilter {
            label: "A".to_string(),
            url_param: UrlParamPair { key: "productVendor".to_string(), value: "A".to_string() },
        };
        assert_eq!(remove_filter_params(&query, &filter).to_string(), "productVendor=B&sort=newest");
    }

    #[test]
    fn sort_link_replaces_previous_sort() {
        let query = QueryParams::parse("sort=newest&available=true");
        assert_eq!(sort_params(&query, "best-selling").to_string(), "sort=best-selling&available=true");
    }

    #[test]
    fn filter_value_link_appends_once() {
        let query = QueryParams::parse("productVendor=A");
        let params = add_filter_params(&query, r#"{"productVendor":"B"}"#).unwrap();
        assert_eq!(params.to_string(), "productVendor=A&productVendor=B");

        assert_eq!(add_filter_params(&query, r#"{"productVendor":"A"}"#), None);
        assert_eq!(add_filter_params(&query, "not json"), None);
    }

    #[test]
    fn variant_option_value_link_uses_prefixed_key() {
        let params = add_filter_params(&QueryParams::new(), r#"{"variantOption":{"name":"Color","value":"Red"}}"#).unwrap();
        assert_eq!(params.pairs(), &[("variantOption.Color".to_string(), "Color:Red".to_string())]);
    }

    #[test]
    fn empty_price_bound_is_removed() {
        let query = QueryParams::parse("minPrice=10&maxPrice=50");
        assert_eq!(price_params(&query, MIN_PRICE_KEY, " ").to_string(), "maxPrice=50");
        assert_eq!(price_params(&query, MAX_PRICE_KEY, "80").to_string(), "minPrice=10&maxPrice=80");
    }
}
