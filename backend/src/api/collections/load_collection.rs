//! Collection page: filters and sort from the query string, one page of
//! products, and the list of all collections.

use common::{
    analytics::{AnalyticsPayload, page_type},
    collection::{Collection, CollectionLink},
    collection_filter::{CollectionFilters, translate_collection_params},
    page_data::CollectionPageData,
    pagination::PaginationVariables,
    product::Edges,
    query_params::QueryParams,
    storefront_const::{ALL_COLLECTIONS_COUNT, COLLECTION_PAGE_SIZE},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::api::collections::collection_queries::COLLECTION_QUERY;
use crate::storefront_utils::{
    fragments::{PRODUCT_CARD_FRAGMENT, with_fragments},
    storefront_cache::CachePolicy,
    storefront_client::storefront_query,
};

#[derive(Debug, Deserialize)]
struct CollectionQueryResponse {
    collection: Option<Collection>,
    collections: Edges<CollectionLink>,
}

/// `None` when no collection has this handle.
pub async fn load_collection(handle: String, params: QueryParams) -> anyhow::Result<Option<CollectionPageData>> {
    let (variables, translated) = collection_query_variables(&handle, &params)?;

    let query = with_fragments(COLLECTION_QUERY, &[PRODUCT_CARD_FRAGMENT]);
    let response = storefront_query::<CollectionQueryResponse>(&query, variables, CachePolicy::Short).await?;

    let Some(collection) = response.collection else {
        info!("collection not found: {}", handle);
        return Ok(None);
    };

    let analytics = collection_analytics(&collection);
    Ok(Some(CollectionPageData {
        collection,
        applied_filters: translated.applied_filters,
        collections: response.collections.into_nodes(),
        analytics,
    }))
}

fn collection_query_variables(handle: &str, params: &QueryParams) -> anyhow::Result<(Value, CollectionFilters)> {
    let translated = translate_collection_params(params);
    let pagination = PaginationVariables::from_query_params(params, COLLECTION_PAGE_SIZE);

    let mut variables = serde_json::to_value(&pagination)?;
    let Value::Object(fields) = &mut variables else {
        anyhow::bail!("pagination variables are not an object");
    };
    fields.insert("handle".to_string(), Value::from(handle));
    fields.insert("filters".to_string(), serde_json::to_value(&translated.filters)?);
    fields.insert("sortKey".to_string(), serde_json::to_value(translated.sort.sort_key)?);
    fields.insert("reverse".to_string(), Value::Bool(translated.sort.reverse));
    fields.insert("allCollections".to_string(), Value::from(ALL_COLLECTIONS_COUNT));
    Ok((variables, translated))
}

fn collection_analytics(collection: &Collection) -> AnalyticsPayload {
    let mut analytics = AnalyticsPayload::new();
    analytics.insert("pageType".to_string(), Value::from(page_type::COLLECTION));
    analytics.insert("resourceId".to_string(), Value::from(collection.id.clone()));
    analytics.insert("collectionHandle".to_string(), Value::from(collection.handle.clone()));
    analytics.insert(
        "collection".to_string(),
        json!([{ "id": collection.id, "title": collection.title, "handle": collection.handle }]),
    );
    analytics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_combine_filters_sort_and_pagination() {
        let params = QueryParams::parse("available=true&minPrice=10&sort=price-high-low&cursor=abc&direction=next");
        let (variables, translated) = collection_query_variables("freestyle", &params).unwrap();
        assert_eq!(
            variables,
            json!({
                "handle": "freestyle",
                "first": 24,
                "endCursor": "abc",
                "filters": [{"available": true}, {"price": {"min": 10.0}}],
                "sortKey": "PRICE",
                "reverse": true,
                "allCollections": 100,
            })
        );
        assert_eq!(translated.applied_filters.len(), 2);
    }

    #[test]
    fn default_variables_sort_by_relevance() {
        let (variables, _) = collection_query_variables("all", &QueryParams::new()).unwrap();
        assert_eq!(variables["sortKey"], json!("RELEVANCE"));
        assert_eq!(variables["reverse"], json!(false));
        assert_eq!(variables["filters"], json!([]));
        assert!(variables.get("endCursor").is_none());
    }

    #[test]
    fn analytics_identify_the_collection() {
        let collection: Collection = serde_json::from_value(json!({
            "id": "gid://shopify/Collection/9",
            "title": "Freestyle",
            "handle": "freestyle",
            "products": {"nodes": []}
        }))
        .unwrap();
        let analytics = collection_analytics(&collection);
        assert_eq!(analytics["pageType"], json!("collection"));
        assert_eq!(analytics["collectionHandle"], json!("freestyle"));
        assert_eq!(analytics["collection"][0]["id"], json!("gid://shopify/Collection/9"));
    }
}
