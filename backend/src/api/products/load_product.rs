//! Product page: the product with the variant matching the query string's
//! options, plus recommendations.

use common::{
    analytics::{AnalyticsPayload, ProductAnalyticsItem, page_type},
    page_data::ProductPageData,
    product::{Product, ProductSummary, ProductVariant, SelectedOption},
    query_params::QueryParams,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::api::products::product_queries::{PRODUCT_QUERY, PRODUCT_RECOMMENDATIONS_QUERY};
use crate::storefront_utils::{
    fragments::{PRODUCT_CARD_FRAGMENT, with_fragments},
    storefront_cache::CachePolicy,
    storefront_client::storefront_query,
    storefront_config::get_storefront_config,
};

#[derive(Debug, Deserialize)]
struct ProductQueryResponse {
    product: Option<Product>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecommendationsResponse {
    product_recommendations: Option<Vec<ProductSummary>>,
}

/// Every query parameter is read as a selected product option.
fn selected_options(params: &QueryParams) -> Vec<SelectedOption> {
    params
        .pairs()
        .iter()
        .map(|(name, value)| SelectedOption { name: name.clone(), value: value.clone() })
        .collect()
}

/// `None` when no product has this handle.
pub async fn load_product(handle: String, params: QueryParams) -> anyhow::Result<Option<ProductPageData>> {
    let response = storefront_query::<ProductQueryResponse>(
        PRODUCT_QUERY,
        json!({ "handle": handle, "selectedOptions": selected_options(&params) }),
        CachePolicy::Short,
    )
    .await?;

    let Some(product) = response.product.filter(|p| !p.id.is_empty()) else {
        info!("product not found: {}", handle);
        return Ok(None);
    };

    let recommendations_query = with_fragments(PRODUCT_RECOMMENDATIONS_QUERY, &[PRODUCT_CARD_FRAGMENT]);
    let recommendations = storefront_query::<ProductRecommendationsResponse>(
        &recommendations_query,
        json!({ "productId": product.id }),
        CachePolicy::Short,
    )
    .await?;

    let selected_variant = product.selected_or_first_variant();
    let analytics = product_analytics(&product, selected_variant.as_ref());

    Ok(Some(ProductPageData {
        product,
        product_recommendations: recommendations.product_recommendations.unwrap_or_default(),
        selected_variant,
        store_domain: get_storefront_config().store_domain.clone(),
        analytics,
    }))
}

fn product_analytics(product: &Product, variant: Option<&ProductVariant>) -> AnalyticsPayload {
    let mut analytics = AnalyticsPayload::new();
    analytics.insert("pageType".to_string(), Value::from(page_type::PRODUCT));
    analytics.insert("resourceId".to_string(), Value::from(product.id.clone()));
    analytics.insert("products".to_string(), json!([ProductAnalyticsItem::new(product, variant)]));
    analytics
}
