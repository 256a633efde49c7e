//! Data each route loader hands to its page.
//!
//! Every struct serializes its analytics under `analytics`, which is the field
//! the loader aggregation reads.

use serde::{Deserialize, Serialize};

use crate::analytics::AnalyticsPayload;
use crate::cart::Cart;
use crate::collection::{Collection, CollectionLink, FeaturedCollection};
use crate::collection_filter::AppliedFilter;
use crate::product::{Product, ProductSummary, ProductVariant};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutData {
    pub shop: Shop,
    pub cart: Option<Cart>,
    pub analytics: AnalyticsPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePageData {
    pub products: Vec<ProductSummary>,
    pub collections: Vec<FeaturedCollection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPageData {
    pub collection: Collection,
    pub applied_filters: Vec<AppliedFilter>,
    pub collections: Vec<CollectionLink>,
    pub analytics: AnalyticsPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPageData {
    pub product: Product,
    pub product_recommendations: Vec<ProductSummary>,
    pub selected_variant: Option<ProductVariant>,
    pub store_domain: String,
    pub analytics: AnalyticsPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSliderData {
    pub products: Vec<ProductSummary>,
}
