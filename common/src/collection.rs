//! Collection models returned by the storefront.

use serde::{Deserialize, Serialize};

use crate::product::{Image, PageInfo, ProductSummary, Seo};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterValue {
    pub id: String,
    pub label: String,
    pub count: u64,
    /// JSON encoded `ProductFilter` the storefront expects for this value.
    pub input: String,
}

/// A filter the storefront offers for the products of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub filter_type: String,
    pub values: Vec<FilterValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionProducts {
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub nodes: Vec<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub handle: String,
    #[serde(default)]
    pub seo: Seo,
    #[serde(default)]
    pub image: Option<Image>,
    pub products: CollectionProducts,
}

/// Entry of the collection list shown next to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionLink {
    pub title: String,
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedCollection {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub image: Option<Image>,
}
