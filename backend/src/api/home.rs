//! Home page loader: best-selling products and featured collections.

use common::{
    collection::FeaturedCollection,
    page_data::HomePageData,
    product::{Edges, Nodes, ProductSummary},
    storefront_const::{FEATURED_COLLECTIONS_COUNT, FEATURED_PRODUCTS_COUNT},
};
use serde::Deserialize;
use serde_json::json;

use crate::storefront_utils::{
    fragments::{PRODUCT_CARD_FRAGMENT, with_fragments},
    storefront_cache::CachePolicy,
    storefront_client::storefront_query,
};

const PRODUCTS_QUERY: &str = r#"#graphql
  query getProducts($first: Int, $sortKey: ProductSortKeys) {
    products(first: $first, sortKey: $sortKey) {
      edges {
        cursor
        node {
          ...ProductCard
        }
      }
    }
  }
"#;

const COLLECTIONS_QUERY: &str = r#"#graphql
  query FeaturedCollections($first: Int) {
    collections(first: $first, query: "collection_type:smart") {
      nodes {
        id
        title
        handle
        image {
          altText
          width
          height
          url
        }
      }
    }
  }
"#;

#[derive(Debug, Deserialize)]
struct ProductsQueryResponse {
    products: Edges<ProductSummary>,
}

#[derive(Debug, Deserialize)]
struct CollectionsQueryResponse {
    collections: Nodes<FeaturedCollection>,
}

pub(crate) async fn best_selling_products() -> anyhow::Result<Vec<ProductSummary>> {
    let query = with_fragments(PRODUCTS_QUERY, &[PRODUCT_CARD_FRAGMENT]);
    let response = storefront_query::<ProductsQueryResponse>(
        &query,
        json!({ "first": FEATURED_PRODUCTS_COUNT, "sortKey": "BEST_SELLING" }),
        CachePolicy::Short,
    )
    .await?;
    Ok(response.products.into_nodes())
}

pub async fn load_home() -> anyhow::Result<HomePageData> {
    let collections = storefront_query::<CollectionsQueryResponse>(
        COLLECTIONS_QUERY,
        json!({ "first": FEATURED_COLLECTIONS_COUNT }),
        CachePolicy::Short,
    );
    let (products, collections) = futures::try_join!(best_selling_products(), collections)?;
    Ok(HomePageData {
        products,
        collections: collections.collections.nodes,
    })
}
