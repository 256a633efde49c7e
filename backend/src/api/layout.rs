//! Loader shared by every page: shop details, the current cart and the
//! shop-level analytics.

use common::{analytics::AnalyticsPayload, cart::Cart, page_data::{LayoutData, Shop}, storefront_const::DEFAULT_COUNTRY_CODE};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::cart::cart_queries::{CART_FRAGMENT, CART_QUERY};
use crate::storefront_utils::{
    fragments::with_fragments,
    storefront_cache::CachePolicy,
    storefront_client::storefront_query,
    storefront_config::get_storefront_config,
};

const LAYOUT_QUERY: &str = r#"#graphql
  query layout {
    shop {
      name
      description
    }
  }
"#;

#[derive(Debug, Deserialize)]
struct LayoutQueryResponse {
    shop: Shop,
}

#[derive(Debug, Deserialize)]
struct CartQueryResponse {
    cart: Option<Cart>,
}

pub async fn load_layout(cart_id: Option<String>) -> anyhow::Result<LayoutData> {
    let layout = storefront_query::<LayoutQueryResponse>(LAYOUT_QUERY, json!({}), CachePolicy::Short);
    let cart = get_cart(cart_id);
    let (layout, cart) = futures::try_join!(layout, cart)?;

    let mut analytics = AnalyticsPayload::new();
    analytics.insert("shopId".to_string(), Value::from(get_storefront_config().shop_id.clone()));

    Ok(LayoutData {
        shop: layout.shop,
        cart,
        analytics,
    })
}

async fn get_cart(cart_id: Option<String>) -> anyhow::Result<Option<Cart>> {
    let Some(cart_id) = cart_id.filter(|id| !id.is_empty()) else {
        return Ok(None);
    };
    let query = with_fragments(CART_QUERY, &[CART_FRAGMENT]);
    let response = storefront_query::<CartQueryResponse>(
        &query,
        json!({ "cartId": cart_id, "country": DEFAULT_COUNTRY_CODE, "language": "EN" }),
        CachePolicy::None,
    )
    .await?;
    Ok(response.cart)
}
