//! Standalone product slider page loader.

use common::page_data::ProductSliderData;
use tracing::info;

use crate::api::home::best_selling_products;

/// `None` when the storefront has no products to show.
pub async fn load_product_slider() -> anyhow::Result<Option<ProductSliderData>> {
    let products = best_selling_products().await?;
    if products.first().map(|p| p.id.is_empty()).unwrap_or(true) {
        info!("product slider: no products");
        return Ok(None);
    }
    Ok(Some(ProductSliderData { products }))
}
