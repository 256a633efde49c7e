//! Storefront product models and presentation helpers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

impl Money {
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.trim().parse::<f64>().ok()
    }

    /// `$12.50`, or `$12` when `without_trailing_zeros` drops a zero
    /// fractional part.
    pub fn format(&self, without_trailing_zeros: bool) -> String {
        let Some(amount) = self.amount_value() else {
            return format!("{} {}", self.amount, self.currency_code);
        };
        let mut number = format!("{:.2}", amount.abs());
        if without_trailing_zeros && number.ends_with(".00") {
            number.truncate(number.len() - 3);
        }
        let sign = if amount < 0.0 { "-" } else { "" };
        match currency_symbol(&self.currency_code) {
            Some(symbol) => format!("{sign}{symbol}{number}"),
            None => format!("{sign}{number} {}", self.currency_code),
        }
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" | "CAD" | "AUD" | "NZD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub available_for_sale: bool,
    #[serde(default)]
    pub image: Option<Image>,
    pub price: Money,
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub unit_price: Option<Money>,
}

impl ProductVariant {
    /// On sale when the compare-at price is numerically above the price.
    pub fn is_discounted(&self) -> bool {
        let Some(compare_at) = self.compare_at_price.as_ref().and_then(Money::amount_value) else {
            return false;
        };
        self.price.amount_value().map(|price| compare_at > price).unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nodes<T> {
    pub nodes: Vec<T>,
}

impl<T> Default for Nodes<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    #[serde(default)]
    pub cursor: Option<String>,
    pub node: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edges<T> {
    pub edges: Vec<Edge<T>>,
}

impl<T> Edges<T> {
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// What a product card needs: listings, sliders and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub variants: Nodes<ProductVariant>,
}

impl ProductSummary {
    pub fn first_variant(&self) -> Option<&ProductVariant> {
        self.variants.nodes.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model3dSource {
    pub mime_type: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub media_content_type: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub sources: Vec<Model3dSource>,
}

impl Media {
    pub fn type_name(&self) -> &'static str {
        media_type_name(self.media_content_type.as_deref())
    }

    pub fn alt_text(&self) -> String {
        self.alt
            .clone()
            .filter(|alt| !alt.is_empty())
            .unwrap_or_else(|| "Product image".to_string())
    }

    pub fn key(&self) -> String {
        self.id
            .clone()
            .or_else(|| self.image.as_ref().and_then(|i| i.id.clone()))
            .unwrap_or_default()
    }
}

/// GraphQL type name for a media content type, images by default.
pub fn media_type_name(media_content_type: Option<&str>) -> &'static str {
    match media_content_type {
        Some("MODEL_3D") => "Model3d",
        Some("VIDEO") => "Video",
        Some("EXTERNAL_VIDEO") => "ExternalVideo",
        _ => "MediaImage",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_html: String,
    #[serde(default)]
    pub media: Nodes<Media>,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    #[serde(default)]
    pub selected_variant: Option<ProductVariant>,
    #[serde(default)]
    pub variants: Nodes<ProductVariant>,
    #[serde(default)]
    pub seo: Seo,
}

impl Product {
    /// The variant matching the selected options, or the first variant so
    /// there is always something orderable to show.
    pub fn selected_or_first_variant(&self) -> Option<ProductVariant> {
        self.selected_variant
            .clone()
            .or_else(|| self.variants.nodes.first().cloned())
    }
}

/// Trailing numeric id of a storefront gid such as
/// `gid://shopify/ProductVariant/123`.
pub fn gid_numeric_id(gid: &str) -> Option<&str> {
    let id = gid.rsplit('/').next()?;
    let id = id.split('?').next()?;
    (!id.is_empty() && id.chars().all(|c| c.is_ascii_digit())).then_some(id)
}

/// Checkout link that sends the given variants straight to Shop Pay.
pub fn shop_pay_url(store_domain: &str, variant_ids: &[String]) -> Option<String> {
    let lines = variant_ids
        .iter()
        .map(|gid| gid_numeric_id(gid).map(|id| format!("{id}:1")))
        .collect::<Option<Vec<_>>>()?;
    if lines.is_empty() {
        return None;
    }
    let domain = store_domain.trim_start_matches("https://").trim_end_matches('/');
    Some(format!("https://{}/cart/{}?payment=shop_pay", domain, lines.join(",")))
}
