//! Page titles and meta descriptions.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::product::Product;
use crate::storefront_const::{
    SEO_DEFAULT_DESCRIPTION, SEO_DEFAULT_TITLE, SEO_DESCRIPTION_MAX_CHARS, SEO_TITLE_TEMPLATE,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SeoMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
}

impl SeoMeta {
    pub fn document_title(&self) -> String {
        document_title(self.title.as_deref())
    }

    pub fn meta_description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| SEO_DEFAULT_DESCRIPTION.to_string())
    }
}

/// Applies the site title template, or the site title when `title` is empty.
pub fn document_title(title: Option<&str>) -> String {
    match title.filter(|t| !t.is_empty()) {
        Some(title) => SEO_TITLE_TEMPLATE.replace("%s", title),
        None => SEO_DEFAULT_TITLE.to_string(),
    }
}

fn truncate_description(text: &str) -> String {
    text.chars().take(SEO_DESCRIPTION_MAX_CHARS).collect()
}

fn non_empty(value: Option<&String>) -> Option<&String> {
    value.filter(|v| !v.is_empty())
}

pub fn collection_seo(collection: &Collection) -> SeoMeta {
    SeoMeta {
        title: Some(collection.title.clone()),
        description: Some(truncate_description(&collection.description)),
        media: collection.image.as_ref().map(|i| i.url.clone()),
    }
}

pub fn product_seo(product: &Product) -> SeoMeta {
    let title = non_empty(product.seo.title.as_ref()).unwrap_or(&product.title);
    let description = non_empty(product.seo.description.as_ref())
        .map(|d| truncate_description(d))
        .or_else(|| Some(truncate_description(&product.description)).filter(|d| !d.is_empty()));
    SeoMeta {
        title: Some(title.clone()),
        description,
        media: product
            .media
            .nodes
            .first()
            .and_then(|m| m.image.as_ref())
            .map(|i| i.url.clone()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn title_template() {
        assert_eq!(document_title(Some("Boards")), "Boards - A custom Hydrogen storefront");
        assert_eq!(document_title(Some("")), "Snowdevil");
        assert_eq!(document_title(None), "Snowdevil");
    }

    #[test]
    fn product_seo_prefers_seo_fields() {
        let long = "é".repeat(200);
        let product: Product = serde_json::from_value(json!({
            "id": "gid://shopify/Product/1",
            "title": "Board",
            "handle": "board",
            "description": long,
            "seo": {"title": null, "description": ""},
            "media": {"nodes": [{"image": {"url": "https://cdn.test/board.png"}}]}
        }))
        .unwrap();
        let seo = product_seo(&product);
        assert_eq!(seo.title.as_deref(), Some("Board"));
        assert_eq!(seo.description.as_ref().map(|d| d.chars().count()), Some(154));
        assert_eq!(seo.media.as_deref(), Some("https://cdn.test/board.png"));
    }

    #[test]
    fn collection_seo_truncates() {
        let collection: Collection = serde_json::from_value(json!({
            "id": "gid://shopify/Collection/1",
            "title": "Freestyle",
            "handle": "freestyle",
            "description": "x".repeat(300),
            "products": {"nodes": []}
        }))
        .unwrap();
        let seo = collection_seo(&collection);
        assert_eq!(seo.description.map(|d| d.len()), Some(154));
        assert_eq!(seo.media, None);
    }
}
