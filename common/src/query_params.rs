//! Ordered query-string parameters.
//!
//! Parameters keep the order they appeared in the raw query string, so every
//! list derived from them (applied filters, selected options) is reproducible
//! for a given URL.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryParams(pub Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self(form_urlencoded::parse(query.as_bytes()).into_owned().collect())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Replaces every occurrence of `key` with a single pair, kept at the
    /// position of the first occurrence (or appended).
    pub fn with_set(&self, key: &str, value: &str) -> Self {
        let mut pairs = Vec::with_capacity(self.0.len() + 1);
        let mut placed = false;
        for (k, v) in &self.0 {
            if k == key {
                if !placed {
                    pairs.push((key.to_string(), value.to_string()));
                    placed = true;
                }
                continue;
            }
            pairs.push((k.clone(), v.clone()));
        }
        if !placed {
            pairs.push((key.to_string(), value.to_string()));
        }
        Self(pairs)
    }

    /// Drops the exact `key=value` pair, leaving other values of `key` alone.
    pub fn without_pair(&self, key: &str, value: &str) -> Self {
        Self(self.0.iter().filter(|(k, v)| !(k == key && v == value)).cloned().collect())
    }

    pub fn without_key(&self, key: &str) -> Self {
        Self(self.0.iter().filter(|(k, _)| k != key).cloned().collect())
    }
}

impl From<&str> for QueryParams {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish();
        write!(f, "{}", encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_appearance_order_and_duplicates() {
        let params = QueryParams::parse("?productVendor=Acme&available=true&productVendor=Zed");
        assert_eq!(
            params.pairs(),
            &[
                ("productVendor".to_string(), "Acme".to_string()),
                ("available".to_string(), "true".to_string()),
                ("productVendor".to_string(), "Zed".to_string()),
            ]
        );
        assert_eq!(params.get("productVendor"), Some("Acme"));
    }

    #[test]
    fn parse_decodes_percent_and_plus() {
        let params = QueryParams::parse("variantOption.Color=Color%3ADark+Red");
        assert_eq!(params.get("variantOption.Color"), Some("Color:Dark Red"));
    }

    #[test]
    fn empty_query_has_no_pairs() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
        assert_eq!(QueryParams::new().to_string(), "");
    }

    #[test]
    fn with_set_replaces_in_place() {
        let params = QueryParams::parse("sort=newest&available=true&sort=featured");
        let updated = params.with_set("sort", "price-low-high");
        assert_eq!(updated.to_string(), "sort=price-low-high&available=true");

        let appended = QueryParams::parse("available=true").with_set("sort", "newest");
        assert_eq!(appended.to_string(), "available=true&sort=newest");
    }

    #[test]
    fn without_pair_removes_only_matching_value() {
        let params = QueryParams::parse("productVendor=Acme&productVendor=Zed");
        let updated = params.without_pair("productVendor", "Acme");
        assert_eq!(updated.to_string(), "productVendor=Zed");
        assert!(params.without_key("productVendor").is_empty());
    }
}
