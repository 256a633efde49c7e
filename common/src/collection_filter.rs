//! Translation of collection page query parameters into storefront filters.

use serde::{Deserialize, Serialize};

use crate::query_params::QueryParams;
use crate::storefront_const::{
    AVAILABLE_FILTER_KEY, KNOWN_FILTER_KEYS, MAX_PRICE_KEY, MIN_PRICE_KEY, SORT_KEY,
    VARIANT_OPTION_FILTER_PREFIX,
};

/// One entry of the `filters` variable of a collection products query.
///
/// Serialized as a single-key object, e.g. `{"available": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductFilter {
    Available(bool),
    ProductVendor(String),
    ProductType(String),
    VariantOption(VariantOptionFilter),
    Price(PriceRangeFilter),
}

impl ProductFilter {
    fn known(key: &str, value: &str) -> Option<Self> {
        match key {
            "productVendor" => Some(Self::ProductVendor(value.to_string())),
            "productType" => Some(Self::ProductType(value.to_string())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOptionFilter {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceRangeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParamPair {
    pub key: String,
    pub value: String,
}

/// Human readable echo of an active filter, with the URL parameter that
/// produced it so the filter can be removed again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilter {
    pub label: String,
    pub url_param: UrlParamPair,
}

impl AppliedFilter {
    fn new(label: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url_param: UrlParamPair { key: key.into(), value: value.into() },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCollectionSortKey {
    #[default]
    Relevance,
    Price,
    BestSelling,
    Created,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub sort_key: ProductCollectionSortKey,
    pub reverse: bool,
}

/// Sort tokens offered by the sort menu, with their labels.
pub const SORT_OPTIONS: [(&str, &str); 5] = [
    ("featured", "Featured"),
    ("price-low-high", "Price: Low - High"),
    ("price-high-low", "Price: High - Low"),
    ("best-selling", "Best Selling"),
    ("newest", "Newest"),
];

impl SortSpec {
    pub const fn new(sort_key: ProductCollectionSortKey, reverse: bool) -> Self {
        Self { sort_key, reverse }
    }

    /// Never fails: unknown or missing tokens sort by relevance.
    pub fn from_param(token: Option<&str>) -> Self {
        use ProductCollectionSortKey::*;
        match token {
            Some("price-high-low") => Self::new(Price, true),
            Some("price-low-high") => Self::new(Price, false),
            Some("best-selling") => Self::new(BestSelling, false),
            Some("newest") => Self::new(Created, true),
            Some("featured") => Self::new(Manual, false),
            _ => Self::default(),
        }
    }

    /// Token that produces this sort, `None` for the relevance default.
    pub fn to_param(&self) -> Option<&'static str> {
        use ProductCollectionSortKey::*;
        match (self.sort_key, self.reverse) {
            (Price, true) => Some("price-high-low"),
            (Price, false) => Some("price-low-high"),
            (BestSelling, false) => Some("best-selling"),
            (Created, true) => Some("newest"),
            (Manual, false) => Some("featured"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CollectionFilters {
    pub filters: Vec<ProductFilter>,
    pub applied_filters: Vec<AppliedFilter>,
    pub sort: SortSpec,
}

/// Builds the storefront filter list, the applied filter list and the sort
/// from a collection page's query parameters. Unrecognized keys are dropped.
pub fn translate_collection_params(params: &QueryParams) -> CollectionFilters {
    let mut filters = Vec::new();
    let mut applied_filters = Vec::new();

    for (key, value) in params.pairs() {
        if key == AVAILABLE_FILTER_KEY {
            let available = value == "true";
            filters.push(ProductFilter::Available(available));
            let label = if available { "In stock" } else { "Out of stock" };
            applied_filters.push(AppliedFilter::new(label, AVAILABLE_FILTER_KEY, value.as_str()));
        } else if KNOWN_FILTER_KEYS.contains(&key.as_str()) {
            if let Some(filter) = ProductFilter::known(key, value) {
                filters.push(filter);
                applied_filters.push(AppliedFilter::new(value.as_str(), key.as_str(), value.as_str()));
            }
        } else if key.starts_with(VARIANT_OPTION_FILTER_PREFIX) {
            let (name, option_value) = value.split_once(':').unwrap_or((value.as_str(), ""));
            filters.push(ProductFilter::VariantOption(VariantOptionFilter {
                name: name.to_string(),
                value: option_value.to_string(),
            }));
            applied_filters.push(AppliedFilter::new(option_value, key.as_str(), value.as_str()));
        }
    }

    // min and max cannot be sent as two separate price filters, so both
    // bounds go into a single entry
    let min_price = params.get(MIN_PRICE_KEY);
    let max_price = params.get(MAX_PRICE_KEY);
    if min_price.is_some() || max_price.is_some() {
        let mut price = PriceRangeFilter::default();
        if let Some(raw) = min_price {
            let min = coerce_price(raw);
            price.min = Some(min);
            applied_filters.push(AppliedFilter::new(format!("Min: ${}", js_number(min)), MIN_PRICE_KEY, raw));
        }
        if let Some(raw) = max_price {
            let max = coerce_price(raw);
            price.max = Some(max);
            applied_filters.push(AppliedFilter::new(format!("Max: ${}", js_number(max)), MAX_PRICE_KEY, raw));
        }
        filters.push(ProductFilter::Price(price));
    }

    CollectionFilters {
        filters,
        applied_filters,
        sort: SortSpec::from_param(params.get(SORT_KEY)),
    }
}

/// URL parameters that select a storefront filter value, given the value's
/// JSON `input`. Empty when the input is not a filter this page understands.
pub fn filter_input_to_url_params(input: &str) -> Vec<(String, String)> {
    let Ok(filter) = serde_json::from_str::<ProductFilter>(input) else {
        return Vec::new();
    };
    match filter {
        ProductFilter::Available(available) => vec![(AVAILABLE_FILTER_KEY.to_string(), available.to_string())],
        ProductFilter::ProductVendor(vendor) => vec![("productVendor".to_string(), vendor)],
        ProductFilter::ProductType(product_type) => vec![("productType".to_string(), product_type)],
        ProductFilter::VariantOption(option) => vec![(
            format!("{}.{}", VARIANT_OPTION_FILTER_PREFIX, option.name),
            format!("{}:{}", option.name, option.value),
        )],
        ProductFilter::Price(price) => {
            let mut params = Vec::new();
            if let Some(min) = price.min {
                params.push((MIN_PRICE_KEY.to_string(), js_number(min)));
            }
            if let Some(max) = price.max {
                params.push((MAX_PRICE_KEY.to_string(), js_number(max)));
            }
            params
        }
    }
}

/// Reads a price the way a browser reads a numeric string: decimal or
/// exponent notation, or an unsigned `0x`/`0o`/`0b` integer. Non-numeric,
/// empty and non-finite values become `0`, since the filter is sent as JSON.
fn coerce_price(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let radix_prefixed = [("0x", 16), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| {
            let head = trimmed.get(..2)?;
            head.eq_ignore_ascii_case(prefix).then(|| (&trimmed[2..], radix))
        });
    let parsed = match radix_prefixed {
        Some((digits, _)) if digits.starts_with('+') => None,
        Some((digits, radix)) => u128::from_str_radix(digits, radix).ok().map(|v| v as f64),
        // f64 parsing also takes "inf" and "nan", which a price never is
        None if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => None,
        None => trimmed.parse::<f64>().ok(),
    };
    match parsed {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}

/// Formats a number the way JavaScript's `String(number)` does: plain decimals
/// between 1e-6 and 1e21, exponent notation with an explicit sign outside.
fn js_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn translate(query: &str) -> CollectionFilters {
        translate_collection_params(&QueryParams::parse(query))
    }

    #[test]
    fn available_true_is_in_stock() {
        let result = translate("available=true");
        assert_eq!(result.filters, vec![ProductFilter::Available(true)]);
        assert_eq!(result.applied_filters[0].label, "In stock");
        assert_eq!(result.applied_filters[0].url_param.value, "true");
    }

    #[test]
    fn any_other_available_value_is_out_of_stock() {
        for query in ["available=false", "available=TRUE", "available=", "available=1"] {
            let result = translate(query);
            assert_eq!(result.filters, vec![ProductFilter::Available(false)], "{query}");
            assert_eq!(result.applied_filters[0].label, "Out of stock", "{query}");
        }
    }

    #[test]
    fn known_filters_are_forwarded_verbatim() {
        let result = translate("productVendor=Snowdevil&productType=Snowboard");
        assert_eq!(
            result.filters,
            vec![
                ProductFilter::ProductVendor("Snowdevil".to_string()),
                ProductFilter::ProductType("Snowboard".to_string()),
            ]
        );
        assert_eq!(result.applied_filters[0].label, "Snowdevil");
        assert_eq!(result.applied_filters[1].url_param.key, "productType");
    }

    #[test]
    fn variant_option_splits_on_first_colon() {
        let result = translate("variantOption.Color=Color%3ARed");
        assert_eq!(
            result.filters,
            vec![ProductFilter::VariantOption(VariantOptionFilter {
                name: "Color".to_string(),
                value: "Red".to_string(),
            })]
        );
        assert_eq!(result.applied_filters[0].label, "Red");
        assert_eq!(result.applied_filters[0].url_param.value, "Color:Red");

        let result = translate("variantOption.Size=Size%3A10%3A12");
        assert_eq!(
            result.filters,
            vec![ProductFilter::VariantOption(VariantOptionFilter {
                name: "Size".to_string(),
                value: "10:12".to_string(),
            })]
        );
    }

    #[test]
    fn variant_option_without_colon_has_empty_value() {
        let result = translate("variantOption=Red");
        assert_eq!(
            result.filters,
            vec![ProductFilter::VariantOption(VariantOptionFilter {
                name: "Red".to_string(),
                value: String::new(),
            })]
        );
        assert_eq!(result.applied_filters[0].label, "");
    }

    #[test]
    fn price_bounds_make_one_filter_and_two_labels() {
        let result = translate("minPrice=10&maxPrice=50");
        assert_eq!(
            result.filters,
            vec![ProductFilter::Price(PriceRangeFilter { min: Some(10.0), max: Some(50.0) })]
        );
        assert_eq!(result.applied_filters.len(), 2);
        assert_eq!(result.applied_filters[0].label, "Min: $10");
        assert_eq!(result.applied_filters[1].label, "Max: $50");
        assert_eq!(serde_json::to_value(&result.filters).unwrap(), json!([{"price": {"min": 10.0, "max": 50.0}}]));
    }

    #[test]
    fn non_numeric_price_defaults_to_zero() {
        let result = translate("minPrice=abc");
        assert_eq!(
            result.filters,
            vec![ProductFilter::Price(PriceRangeFilter { min: Some(0.0), max: None })]
        );
        assert_eq!(result.applied_filters[0].label, "Min: $0");
        assert_eq!(result.applied_filters[0].url_param.value, "abc");
        assert_eq!(serde_json::to_value(&result.filters).unwrap(), json!([{"price": {"min": 0.0}}]));
    }

    #[test]
    fn fractional_price_keeps_decimals() {
        let result = translate("maxPrice=12.5");
        assert_eq!(result.applied_filters[0].label, "Max: $12.5");
    }

    #[test]
    fn prefixed_integer_prices_are_numeric() {
        let result = translate("minPrice=0x10&maxPrice=0b11");
        assert_eq!(
            result.filters,
            vec![ProductFilter::Price(PriceRangeFilter { min: Some(16.0), max: Some(3.0) })]
        );
        assert_eq!(result.applied_filters[0].label, "Min: $16");
        assert_eq!(result.applied_filters[1].label, "Max: $3");
        assert_eq!(result.applied_filters[0].url_param.value, "0x10");
    }

    #[test]
    fn huge_and_tiny_prices_use_exponent_labels() {
        let result = translate("minPrice=1e21&maxPrice=0.0000005");
        assert_eq!(
            result.filters,
            vec![ProductFilter::Price(PriceRangeFilter { min: Some(1e21), max: Some(5e-7) })]
        );
        assert_eq!(result.applied_filters[0].label, "Min: $1e+21");
        assert_eq!(result.applied_filters[1].label, "Max: $5e-7");
        assert_eq!(translate("minPrice=1e3").applied_filters[0].label, "Min: $1000");
    }

    #[test]
    fn infinity_and_nan_prices_default_to_zero() {
        for raw in ["Infinity", "-inf", "NaN", "1e999", "0x", "-0x10"] {
            let result = translate(&format!("minPrice={raw}"));
            assert_eq!(
                result.filters,
                vec![ProductFilter::Price(PriceRangeFilter { min: Some(0.0), max: None })],
                "{raw}"
            );
            assert_eq!(result.applied_filters[0].label, "Min: $0", "{raw}");
        }
    }

    #[test]
    fn price_filter_comes_after_per_parameter_filters() {
        let result = translate("minPrice=5&available=true&productVendor=Acme");
        assert_eq!(result.filters.len(), 3);
        assert_eq!(result.filters[0], ProductFilter::Available(true));
        assert!(matches!(result.filters[2], ProductFilter::Price(_)));
        let labels: Vec<_> = result.applied_filters.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["In stock", "Acme", "Min: $5"]);
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let result = translate("foo=bar&cursor=abc&direction=next&sort=newest");
        assert!(result.filters.is_empty());
        assert!(result.applied_filters.is_empty());
    }

    #[test]
    fn filters_serialize_as_single_key_objects() {
        let result = translate("available=true&productVendor=Acme&variantOption.Color=Color%3ARed");
        assert_eq!(
            serde_json::to_value(&result.filters).unwrap(),
            json!([
                {"available": true},
                {"productVendor": "Acme"},
                {"variantOption": {"name": "Color", "value": "Red"}},
            ])
        );
        assert_eq!(
            serde_json::to_value(&result.applied_filters[0]).unwrap(),
            json!({"label": "In stock", "urlParam": {"key": "available", "value": "true"}})
        );
    }

    #[test]
    fn sort_tokens() {
        use ProductCollectionSortKey::*;
        assert_eq!(SortSpec::from_param(Some("price-high-low")), SortSpec::new(Price, true));
        assert_eq!(SortSpec::from_param(Some("price-low-high")), SortSpec::new(Price, false));
        assert_eq!(SortSpec::from_param(Some("best-selling")), SortSpec::new(BestSelling, false));
        assert_eq!(SortSpec::from_param(Some("newest")), SortSpec::new(Created, true));
        assert_eq!(SortSpec::from_param(Some("featured")), SortSpec::new(Manual, false));
        assert_eq!(SortSpec::from_param(Some("bogus")), SortSpec::new(Relevance, false));
        assert_eq!(SortSpec::from_param(None), SortSpec::new(Relevance, false));
        assert_eq!(
            serde_json::to_value(SortSpec::from_param(Some("price-high-low"))).unwrap(),
            json!({"sortKey": "PRICE", "reverse": true})
        );
    }

    #[test]
    fn filter_inputs_map_back_to_url_params() {
        assert_eq!(
            filter_input_to_url_params(r#"{"available":true}"#),
            vec![("available".to_string(), "true".to_string())]
        );
        assert_eq!(
            filter_input_to_url_params(r#"{"variantOption":{"name":"Color","value":"Red"}}"#),
            vec![("variantOption.Color".to_string(), "Color:Red".to_string())]
        );
        assert_eq!(
            filter_input_to_url_params(r#"{"price":{"min":0,"max":50.5}}"#),
            vec![("minPrice".to_string(), "0".to_string()), ("maxPrice".to_string(), "50.5".to_string())]
        );
        assert!(filter_input_to_url_params(r#"{"productMetafield":{"namespace":"x"}}"#).is_empty());
        assert!(filter_input_to_url_params("{bad").is_empty());
    }

    #[test]
    fn variant_option_url_params_translate_back_to_the_same_filter() {
        let params = filter_input_to_url_params(r#"{"variantOption":{"name":"Size","value":"154cm"}}"#);
        let result = translate_collection_params(&QueryParams(params));
        assert_eq!(
            result.filters,
            vec![ProductFilter::VariantOption(VariantOptionFilter {
                name: "Size".to_string(),
                value: "154cm".to_string(),
            })]
        );
    }

    #[test]
    fn sort_options_round_trip_through_tokens() {
        for (token, _label) in SORT_OPTIONS {
            assert_eq!(SortSpec::from_param(Some(token)).to_param(), Some(token));
        }
        assert_eq!(SortSpec::default().to_param(), None);
    }
}
