//! Storefront settings read from the environment.

use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub store_domain: String,
    pub storefront_api_token: String,
    pub storefront_api_version: String,
    /// Shop gid reported with every analytics event.
    pub shop_id: String,
    pub cache_ttl: Duration,
    pub analytics_endpoint: Option<String>,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(default.to_string())
        };
        let cache_ttl_secs = lookup("STOREFRONT_CACHE_TTL_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(60);
        Self {
            store_domain: var("PUBLIC_STORE_DOMAIN", "hydrogen-preview.myshopify.com"),
            storefront_api_token: var("PUBLIC_STOREFRONT_API_TOKEN", "3b580e70970c4528da70c98e097c2fa0"),
            storefront_api_version: var("PUBLIC_STOREFRONT_API_VERSION", "2023-04"),
            shop_id: var("PUBLIC_STOREFRONT_ID", "gid://shopify/Shop/1"),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            analytics_endpoint: lookup("ANALYTICS_ENDPOINT").filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn graphql_url(&self) -> String {
        let domain = self
            .store_domain
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        format!("https://{}/api/{}/graphql.json", domain, self.storefront_api_version)
    }
}

pub fn get_storefront_config() -> &'static StorefrontConfig {
    static CONFIG: OnceLock<StorefrontConfig> = OnceLock::new();
    CONFIG.get_or_init(StorefrontConfig::from_env)
}
