//! GraphQL access to the Storefront API.

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::storefront_utils::storefront_cache::{CachePolicy, get_cached_response, insert_cache, query_hash};
use crate::storefront_utils::storefront_config::get_storefront_config;

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// `data` of a GraphQL response; any reported error fails the whole query.
pub fn parse_graphql_response<T: DeserializeOwned>(response_txt: &str) -> anyhow::Result<T> {
    let response: GraphqlResponse<T> =
        serde_json::from_str(response_txt).context("Failed to parse storefront response")?;
    if !response.errors.is_empty() {
        let messages = response.errors.into_iter().map(|e| e.message).collect::<Vec<_>>();
        anyhow::bail!("Storefront query failed: {}", messages.join("; "));
    }
    response.data.context("Storefront response has no data")
}

pub async fn storefront_query<T: DeserializeOwned>(query: &str, variables: Value, cache: CachePolicy) -> anyhow::Result<T> {
    let config = get_storefront_config();
    let body = serde_json::json!({ "query": query, "variables": variables }).to_string();
    let hash = query_hash(&body);

    if cache == CachePolicy::Short {
        if let Ok(cached_response) = get_cached_response(&hash, &body, config.cache_ttl).await {
            if let Ok(response) = parse_graphql_response::<T>(&cached_response) {
                debug!("STOREFRONT CACHE HIT: {}", hash);
                return Ok(response);
            }
        }
        debug!("STOREFRONT CACHE MISS: {}", hash);
    }

    let t0 = std::time::Instant::now();
    let client = reqwest::Client::new();
    let response = client
        .post(config.graphql_url())
        .header("Content-Type", "application/json")
        .header("X-Shopify-Storefront-Access-Token", &config.storefront_api_token)
        .body(body.clone())
        .send()
        .await
        .context("Failed to reach the storefront")?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        warn!("storefront responded {}: {} bytes", status, response_txt.len());
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let dt_ms = t0.elapsed().as_millis();
    info!("STOREFRONT RESPONSE: len = {} ({}ms)", response_txt.len(), dt_ms);

    let result = parse_graphql_response::<T>(&response_txt)?;
    if cache == CachePolicy::Short {
        insert_cache(&hash, &body, &response_txt, config.cache_ttl).await;
    }
    Ok(result)
}

/// Mutations are never cached.
pub async fn storefront_mutate<T: DeserializeOwned>(mutation: &str, variables: Value) -> anyhow::Result<T> {
    storefront_query(mutation, variables, CachePolicy::None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct ShopData {
        shop: Shop,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Shop {
        name: String,
    }

    #[test]
    fn parses_data() {
        let data: ShopData = parse_graphql_response(r#"{"data":{"shop":{"name":"Snowdevil"}}}"#).unwrap();
        assert_eq!(data.shop.name, "Snowdevil");
    }

    #[test]
    fn errors_fail_the_query() {
        let err = parse_graphql_response::<ShopData>(
            r#"{"data":null,"errors":[{"message":"Field 'nope' doesn't exist"},{"message":"second"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Field 'nope' doesn't exist; second"));
    }

    #[test]
    fn missing_data_is_an_error() {
        assert!(parse_graphql_response::<ShopData>("{}").is_err());
        assert!(parse_graphql_response::<ShopData>("not json").is_err());
    }
}
