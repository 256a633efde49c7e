//! In-process cache of Storefront API responses, keyed by query hash.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// How a query may be served from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Reuse a response younger than the configured TTL.
    Short,
    /// Always hit the storefront (carts, mutations).
    None,
}

struct CachedResponse {
    query_string: String,
    result_json: String,
    date_created: Instant,
}

fn cache() -> &'static Mutex<HashMap<String, CachedResponse>> {
    static CACHE: OnceLock<Mutex<HashMap<String, CachedResponse>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

pub fn query_hash(query_string: &str) -> String {
    sha256::digest(query_string)
}

pub async fn get_cached_response(query_hash: &str, query_string: &str, ttl: Duration) -> anyhow::Result<String> {
    let cache = cache().lock().await;
    match cache.get(query_hash) {
        Some(cached) if cached.query_string == query_string && cached.date_created.elapsed() < ttl => {
            Ok(cached.result_json.clone())
        }
        _ => anyhow::bail!("Cache miss"),
    }
}

pub async fn insert_cache(query_hash: &str, query_string: &str, result_json: &str, ttl: Duration) {
    let mut cache = cache().lock().await;
    cache.retain(|_, cached| cached.date_created.elapsed() < ttl);
    cache.insert(
        query_hash.to_string(),
        CachedResponse {
            query_string: query_string.to_string(),
            result_json: result_json.to_string(),
            date_created: Instant::now(),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn inserted_response_is_served_until_it_expires() {
        let query = "query cacheTestServed { shop { name } }";
        let hash = query_hash(query);
        insert_cache(&hash, query, r#"{"shop":{"name":"Snowdevil"}}"#, Duration::from_secs(60)).await;

        let hit = get_cached_response(&hash, query, Duration::from_secs(60)).await.unwrap();
        assert_eq!(hit, r#"{"shop":{"name":"Snowdevil"}}"#);

        assert!(get_cached_response(&hash, query, Duration::ZERO).await.is_err());
    }

    #[tokio::test]
    async fn hash_collision_with_different_query_misses() {
        let query = "query cacheTestCollision { shop { name } }";
        let hash = query_hash(query);
        insert_cache(&hash, query, "{}", Duration::from_secs(60)).await;
        assert!(get_cached_response(&hash, "another query", Duration::from_secs(60)).await.is_err());
    }

    #[test]
    fn hash_is_stable() {
        assert_eq!(query_hash("a"), query_hash("a"));
        assert_ne!(query_hash("a"), query_hash("b"));
    }
}
