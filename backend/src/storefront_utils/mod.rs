//! Storefront API client, configuration and response cache.

pub mod storefront_config;
pub mod storefront_cache;
pub mod storefront_client;
pub mod fragments;
