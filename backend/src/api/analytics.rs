//! Fire-and-forget delivery of storefront analytics events.

use anyhow::Context;
use common::analytics::AnalyticsEvent;
use tracing::{info, warn};

use crate::storefront_utils::storefront_config::get_storefront_config;

/// Logs the event and forwards it to `ANALYTICS_ENDPOINT` when configured.
pub async fn send_analytics_event(event: AnalyticsEvent) -> anyhow::Result<()> {
    info!(
        "analytics event {:?}: pageType={:?} keys={}",
        event.event_name,
        event.payload.get("pageType"),
        event.payload.len()
    );
    let Some(endpoint) = get_storefront_config().analytics_endpoint.as_ref() else {
        return Ok(());
    };

    let response = reqwest::Client::new()
        .post(endpoint)
        .json(&event)
        .send()
        .await
        .context("Failed to reach the analytics endpoint")?;
    let status = response.status();
    if !status.is_success() {
        warn!("analytics endpoint responded {}", status);
        anyhow::bail!("Analytics endpoint responded {}", status);
    }
    Ok(())
}
