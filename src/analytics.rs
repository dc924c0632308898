//! Usage analytics.
//!
//! The engines never report anything; the CLI records events through this
//! capability after presenting a result. Delivery is fire-and-forget: a
//! failed post is logged at debug and dropped, never retried.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::AppConfig;

/// Event reporting capability, injected into the presentation layer.
#[async_trait]
pub trait Analytics: Send + Sync {
    async fn record(&self, event: &str, params: Value);
}

/// Selected when analytics is disabled or unconfigured.
pub struct NoopAnalytics;

#[async_trait]
impl Analytics for NoopAnalytics {
    async fn record(&self, _event: &str, _params: Value) {}
}

#[derive(Serialize)]
struct Payload<'a> {
    client_id: &'a str,
    events: [Event<'a>; 1],
}

#[derive(Serialize)]
struct Event<'a> {
    name: &'a str,
    params: Value,
}

/// Posts events to the measurement endpoint.
pub struct HttpAnalytics {
    http: Arc<Client>,
    endpoint: String,
    client_id: String,
}

impl HttpAnalytics {
    pub fn new(measurement_id: &str, api_secret: &str) -> Self {
        let endpoint = format!(
            "https://www.google-analytics.com/mp/collect?measurement_id={measurement_id}&api_secret={api_secret}"
        );
        Self {
            http: Arc::new(Client::new()),
            endpoint,
            // Anonymous per-run id; the endpoint only needs it to be stable
            // within a session.
            client_id: format!("{:016x}", rand::random::<u64>()),
        }
    }
}

#[async_trait]
impl Analytics for HttpAnalytics {
    async fn record(&self, event: &str, params: Value) {
        let payload = Payload {
            client_id: &self.client_id,
            events: [Event { name: event, params }],
        };

        let result = self
            .http
            .post(&self.endpoint)
            .timeout(Duration::from_secs(5))
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(resp) if !resp.status().is_success() => {
                debug!(status = %resp.status(), event, "analytics endpoint rejected event");
            }
            Ok(_) => {}
            Err(err) => {
                debug!(%err, event, "failed to deliver analytics event");
            }
        }
    }
}

/// Picks the analytics sink for this run.
pub fn from_config(config: &AppConfig) -> Box<dyn Analytics> {
    match (&config.analytics_id, &config.analytics_secret) {
        (Some(id), Some(secret)) if config.enable_analytics => {
            Box::new(HttpAnalytics::new(id, secret))
        }
        _ => Box::new(NoopAnalytics),
    }
}

pub async fn track_calculator_usage(analytics: &dyn Analytics, calculator: &str) {
    analytics
        .record(
            "calculator_used",
            json!({
                "calculator_type": calculator,
                "timestamp": Utc::now().to_rfc3339(),
            }),
        )
        .await;
}

pub async fn track_download(analytics: &dyn Analytics, calculator: &str, file_name: &str) {
    analytics
        .record(
            "result_downloaded",
            json!({
                "calculator_type": calculator,
                "file_name": file_name,
                "timestamp": Utc::now().to_rfc3339(),
            }),
        )
        .await;
}

pub async fn track_social_share(analytics: &dyn Analytics, platform: &str, calculator: &str) {
    analytics
        .record(
            "social_share",
            json!({
                "platform": platform,
                "calculator_type": calculator,
                "timestamp": Utc::now().to_rfc3339(),
            }),
        )
        .await;
}
