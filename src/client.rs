use std::time::Duration;

use crate::types::{Correlation, DeliveryOutcome};

#[cfg(feature = "metrics")]
fn metric_inc(name: &'static str) {
    metrics::counter!(name).increment(1);
}

#[cfg(not(feature = "metrics"))]
fn metric_inc(_name: &'static str) {}

#[cfg(feature = "tracing")]
fn trace_attempt(url: &str, outcome: &'static str) {
    tracing::debug!(url, outcome, "delivery attempt finished");
}

#[cfg(not(feature = "tracing"))]
fn trace_attempt(_url: &str, _outcome: &'static str) {}

/// Single-attempt HTTP notification client.
///
/// Wraps one shared `reqwest::Client`: the underlying connection pool is
/// safe for concurrent use, so one `DeliveryClient` serves every attempt of
/// a dispatch call. Each attempt carries its own timeout deadline and shares
/// no mutable state with its siblings.
#[derive(Debug, Clone)]
pub struct DeliveryClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl DeliveryClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout,
        }
    }

    /// Perform exactly one notification attempt against `url`, with the
    /// correlation value attached as a query parameter.
    ///
    /// Every failure mode is converted into an error outcome; nothing
    /// propagates to the caller as a fault. No retries.
    pub async fn attempt(&self, url: &str, correlation: &Correlation) -> DeliveryOutcome {
        let request = self
            .http
            .get(url)
            .query(&[(correlation.param.as_str(), correlation.value.as_str())])
            .timeout(self.timeout);

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_client_error() || status.is_server_error() {
                    metric_inc("webhook.attempt.protocol_error");
                    trace_attempt(url, "protocol_error");
                    DeliveryOutcome::protocol_error(url, status.as_u16())
                } else {
                    metric_inc("webhook.attempt.success");
                    trace_attempt(url, "success");
                    DeliveryOutcome::success(url, status.as_u16())
                }
            }
            Err(err) => {
                metric_inc("webhook.attempt.transport_error");
                trace_attempt(url, "transport_error");
                DeliveryOutcome::transport_error(url, err)
            }
        }
    }
}
