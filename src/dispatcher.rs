use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::client::DeliveryClient;
use crate::error::DispatchError;
use crate::store::SubscriptionStore;
use crate::types::{Correlation, DeliveryOutcome, DispatchResult};

#[cfg(feature = "metrics")]
fn metric_inc(name: &'static str) {
    metrics::counter!(name).increment(1);
}

#[cfg(not(feature = "metrics"))]
fn metric_inc(_name: &'static str) {}

#[cfg(feature = "tracing")]
fn trace_event(message: &'static str) {
    tracing::info!(message);
}

#[cfg(not(feature = "tracing"))]
fn trace_event(_message: &'static str) {}

#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Maximum delivery attempts in flight at once, across all dispatch calls.
    pub max_in_flight: usize,

    /// Maximum time allowed for a single delivery attempt.
    pub attempt_timeout: Duration,

    /// Default correlation parameter attached to every outbound call.
    pub correlation: Correlation,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            max_in_flight: 64,
            attempt_timeout: Duration::from_secs(10),
            correlation: Correlation::default(),
        }
    }
}

/// The dispatch engine: resolves the subscribers of an event and drives
/// concurrent delivery attempts.
///
/// Holds no per-call state; every `dispatch` invocation operates on a fresh
/// snapshot from the store and aggregates only after all of its attempts
/// have resolved.
pub struct Dispatcher {
    store: Arc<dyn SubscriptionStore>,
    client: DeliveryClient,
    semaphore: Arc<Semaphore>,
    correlation: Correlation,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn SubscriptionStore>, config: DispatcherConfig) -> Self {
        Self {
            store,
            client: DeliveryClient::new(config.attempt_timeout),
            semaphore: Arc::new(Semaphore::new(config.max_in_flight.max(1))),
            correlation: config.correlation,
        }
    }

    /// Notify every subscriber of `event` using the configured default
    /// correlation parameter.
    pub async fn dispatch(&self, event: &str) -> Result<DispatchResult, DispatchError> {
        self.dispatch_with(event, self.correlation.clone()).await
    }

    /// Notify every subscriber of `event`, attaching `correlation` to each
    /// outbound call.
    ///
    /// Fails only when no subscription matches `event`; in that case zero
    /// delivery attempts are made. Individual delivery failures are reported
    /// per-outcome and never fail the call.
    pub async fn dispatch_with(
        &self,
        event: &str,
        correlation: Correlation,
    ) -> Result<DispatchResult, DispatchError> {
        let subscriptions = self.store.list_by_event(event).await;
        if subscriptions.is_empty() {
            metric_inc("webhook.dispatch.no_subscribers");
            return Err(DispatchError::NoSubscribers {
                event: event.to_string(),
            });
        }

        let trigger_count = subscriptions.len();

        // Fan-out: every attempt is scheduled now. Permits bound how many run
        // at once; completion order does not matter because handles are
        // joined in resolution order below.
        let handles: Vec<(String, JoinHandle<DeliveryOutcome>)> = subscriptions
            .into_iter()
            .map(|sub| {
                let client = self.client.clone();
                let semaphore = self.semaphore.clone();
                let correlation = correlation.clone();
                let url = sub.url.clone();
                let handle = tokio::spawn(async move {
                    // The semaphore is never closed.
                    let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
                    client.attempt(&sub.url, &correlation).await
                });
                (url, handle)
            })
            .collect();

        // Fan-in barrier: wait for all attempts, collect by index.
        let mut outcomes = Vec::with_capacity(trigger_count);
        for (url, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                // A panicked attempt degrades to a per-subscriber error; it
                // must not fail the call or its siblings.
                Err(err) => DeliveryOutcome::transport_error(&url, err),
            };
            outcomes.push(outcome);
        }

        metric_inc("webhook.dispatch.completed");
        trace_event("webhook.dispatch.completed");

        Ok(DispatchResult {
            trigger_count,
            outcomes,
        })
    }
}
