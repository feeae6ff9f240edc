use serde::{Deserialize, Serialize};

/// A registered subscriber: one callback URL bound to one named event.
///
/// Subscriptions are pure data owned by the subscription store. The
/// dispatcher reads a snapshot at resolution time and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier for the subscription.
    pub id: u64,

    /// Human-readable label for the subscriber.
    pub name: String,

    /// Event name this subscriber listens for; the dispatch lookup key.
    pub event: String,

    /// Destination endpoint notified when the event fires.
    pub url: String,
}

impl Subscription {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        event: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            event: event.into(),
            url: url.into(),
        }
    }
}

/// Query parameter attached to every outbound notification so the subscriber
/// can associate the callback with its trigger context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correlation {
    pub param: String,
    pub value: String,
}

impl Correlation {
    pub fn new(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            value: value.into(),
        }
    }
}

impl Default for Correlation {
    fn default() -> Self {
        Self::new("order_id", "1")
    }
}

/// Classification of one delivery attempt.
///
/// `status_code` exists only where an HTTP response was actually received;
/// `detail` only where the attempt failed. Malformed combinations are
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Response received with a non-error status code.
    Success { status_code: u16 },

    /// Transport failure (no response) or a failing status code.
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
        detail: String,
    },
}

/// The per-subscriber result of one dispatch attempt.
///
/// Created once per subscriber per trigger and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    pub url: String,

    #[serde(flatten)]
    pub status: DeliveryStatus,
}

impl DeliveryOutcome {
    pub fn success(url: impl Into<String>, status_code: u16) -> Self {
        Self {
            url: url.into(),
            status: DeliveryStatus::Success { status_code },
        }
    }

    /// Network-level failure: connection refused, DNS failure, timeout.
    pub fn transport_error(url: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self {
            url: url.into(),
            status: DeliveryStatus::Error {
                status_code: None,
                detail: format!("Request failed: {cause}"),
            },
        }
    }

    /// Response received, but the status code indicates failure.
    pub fn protocol_error(url: impl Into<String>, status_code: u16) -> Self {
        Self {
            url: url.into(),
            status: DeliveryStatus::Error {
                status_code: Some(status_code),
                detail: format!("HTTP error: {status_code}"),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, DeliveryStatus::Success { .. })
    }
}

/// Aggregate result of one dispatch call.
///
/// `outcomes` holds exactly one entry per matched subscriber, in the order
/// the subscribers were resolved, independent of completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResult {
    /// Number of subscribers matched for the event.
    pub trigger_count: usize,

    /// One outcome per subscriber, in resolution order.
    pub outcomes: Vec<DeliveryOutcome>,
}

impl DispatchResult {
    /// Human-readable framing of the fan-out width, e.g. `"Trigger 3 hooks."`.
    pub fn summary(&self) -> String {
        format!("Trigger {} hooks.", self.trigger_count)
    }
}
