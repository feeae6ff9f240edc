use std::fmt;

/// Errors returned when a dispatch call fails *before* delivery begins.
///
/// Per-subscriber transport and protocol failures never appear here; they
/// are absorbed into `DeliveryOutcome` entries of the aggregate result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No subscription matches the requested event.
    /// Maps to a not-found condition at the boundary.
    NoSubscribers { event: String },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NoSubscribers { event } => {
                write!(f, "no hooks registered for event: {event}")
            }
        }
    }
}

impl std::error::Error for DispatchError {}
