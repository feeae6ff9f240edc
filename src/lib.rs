//! A single-process webhook registry and fan-out dispatcher.
//!
//! Clients register callback URLs against named events. Triggering an event
//! notifies every registered subscriber **concurrently** and returns one
//! ordered delivery outcome per subscriber.
//!
//! ## Guarantees
//! - Bounded concurrent fan-out
//! - Per-subscriber isolation: one slow or failing endpoint never blocks,
//!   cancels, or corrupts its siblings
//! - Outcome order matches subscriber resolution order
//! - Transport and protocol failures are reported as data, never as a
//!   call-level fault
//!
//! ## Non-Guarantees
//! - Durability across restarts
//! - Retries or exactly-once delivery
//! - Distributed coordination
//!
//! Delivery is one best-effort attempt per subscriber per trigger, and the
//! aggregate result is reported synchronously to the triggering caller.

mod client;
mod dispatcher;
mod error;
mod store;
mod types;

pub use client::DeliveryClient;
pub use dispatcher::{Dispatcher, DispatcherConfig};
pub use error::DispatchError;
pub use store::{InMemoryStore, SubscriptionStore};
pub use types::{Correlation, DeliveryOutcome, DeliveryStatus, DispatchResult, Subscription};
