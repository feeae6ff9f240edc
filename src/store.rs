use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::types::Subscription;

/// Keyed registry of subscriptions.
///
/// `list_by_event` must return a stable order for a given store state; the
/// dispatcher's outcome ordering is defined in terms of it.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Add a subscription, replacing any existing one with the same id.
    async fn insert(&self, sub: Subscription);

    async fn get(&self, id: u64) -> Option<Subscription>;

    /// All subscriptions in insertion order.
    async fn list(&self) -> Vec<Subscription>;

    /// All subscriptions registered for `event`, in insertion order.
    async fn list_by_event(&self, event: &str) -> Vec<Subscription>;

    /// Remove a subscription; returns whether it existed.
    async fn remove(&self, id: u64) -> bool;
}

/// In-memory store for lightweight deployments.
#[derive(Default)]
pub struct InMemoryStore {
    subs: Mutex<Vec<Subscription>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionStore for InMemoryStore {
    async fn insert(&self, sub: Subscription) {
        let mut subs = self.subs.lock().await;
        match subs.iter_mut().find(|s| s.id == sub.id) {
            Some(existing) => *existing = sub,
            None => subs.push(sub),
        }
    }

    async fn get(&self, id: u64) -> Option<Subscription> {
        let subs = self.subs.lock().await;
        subs.iter().find(|s| s.id == id).cloned()
    }

    async fn list(&self) -> Vec<Subscription> {
        self.subs.lock().await.clone()
    }

    async fn list_by_event(&self, event: &str) -> Vec<Subscription> {
        let subs = self.subs.lock().await;
        subs.iter().filter(|s| s.event == event).cloned().collect()
    }

    async fn remove(&self, id: u64) -> bool {
        let mut subs = self.subs.lock().await;
        let before = subs.len();
        subs.retain(|s| s.id != id);
        subs.len() != before
    }
}
