//! Change Notification
//!
//! Fan-out of "the battle list views changed" signals to presentation
//! subscribers. The signal carries nothing; subscribers re-pull whatever
//! they render through the registry's read accessors.

use std::sync::Arc;

/// Handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// A presentation-side subscriber to battle list changes.
pub trait BattleListObserver: Send + Sync {
    /// The derived views went stale; re-pull them.
    fn battle_list_changed(&self);
}

/// Registration-ordered observer fan-out.
///
/// Observers are invoked synchronously, in the order they subscribed. There
/// is no hidden global list; each registry owns its notifier.
pub struct ChangeNotifier {
    observers: Vec<(ObserverId, Arc<dyn BattleListObserver>)>,
    next_id: u64,
}

impl ChangeNotifier {
    /// Notifier with no subscribers.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register `observer`; it is called after everyone registered earlier.
    pub fn subscribe(&mut self, observer: Arc<dyn BattleListObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Drop the subscription behind `id`. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Call every observer, in registration order.
    pub fn notify(&self) {
        for (_, observer) in &self.observers {
            observer.battle_list_changed();
        }
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
