//! Change notification for the persisted stores
//!
//! Each store emits a [`StoreChange`] after a successful mutation (collection
//! updated and persisted). Consumers subscribe a callback and recompute
//! derived views on demand; nothing here recomputes anything automatically.

use std::sync::RwLock;

/// Which store changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreChange {
    Categories,
    Transactions,
    Settings,
}

type Listener = Box<dyn Fn(StoreChange) + Send + Sync>;

/// Fan-out of store change signals to registered listeners
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: RwLock<Vec<Listener>>,
}

impl ChangeNotifier {
    /// Create a notifier with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener invoked on every emitted change
    pub fn subscribe(&self, listener: impl Fn(StoreChange) + Send + Sync + 'static) {
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.push(Box::new(listener));
        }
    }

    /// Notify all listeners of a change
    ///
    /// A poisoned lock silently drops the signal; change notification is
    /// best-effort and must not fail the mutation that triggered it.
    pub fn emit(&self, change: StoreChange) {
        if let Ok(listeners) = self.listeners.read() {
            for listener in listeners.iter() {
                listener(change);
            }
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.listeners.read().map(|l| l.len()).unwrap_or(0);
        f.debug_struct("ChangeNotifier")
            .field("listeners", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_subscribe_and_emit() {
        let notifier = ChangeNotifier::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        notifier.subscribe(move |change| {
            if change == StoreChange::Transactions {
                count_clone.fetch_add(1, Ordering::SeqCst);
            }
        });

        notifier.emit(StoreChange::Transactions);
        notifier.emit(StoreChange::Categories);
        notifier.emit(StoreChange::Transactions);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_emit_without_listeners_is_noop() {
        let notifier = ChangeNotifier::new();
        notifier.emit(StoreChange::Settings);
    }

    #[test]
    fn test_multiple_listeners() {
        let notifier = ChangeNotifier::new();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let count_clone = Arc::clone(&count);
            notifier.subscribe(move |_| {
                count_clone.fetch_add(1, Ordering::SeqCst);
            });
        }

        notifier.emit(StoreChange::Settings);
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
