//! Change notifications for list and record models.
//!
//! Each model owns a [`Notifier`]; views register a listener with
//! [`Notifier::subscribe`] and are called synchronously on every emitted
//! [`ModelEvent`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

/// A change published by a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    /// Rows `first..=last` changed value; the row count is unchanged.
    DataChanged { first: usize, last: usize },
    /// The row count (or the whole layout) changed; views must refresh fully.
    LayoutChanged,
}

impl ModelEvent {
    /// Positional change of a single row.
    pub fn row(row: usize) -> Self {
        ModelEvent::DataChanged {
            first: row,
            last: row,
        }
    }
}

/// Handle returned by [`Notifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&ModelEvent)>;

/// Listener registry.
///
/// [`Notifier::emit`] calls the listeners registered when it started. A
/// listener may subscribe or unsubscribe while it runs; the change applies
/// from the next emit.
#[derive(Default)]
pub struct Notifier {
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&ModelEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn emit(&self, event: ModelEvent) {
        debug!(?event, "model event");
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Test helper: collect every event emitted by `notifier`.
#[cfg(test)]
pub(crate) fn record_events(notifier: &Notifier) -> Rc<RefCell<Vec<ModelEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    notifier.subscribe(move |event| sink.borrow_mut().push(*event));
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_all_listeners() {
        let notifier = Notifier::new();
        let first = record_events(&notifier);
        let second = record_events(&notifier);

        notifier.emit(ModelEvent::LayoutChanged);

        assert_eq!(*first.borrow(), vec![ModelEvent::LayoutChanged]);
        assert_eq!(*second.borrow(), vec![ModelEvent::LayoutChanged]);
    }

    #[test]
    fn test_unsubscribe() {
        let notifier = Notifier::new();
        let events = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&events);
        let id = notifier.subscribe(move |_| *sink.borrow_mut() += 1);

        notifier.emit(ModelEvent::row(0));
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.emit(ModelEvent::row(0));

        assert_eq!(*events.borrow(), 1);
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_resubscribe_during_emit() {
        let notifier = Rc::new(Notifier::new());
        let calls = Rc::new(Cell::new(0));
        let own_id = Rc::new(Cell::new(None));

        // A view that swaps itself for a fresh listener on its first event
        let weak = Rc::downgrade(&notifier);
        let (counter, id_slot) = (Rc::clone(&calls), Rc::clone(&own_id));
        let id = notifier.subscribe(move |_| {
            counter.set(counter.get() + 1);
            let Some(notifier) = weak.upgrade() else {
                return;
            };
            if let Some(id) = id_slot.take() {
                notifier.unsubscribe(id);
            }
            let counter = Rc::clone(&counter);
            notifier.subscribe(move |_| counter.set(counter.get() + 10));
        });
        own_id.set(Some(id));

        notifier.emit(ModelEvent::LayoutChanged);
        assert_eq!(calls.get(), 1);
        assert_eq!(notifier.listener_count(), 1);

        notifier.emit(ModelEvent::row(0));
        assert_eq!(calls.get(), 11);
    }

    #[test]
    fn test_row_event() {
        assert_eq!(
            ModelEvent::row(3),
            ModelEvent::DataChanged { first: 3, last: 3 }
        );
    }
}
