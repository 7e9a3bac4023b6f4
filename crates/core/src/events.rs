//! Typed in-process pub/sub channel for session signals
//!
//! Listeners register with an explicit lifetime: dropping the returned
//! [`Subscription`] unregisters them, so a component that subscribes on
//! mount and drops the guard on unmount cannot leak a handler.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Signals broadcast between session components in the same tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A refresh exchange produced a new access token.
    TokenRenewed(String),
    /// The session was cleared.
    LoggedOut,
}

type Listener = Rc<dyn Fn(&SessionEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: HashMap<u64, Listener>,
}

/// Shared event channel. Cloning shares the underlying registry.
#[derive(Clone, Default)]
pub struct SessionEvents {
    registry: Rc<RefCell<Registry>>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays active until the guard is dropped.
    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Rc::new(listener));
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Deliver an event to every current listener.
    pub fn emit(&self, event: &SessionEvent) {
        // Snapshot the listeners first so one of them may subscribe or
        // drop a guard without hitting a borrow conflict.
        let listeners: Vec<Listener> = self.registry.borrow().listeners.values().cloned().collect();
        for listener in listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Guard for a registered listener; unsubscribes on drop.
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_to_all_listeners() {
        let events = SessionEvents::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _a = {
            let seen = seen.clone();
            events.subscribe(move |event| seen.borrow_mut().push(("a", event.clone())))
        };
        let _b = {
            let seen = seen.clone();
            events.subscribe(move |event| seen.borrow_mut().push(("b", event.clone())))
        };

        events.emit(&SessionEvent::LoggedOut);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn dropping_the_guard_unsubscribes() {
        let events = SessionEvents::new();
        let seen = Rc::new(RefCell::new(0u32));

        let guard = {
            let seen = seen.clone();
            events.subscribe(move |_| *seen.borrow_mut() += 1)
        };
        events.emit(&SessionEvent::LoggedOut);
        drop(guard);
        events.emit(&SessionEvent::LoggedOut);

        assert_eq!(*seen.borrow(), 1);
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn renewed_event_carries_the_token() {
        let events = SessionEvents::new();
        let token = Rc::new(RefCell::new(None));

        let _guard = {
            let token = token.clone();
            events.subscribe(move |event| {
                if let SessionEvent::TokenRenewed(value) = event {
                    *token.borrow_mut() = Some(value.clone());
                }
            })
        };
        events.emit(&SessionEvent::TokenRenewed("t2".to_string()));
        assert_eq!(token.borrow().as_deref(), Some("t2"));
    }

    #[test]
    fn listener_may_drop_another_guard_during_emit() {
        let events = SessionEvents::new();
        let held: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let inner = events.subscribe(|_| {});
        *held.borrow_mut() = Some(inner);

        let _outer = {
            let held = held.clone();
            events.subscribe(move |_| {
                held.borrow_mut().take();
            })
        };

        events.emit(&SessionEvent::LoggedOut);
        assert_eq!(events.listener_count(), 1);
    }
}
