//! The event bus: name → ordered handler list, synchronous dispatch.

use rustc_hash::FxHashMap;

use crate::{Event, Reactions};

/// A subscribed handler.  `FnMut` so a handler can keep local state
/// (counters, its own RNG) across invocations.
pub type Handler = Box<dyn FnMut(&Event, &mut Reactions)>;

/// Synchronous named-event publish/subscribe.
///
/// One bus exists per simulation instance (owned by the grid).  Handler
/// lists are append-only until [`clear`][EventBus::clear]; duplicates are
/// allowed and each registration is invoked separately.
#[derive(Default)]
pub struct EventBus {
    handlers: FxHashMap<String, Vec<Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to `name`'s list.  No identity dedup: subscribing
    /// the same closure twice means it runs twice per trigger.
    pub fn subscribe<F>(&mut self, name: &str, handler: F)
    where
        F: FnMut(&Event, &mut Reactions) + 'static,
    {
        self.handlers
            .entry(name.to_owned())
            .or_default()
            .push(Box::new(handler));
    }

    /// Invoke every handler subscribed to `event.name`, in subscription
    /// order, passing the same immutable payload to each.  No subscribers
    /// is a no-op.
    ///
    /// Dispatch happens on the caller's stack, so every command a handler
    /// pushes into `reactions` is visible to the caller the moment this
    /// returns.
    pub fn trigger(&mut self, event: &Event, reactions: &mut Reactions) {
        if let Some(list) = self.handlers.get_mut(&event.name) {
            for handler in list.iter_mut() {
                handler(event, reactions);
            }
        }
    }

    /// Remove every subscription for every event name.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Number of handlers currently subscribed to `name`.
    pub fn handler_count(&self, name: &str) -> usize {
        self.handlers.get(name).map_or(0, Vec::len)
    }
}
