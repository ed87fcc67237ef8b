//! Shared queue between webview callbacks and the event loop.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

/// Called after every push so a sleeping event loop can wake and drain.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

/// Queue of pending webview events plus an optional wake-up hook.
///
/// Clones share the queue. The notifier is copied at clone time, so set it
/// before handing clones to webview handlers.
#[derive(Clone, Default)]
pub struct EventSink {
    events: Arc<Mutex<Vec<WebViewEvent>>>,
    notifier: Option<Notifier>,
}

impl EventSink {
    pub fn set_notifier(&mut self, notifier: Notifier) {
        self.notifier = Some(notifier);
    }

    pub fn push(&self, event: WebViewEvent) {
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event);
        drop(events);

        if let Some(notify) = &self.notifier {
            notify();
        }
    }

    /// Take every pending event, oldest first.
    pub fn drain(&self) -> Vec<WebViewEvent> {
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *events)
    }
}
