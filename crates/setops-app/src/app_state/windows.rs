//! Registry of open top-level windows.

use std::collections::HashMap;

/// Open windows keyed by window id.
///
/// The only place windows are created or forgotten, so the count it
/// reports is the count the lifecycle rules act on.
pub(super) struct WindowRegistry<T> {
    entries: HashMap<u64, T>,
}

impl<T> WindowRegistry<T> {
    pub(super) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a window via `create` only when none is open.
    ///
    /// Returns the id of the new window, or `None` when one already exists.
    /// `create` is not called in that case.
    pub(super) fn activate_with<E>(
        &mut self,
        create: impl FnOnce() -> Result<(u64, T), E>,
    ) -> Result<Option<u64>, E> {
        if !self.entries.is_empty() {
            return Ok(None);
        }
        let (id, entry) = create()?;
        self.entries.insert(id, entry);
        Ok(Some(id))
    }

    pub(super) fn get(&self, id: u64) -> Option<&T> {
        self.entries.get(&id)
    }

    pub(super) fn remove(&mut self, id: u64) -> Option<T> {
        self.entries.remove(&id)
    }

    /// Remove every window, returning them for teardown.
    pub(super) fn drain(&mut self) -> Vec<(u64, T)> {
        self.entries.drain().collect()
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the process should exit now that a window has closed.
    pub(super) fn should_quit(&self, quit_on_last_close: bool) -> bool {
        quit_on_last_close && self.entries.is_empty()
    }
}
