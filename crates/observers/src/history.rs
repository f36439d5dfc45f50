//! In-memory record of solver events.

use gradwalk_core::Observer;

/// Keeps a copy of every event it observes.
///
/// Useful for inspecting a run after the fact, for example to check the
/// path a descent took or to export it for plotting elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct History<E> {
    events: Vec<E>,
}

impl<E> History<E> {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in the order they were emitted.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Returns the most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&E> {
        self.events.last()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no event has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the history and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E> Default for History<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone, A> Observer<E, A> for History<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events.push(event.clone());
        None
    }
}

impl<E: Clone, A> Observer<E, A> for &mut History<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
