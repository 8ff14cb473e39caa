//! Testing utilities.
//!
//! Ready-made handlers for asserting on dispatch behaviour in tests:
//!
//! - [`RecordingHandler`]: records every `(event, payload)` pair it receives
//! - [`CountingHandler`]: counts invocations

use crate::handler::Handler;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// A handler that records every `(event, payload)` pair it receives.
///
/// Clones share the same recording, so a clone can be registered while the
/// original is kept around for assertions.
pub struct RecordingHandler<P> {
    events: Arc<Mutex<Vec<(String, P)>>>,
}

impl<P> RecordingHandler<P> {
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of recorded invocations.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Clear all recorded invocations.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl<P: Clone> RecordingHandler<P> {
    /// Get a clone of the recorded `(event, payload)` pairs.
    pub fn events(&self) -> Vec<(String, P)> {
        self.events.lock().unwrap().clone()
    }
}

impl<P> Default for RecordingHandler<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for RecordingHandler<P> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<P: Clone + Send> Handler<P> for RecordingHandler<P> {
    fn call(&self, event: &str, payload: &P) {
        self.events
            .lock()
            .unwrap()
            .push((event.to_owned(), payload.clone()));
    }
}

/// A handler that counts invocations.
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<P> Handler<P> for CountingHandler {
    fn call(&self, _event: &str, _payload: &P) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
