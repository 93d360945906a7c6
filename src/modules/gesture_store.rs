//! Single-slot observable gesture state.
//!
//! Written once per frame by the pipeline, read by the display. Every write
//! replaces the previous value, observers only ever see the latest one.

use std::sync::Arc;
use tokio::sync::watch;
use crate::modules::gesture::Gesture;

/// Shared handle to the current gesture; clones share the same slot.
#[derive(Debug, Clone)]
pub struct GestureStore {
    tx: Arc<watch::Sender<Option<Gesture>>>,
}

impl GestureStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        GestureStore { tx: Arc::new(tx) }
    }

    /// set_gesture overwrites the current gesture and wakes every observer.
    pub fn set_gesture(&self, gesture: Option<Gesture>) -> Option<Gesture> {
        self.tx.send_replace(gesture)
    }

    pub fn current_gesture(&self) -> Option<Gesture> {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Gesture>> {
        self.tx.subscribe()
    }
}

impl Default for GestureStore {
    fn default() -> Self {
        Self::new()
    }
}
