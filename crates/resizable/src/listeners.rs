//! Scoped ownership of the global pointer listeners.

use resizable_core::host::{ElementHost, ListenerId};

/// A global pointer-move/up listener pair held for one gesture.
///
/// Acquired when a gesture arms and consumed by [`GlobalListeners::release`]
/// when it ends, so a pair can never be released twice. The handle is not
/// `Clone`.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "listeners stay registered until released"]
pub struct GlobalListeners {
    id: ListenerId,
}

impl GlobalListeners {
    /// Ask the host to start delivering global pointer events.
    pub fn acquire<H: ElementHost + ?Sized>(host: &H) -> Self {
        let id = host.listen_global();
        tracing::trace!("Acquired global pointer listeners {:?}", id);
        Self { id }
    }

    /// Id of the listener pair.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Stop delivering global pointer events.
    pub fn release<H: ElementHost + ?Sized>(self, host: &H) {
        tracing::trace!("Released global pointer listeners {:?}", self.id);
        host.unlisten_global(self.id);
    }
}
