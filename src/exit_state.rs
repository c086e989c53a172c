use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether the process has started shutting down. Closing the main
/// window is terminal, so the flag never resets.
#[derive(Debug, Default)]
pub(crate) struct ExitState {
    quitting: AtomicBool,
}

impl ExitState {
    /// Returns `true` only for the call that started the shutdown.
    pub(crate) fn mark_quitting(&self) -> bool {
        self.quitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.quitting.load(Ordering::Acquire)
    }
}
