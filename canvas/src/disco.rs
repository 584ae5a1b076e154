//! Disco mode: lifecycle of the single repeating recolor timer.
//!
//! The timer itself belongs to the host (a `gloo_timers::callback::Interval`
//! in the browser). This type only guarantees that at most one handle is
//! alive at a time. Dropping the handle is what cancels the timer.

#[cfg(test)]
#[path = "disco_test.rs"]
mod disco_test;

/// Holder for the active disco timer handle, if any.
#[derive(Debug)]
pub struct Disco<H> {
    handle: Option<H>,
}

impl<H> Default for Disco<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> Disco<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the timer by calling `spawn` once. Does nothing if one is already running.
    ///
    /// Returns `true` if a new timer was started.
    pub fn start<F>(&mut self, spawn: F) -> bool
    where
        F: FnOnce() -> H,
    {
        if self.handle.is_some() {
            log::debug!("disco already running");
            return false;
        }
        self.handle = Some(spawn());
        log::info!("disco started");
        true
    }

    /// Cancel the running timer by dropping its handle.
    ///
    /// Returns `true` if a timer was running.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                drop(handle);
                log::info!("disco stopped");
                true
            }
            None => false,
        }
    }

    /// Whether a timer is currently active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}
