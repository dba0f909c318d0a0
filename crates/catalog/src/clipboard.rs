//! Clipboard capability and transient copy feedback.
//!
//! The feedback window counts down on host-supplied ticks rather than
//! reading a clock, so the same state machine works in native tests and
//! in the wasm artifact (where monotonic clocks are unavailable).

use std::time::Duration;

use thiserror::Error;

/// How long the "Copied" state stays visible after a successful copy.
pub const FEEDBACK_WINDOW: Duration = Duration::from_millis(1500);

/// Errors surfaced by a clipboard capability.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The platform denied clipboard access.
    #[error("clipboard access denied")]
    Denied,
    /// No clipboard capability exists; the caller should offer the text
    /// for manual selection instead.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Copy capability consumed by the viewer. Failures are surfaced to the
/// caller, never panicked on.
pub trait Clipboard {
    /// Copy `text` to the clipboard.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    /// The last copied text.
    pub contents: Option<String>,
}

impl MemoryClipboard {
    /// An empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Transient UI state after a copy attempt: a short-lived "Copied" flag on
/// success, a sticky failure notice otherwise.
///
/// The host reports the passage of time through [`CopyFeedback::tick`];
/// the state itself never reads a clock.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    remaining: Option<Duration>,
    failure: Option<String>,
}

impl CopyFeedback {
    /// Fresh feedback state with nothing to show.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful copy, clearing any failure notice and restarting
    /// the display window.
    pub fn mark_copied(&mut self) {
        self.remaining = Some(FEEDBACK_WINDOW);
        self.failure = None;
    }

    /// Record a failed copy. The notice stays until the next attempt.
    pub fn mark_failed(&mut self, error: &ClipboardError) {
        self.failure = Some(error.to_string());
        self.remaining = None;
    }

    /// Advance the display window by `elapsed` wall time.
    pub fn tick(&mut self, elapsed: Duration) {
        self.remaining = self
            .remaining
            .and_then(|left| left.checked_sub(elapsed))
            .filter(|left| !left.is_zero());
    }

    /// Whether the "Copied" state is still within its display window.
    pub fn is_active(&self) -> bool {
        self.remaining.is_some()
    }

    /// The failure notice, if the last attempt failed.
    pub fn failure_notice(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_stores_text() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.copy("<section>hi</section>").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("<section>hi</section>"));
    }

    #[test]
    fn copied_state_is_active_right_after_copy() {
        let mut feedback = CopyFeedback::new();
        assert!(!feedback.is_active());
        feedback.mark_copied();
        assert!(feedback.is_active());
        assert!(feedback.failure_notice().is_none());
    }

    #[test]
    fn copied_state_expires_after_the_window() {
        let mut feedback = CopyFeedback::new();
        feedback.mark_copied();
        feedback.tick(Duration::from_millis(1000));
        assert!(feedback.is_active());
        feedback.tick(Duration::from_millis(500));
        assert!(!feedback.is_active());
    }

    #[test]
    fn a_new_copy_restarts_the_window() {
        let mut feedback = CopyFeedback::new();
        feedback.mark_copied();
        feedback.tick(Duration::from_millis(1400));
        feedback.mark_copied();
        feedback.tick(Duration::from_millis(1400));
        assert!(feedback.is_active());
    }

    #[test]
    fn failure_clears_copied_state() {
        let mut feedback = CopyFeedback::new();
        feedback.mark_copied();
        feedback.mark_failed(&ClipboardError::Denied);
        assert!(!feedback.is_active());
        assert_eq!(feedback.failure_notice(), Some("clipboard access denied"));
        feedback.mark_copied();
        assert!(feedback.failure_notice().is_none());
    }
}
