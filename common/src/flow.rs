//! Upload flow state machine
//!
//! Pure state transitions for the upload page, kept out of the WASM layer so
//! the submission guards are testable with plain `cargo test`. The caller
//! supplies timestamps (milliseconds) so no clock access happens here.

/// Rapid repeated submit triggers within this window collapse into a single
/// network call. Matches a user double-clicking the analyze button.
pub const DEBOUNCE_WINDOW_MS: f64 = 1000.0;

/// Upload page states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// No file chosen
    #[default]
    Idle,
    /// File chosen, preview available
    Ready,
    /// Request in flight
    Submitting,
    /// Result produced; the page navigates away
    Succeeded,
    /// Error message set; resubmission allowed
    Failed,
}

/// Transient upload session state
///
/// One instance per upload page mount. Nothing here survives navigation.
#[derive(Debug, Clone, Default)]
pub struct UploadFlow {
    state: FlowState,
    file_name: Option<String>,
    preview_url: Option<String>,
    error: Option<String>,
    last_submit_ms: Option<f64>,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FlowState::Submitting
    }

    /// True when a submission would be accepted apart from the debounce guard
    pub fn can_submit(&self) -> bool {
        self.file_name.is_some() && self.state != FlowState::Submitting
    }

    /// Select a file, replacing any previous preview and clearing errors.
    /// Ignored while a request is in flight.
    pub fn select_file(&mut self, file_name: impl Into<String>, data_url: impl Into<String>) {
        if self.state == FlowState::Submitting {
            return;
        }
        self.file_name = Some(file_name.into());
        self.preview_url = Some(data_url.into());
        self.error = None;
        self.state = FlowState::Ready;
    }

    /// Attempt to start a submission at `now_ms`.
    ///
    /// Returns true when the caller should fire exactly one network call.
    /// No-ops (returns false) when no file is selected, a request is already
    /// in flight, or the trigger falls inside the debounce window of the
    /// previously accepted submission.
    pub fn try_submit(&mut self, now_ms: f64) -> bool {
        if !self.can_submit() {
            return false;
        }
        if let Some(last) = self.last_submit_ms {
            if now_ms - last < DEBOUNCE_WINDOW_MS {
                return false;
            }
        }
        self.last_submit_ms = Some(now_ms);
        self.error = None;
        self.state = FlowState::Submitting;
        true
    }

    /// The inference call returned a result; the page navigates away next.
    pub fn finish_success(&mut self) {
        self.state = FlowState::Succeeded;
    }

    /// The inference call failed. The file stays selected so the user can
    /// resubmit manually; no automatic retry happens.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.state = FlowState::Failed;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
        if self.state == FlowState::Failed {
            self.state = FlowState::Ready;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let flow = UploadFlow::new();
        assert_eq!(flow.state(), FlowState::Idle);
        assert!(flow.preview_url().is_none());
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_submit_without_file_is_noop() {
        let mut flow = UploadFlow::new();
        assert!(!flow.try_submit(0.0));
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn test_select_file_moves_to_ready() {
        let mut flow = UploadFlow::new();
        flow.select_file("phone.jpg", "data:image/jpeg;base64,AAAA");
        assert_eq!(flow.state(), FlowState::Ready);
        assert_eq!(flow.file_name(), Some("phone.jpg"));
        assert_eq!(flow.preview_url(), Some("data:image/jpeg;base64,AAAA"));
    }

    #[test]
    fn test_select_file_replaces_preview() {
        let mut flow = UploadFlow::new();
        flow.select_file("a.jpg", "data:a");
        flow.select_file("b.png", "data:b");
        assert_eq!(flow.file_name(), Some("b.png"));
        assert_eq!(flow.preview_url(), Some("data:b"));
    }

    #[test]
    fn test_submit_with_file_accepted() {
        let mut flow = UploadFlow::new();
        flow.select_file("phone.jpg", "data:a");
        assert!(flow.try_submit(1000.0));
        assert_eq!(flow.state(), FlowState::Submitting);
    }

    #[test]
    fn test_double_submit_within_window_collapses() {
        let mut flow = UploadFlow::new();
        flow.select_file("phone.jpg", "data:a");

        assert!(flow.try_submit(1000.0));
        flow.fail("network error");

        // 500ms later: still inside the debounce window
        assert!(!flow.try_submit(1500.0));
        // Outside the window: accepted again
        assert!(flow.try_submit(2100.0));
    }

    #[test]
    fn test_submit_while_in_flight_is_noop() {
        let mut flow = UploadFlow::new();
        flow.select_file("phone.jpg", "data:a");
        assert!(flow.try_submit(0.0));
        assert!(!flow.try_submit(5000.0));
        assert_eq!(flow.state(), FlowState::Submitting);
    }

    #[test]
    fn test_select_file_while_in_flight_is_noop() {
        let mut flow = UploadFlow::new();
        flow.select_file("phone.jpg", "data:a");
        assert!(flow.try_submit(0.0));
        flow.select_file("other.jpg", "data:b");
        assert_eq!(flow.file_name(), Some("phone.jpg"));
    }

    #[test]
    fn test_failure_keeps_file_and_sets_error() {
        let mut flow = UploadFlow::new();
        flow.select_file("phone.jpg", "data:a");
        flow.try_submit(0.0);
        flow.fail("API error: 503");

        assert_eq!(flow.state(), FlowState::Failed);
        assert_eq!(flow.error(), Some("API error: 503"));
        assert_eq!(flow.file_name(), Some("phone.jpg"));
    }

    #[test]
    fn test_resubmit_after_failure() {
        let mut flow = UploadFlow::new();
        flow.select_file("phone.jpg", "data:a");
        assert!(flow.try_submit(0.0));
        flow.fail("network error");
        assert!(flow.try_submit(2000.0));
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_dismiss_error_returns_to_ready() {
        let mut flow = UploadFlow::new();
        flow.select_file("phone.jpg", "data:a");
        flow.try_submit(0.0);
        flow.fail("network error");

        flow.dismiss_error();
        assert_eq!(flow.state(), FlowState::Ready);
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_success_state() {
        let mut flow = UploadFlow::new();
        flow.select_file("phone.jpg", "data:a");
        flow.try_submit(0.0);
        flow.finish_success();
        assert_eq!(flow.state(), FlowState::Succeeded);
    }

    #[test]
    fn test_selecting_after_failure_clears_error() {
        let mut flow = UploadFlow::new();
        flow.select_file("phone.jpg", "data:a");
        flow.try_submit(0.0);
        flow.fail("network error");

        flow.select_file("tablet.jpg", "data:b");
        assert_eq!(flow.state(), FlowState::Ready);
        assert!(flow.error().is_none());
    }
}
