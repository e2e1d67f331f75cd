//! Compute state shared by every decision session.

/// Busy flag, error panel text, and last result for one compute flow.
///
/// Results are replaced wholesale: a success clears the error and installs
/// the new result, a failure clears the result and installs the message.
/// The busy flag is observable state for a rendering layer; it is set for
/// the duration of one `compute()` and always cleared when the attempt
/// settles, success or failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeState<T> {
    busy: bool,
    error: Option<String>,
    result: Option<T>,
}

impl<T> Default for ComputeState<T> {
    fn default() -> Self {
        Self {
            busy: false,
            error: None,
            result: None,
        }
    }
}

impl<T> ComputeState<T> {
    /// Creates an idle state with no result and no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an attempt as started: busy set, previous error cleared.
    pub fn begin(&mut self) {
        self.busy = true;
        self.error = None;
    }

    /// Settles a successful attempt with a fresh result.
    pub fn succeed(&mut self, result: T) {
        self.result = Some(result);
        self.error = None;
        self.busy = false;
    }

    /// Settles a failed attempt with the message to display.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.result = None;
        self.error = Some(message.into());
        self.busy = false;
    }

    /// True while an attempt is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Error panel text from the last settled attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Result of the last settled attempt, if it succeeded.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle_and_empty() {
        let state: ComputeState<u32> = ComputeState::new();
        assert!(!state.is_busy());
        assert!(state.error().is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn begin_sets_busy_and_clears_error() {
        let mut state: ComputeState<u32> = ComputeState::new();
        state.fail("old failure");
        state.begin();
        assert!(state.is_busy());
        assert!(state.error().is_none());
    }

    #[test]
    fn succeed_replaces_result_and_clears_busy() {
        let mut state: ComputeState<u32> = ComputeState::new();
        state.begin();
        state.succeed(7);
        assert!(!state.is_busy());
        assert_eq!(state.result(), Some(&7));
        assert!(state.error().is_none());
    }

    #[test]
    fn fail_replaces_result_with_message() {
        let mut state: ComputeState<u32> = ComputeState::new();
        state.begin();
        state.succeed(7);
        state.begin();
        state.fail("solver said no");
        assert!(!state.is_busy());
        assert!(state.result().is_none());
        assert_eq!(state.error(), Some("solver said no"));
    }

    #[test]
    fn success_after_failure_clears_the_error() {
        let mut state: ComputeState<u32> = ComputeState::new();
        state.begin();
        state.fail("transient");
        state.begin();
        state.succeed(9);
        assert_eq!(state.result(), Some(&9));
        assert!(state.error().is_none());
    }
}
