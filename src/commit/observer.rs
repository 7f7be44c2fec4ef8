//! Commit observers

use crate::commit::CommitState;

/// Receives state transitions of a commit attempt, for progress display.
pub trait CommitObserver {
    /// Called each time the attempt moves to a new state.
    fn on_state(&mut self, state: CommitState);
}

/// Observer that ignores every transition.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CommitObserver for NoopObserver {
    fn on_state(&mut self, _state: CommitState) {}
}

/// Observer that remembers every transition in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    states: Vec<CommitState>,
}

impl RecordingObserver {
    /// States seen so far.
    pub fn states(&self) -> &[CommitState] {
        &self.states
    }
}

impl CommitObserver for RecordingObserver {
    fn on_state(&mut self, state: CommitState) {
        self.states.push(state);
    }
}
