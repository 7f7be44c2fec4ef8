//! Phase reports

use crate::items::ItemId;

/// Outcome of one fan-out phase, split by item into successes and failures.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseReport<T, E> {
    succeeded: Vec<(ItemId, T)>,
    failed: Vec<(ItemId, E)>,
}

impl<T, E> PhaseReport<T, E> {
    /// Sub-requests that succeeded, in cart order.
    pub fn succeeded(&self) -> &[(ItemId, T)] {
        &self.succeeded
    }

    /// Sub-requests that failed, in cart order.
    pub fn failed(&self) -> &[(ItemId, E)] {
        &self.failed
    }

    /// Whether every sub-request succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of sub-requests.
    pub fn len(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Whether the phase issued no sub-requests.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first failure, in cart order.
    pub fn first_failure(&self) -> Option<&(ItemId, E)> {
        self.failed.first()
    }

    /// Splits the report into its successes and failures.
    pub fn into_parts(self) -> (Vec<(ItemId, T)>, Vec<(ItemId, E)>) {
        (self.succeeded, self.failed)
    }
}

impl<T, E> FromIterator<(ItemId, Result<T, E>)> for PhaseReport<T, E> {
    fn from_iter<I: IntoIterator<Item = (ItemId, Result<T, E>)>>(outcomes: I) -> Self {
        let mut report = Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        };

        for (item, outcome) in outcomes {
            match outcome {
                Ok(value) => report.succeeded.push((item, value)),
                Err(error) => report.failed.push((item, error)),
            }
        }

        report
    }
}
