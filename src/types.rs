use serde::{Deserialize, Serialize};

use crate::error::StandardizedError;

/// Lifecycle status of a loading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchStatus {
    /// No load has been started, or the session was cleared.
    Idle,
    /// A load is in flight.
    Loading,
    /// The last load resolved with a non-empty sequence.
    Succeeded,
    /// The last load resolved with an empty sequence.
    Empty,
    /// The last load rejected; `error` holds the classified failure.
    Failed,
}

/// Observable state of one logical loading session.
///
/// `data` is present only in `Succeeded`/`Empty` and `error` only in
/// `Failed`; the transition methods below maintain that pairing so a reader
/// never observes a partially-updated mix. `epoch` increases with every
/// started load and is compared at completion time to discard superseded
/// results.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub status: FetchStatus,
    pub data: Option<Vec<T>>,
    pub error: Option<StandardizedError>,
    pub epoch: u64,
}

impl<T> FetchState<T> {
    /// Create a fresh idle session.
    pub fn new() -> Self {
        Self {
            status: FetchStatus::Idle,
            data: None,
            error: None,
            epoch: 0,
        }
    }

    /// The loaded items, or an empty slice outside `Succeeded`/`Empty`.
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn has_failed(&self) -> bool {
        self.status == FetchStatus::Failed
    }

    /// Enter `Loading` for a new load attempt and return its epoch.
    pub(crate) fn begin_load(&mut self) -> u64 {
        self.epoch += 1;
        self.status = FetchStatus::Loading;
        self.data = None;
        self.error = None;
        self.epoch
    }

    /// Apply a resolved load: empty sequences land in `Empty`, everything
    /// else in `Succeeded`.
    pub(crate) fn apply_success(&mut self, items: Vec<T>) {
        self.status = if items.is_empty() {
            FetchStatus::Empty
        } else {
            FetchStatus::Succeeded
        };
        self.data = Some(items);
        self.error = None;
    }

    /// Apply a rejected load. Any data from a previous success is dropped so
    /// `Failed` never coexists with stale items.
    pub(crate) fn apply_failure(&mut self, error: StandardizedError) {
        self.status = FetchStatus::Failed;
        self.data = None;
        self.error = Some(error);
    }

    /// Reset to `Idle`, dropping data and error.
    ///
    /// The epoch is bumped so a completion captured before the reset can
    /// never resurrect cleared state.
    pub(crate) fn reset(&mut self) {
        self.epoch += 1;
        self.status = FetchStatus::Idle;
        self.data = None;
        self.error = None;
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}
