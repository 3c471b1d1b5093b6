//! Fetch lifecycle controller.
//!
//! A [`FetchController`] exclusively owns one [`FetchState`] and runs at most
//! one *live* load against it: every `start` bumps the state's epoch, and a
//! completing load only applies its result when its captured epoch still
//! matches. Superseded completions are dropped silently — results are
//! ignored, never aborted.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::classify::{classify, log_failure};
use crate::producer::Producer;
use crate::types::{FetchState, FetchStatus};

struct Inner<T> {
    state: FetchState<T>,
    /// Producer from the most recent `start`, retained for `retry`.
    producer: Option<Producer<T>>,
}

/// Owns and mutates the state of a single logical loading session.
///
/// Cloning the controller clones the handle, not the session; all clones
/// observe and drive the same state.
pub struct FetchController<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for FetchController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for FetchController<T>
where
    T: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchController<T>
where
    T: Send + 'static,
{
    /// Create a controller owning a fresh idle session.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: FetchState::new(),
                producer: None,
            })),
        }
    }

    /// Start a new load. Permitted from any state.
    ///
    /// Enters `Loading` immediately and spawns the producer invocation; the
    /// returned handle settles when this attempt does, whether or not its
    /// result is applied. On rejection the raw failure is classified and
    /// logged, and the session enters `Failed`.
    pub async fn start(&self, producer: Producer<T>) -> JoinHandle<()> {
        let epoch = {
            let mut inner = self.inner.lock().await;
            inner.producer = Some(Arc::clone(&producer));
            inner.state.begin_load()
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let outcome = producer().await;
            let mut inner = inner.lock().await;
            if inner.state.epoch != epoch {
                debug!(
                    started = epoch,
                    current = inner.state.epoch,
                    "dropping superseded load result"
                );
                return;
            }
            match outcome {
                Ok(items) => inner.state.apply_success(items),
                Err(raw) => {
                    let error = classify(Some(&raw));
                    log_failure(&error, "fetch");
                    inner.state.apply_failure(error);
                }
            }
        })
    }

    /// Re-invoke the producer from the most recent `start`.
    ///
    /// Valid only from `Failed`; anywhere else this is a reported no-op and
    /// returns `None`.
    pub async fn retry(&self) -> Option<JoinHandle<()>> {
        let producer = {
            let inner = self.inner.lock().await;
            if inner.state.status != FetchStatus::Failed {
                warn!(status = ?inner.state.status, "retry ignored outside failed state");
                return None;
            }
            inner.producer.clone()
        };
        match producer {
            Some(producer) => Some(self.start(producer).await),
            None => None,
        }
    }

    /// Reset the session to `Idle`, dropping data and error.
    ///
    /// Does not cancel an in-flight load, but bumps the epoch so its
    /// eventual completion is dropped instead of resurrecting state.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        inner.state.reset();
    }

    /// Current status.
    pub async fn status(&self) -> FetchStatus {
        self.inner.lock().await.state.status
    }
}

impl<T> FetchController<T>
where
    T: Clone + Send + 'static,
{
    /// Snapshot of the current state, for presentation-layer reads.
    pub async fn snapshot(&self) -> FetchState<T> {
        self.inner.lock().await.state.clone()
    }
}
