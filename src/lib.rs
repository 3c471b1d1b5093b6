//! Habit Loader - resilient asynchronous data loading
//!
//! This crate turns an arbitrary fetch operation into a well-defined sequence
//! of observable states (loading → success/empty/error), classifies
//! heterogeneous failures into a small taxonomy, and supports manual retry
//! without races.

// Core modules
pub mod classify;
pub mod error;
pub mod types;

// Main functionality modules
pub mod controller;
pub mod habits;
pub mod presentation;
pub mod producer;

// Re-export main types for convenience
pub use classify::{classify, log_failure, CONNECTIVITY_MESSAGE, UNKNOWN_ERROR_MESSAGE};
pub use controller::FetchController;
pub use error::{ErrorVariant, RawFailure, ResponseInfo, StandardizedError};
pub use presentation::{
    select_view, LoadingPresentationKind, PresentationConfig, View,
};
pub use producer::{items_from_json, json_producer, producer, Producer};
pub use types::{FetchState, FetchStatus};

/// Drive a single load to settlement and return the resulting state.
///
/// Convenience for one-shot callers that do not need retry or clearing; the
/// usual path is to hold a [`FetchController`] for the session's lifetime.
pub async fn load_once<T>(producer: Producer<T>) -> FetchState<T>
where
    T: Clone + Send + 'static,
{
    let controller = FetchController::new();
    let handle = controller.start(producer).await;
    let _ = handle.await;
    controller.snapshot().await
}
