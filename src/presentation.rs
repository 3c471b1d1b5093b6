//! Presentation adapter contract.
//!
//! The UI layer consumes controller state through [`select_view`], which maps
//! a [`FetchState`] to exactly one of four views. The configuration surface
//! is purely cosmetic; it has no effect on the state machine.

use std::fmt;
use std::sync::Arc;

use crate::classify::UNKNOWN_ERROR_MESSAGE;
use crate::error::ErrorVariant;
use crate::types::{FetchState, FetchStatus};

/// How the loading view should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPresentationKind {
    Spinner,
    Skeleton,
}

/// Optional creation action offered by the empty panel.
pub type EmptyAction = Arc<dyn Fn() + Send + Sync>;

/// Cosmetic configuration recognized by the adapter layer.
#[derive(Clone)]
pub struct PresentationConfig {
    pub empty_title: String,
    pub empty_message: String,
    pub empty_action_text: String,
    pub empty_action: Option<EmptyAction>,
    pub loading_kind: LoadingPresentationKind,
    pub skeleton_line_count: usize,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            empty_title: "No items found".to_string(),
            empty_message: "There are no items to display.".to_string(),
            empty_action_text: "Create New".to_string(),
            empty_action: None,
            loading_kind: LoadingPresentationKind::Spinner,
            skeleton_line_count: 5,
        }
    }
}

impl fmt::Debug for PresentationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationConfig")
            .field("empty_title", &self.empty_title)
            .field("empty_message", &self.empty_message)
            .field("empty_action_text", &self.empty_action_text)
            .field("has_empty_action", &self.empty_action.is_some())
            .field("loading_kind", &self.loading_kind)
            .field("skeleton_line_count", &self.skeleton_line_count)
            .finish()
    }
}

/// The single view a reader of controller state must render.
///
/// The error view expects the caller to bind its retry affordance to
/// [`FetchController::retry`](crate::controller::FetchController::retry).
#[derive(Debug, PartialEq)]
pub enum View<'a, T> {
    Loading {
        kind: LoadingPresentationKind,
        skeleton_lines: usize,
    },
    Error {
        message: &'a str,
        variant: ErrorVariant,
    },
    Empty {
        title: &'a str,
        message: &'a str,
        /// Label for the creation action; present only when an action is
        /// configured.
        action_text: Option<&'a str>,
    },
    List(&'a [T]),
}

/// Map controller state to exactly one view.
///
/// `Idle` renders as loading: a freshly mounted session shows its loading
/// indicator until the first load settles.
pub fn select_view<'a, T>(
    state: &'a FetchState<T>,
    config: &'a PresentationConfig,
) -> View<'a, T> {
    match state.status {
        FetchStatus::Idle | FetchStatus::Loading => View::Loading {
            kind: config.loading_kind,
            skeleton_lines: config.skeleton_line_count,
        },
        FetchStatus::Failed => {
            let (message, variant) = state
                .error
                .as_ref()
                .map(|e| (e.message.as_str(), e.variant))
                .unwrap_or((UNKNOWN_ERROR_MESSAGE, ErrorVariant::Default));
            View::Error { message, variant }
        }
        FetchStatus::Empty => View::Empty {
            title: &config.empty_title,
            message: &config.empty_message,
            action_text: config
                .empty_action
                .as_ref()
                .map(|_| config.empty_action_text.as_str()),
        },
        FetchStatus::Succeeded => View::List(state.items()),
    }
}
