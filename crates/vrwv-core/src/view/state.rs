//! Lifecycle, errors and events of a web view.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::admission::AdmissionError;
use crate::config::VrwvConfig;
use crate::surface::SurfaceSize;

/// Explicit lifecycle; submissions are only processed while `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Ready,
    Destroyed,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lifecycle::Uninitialized => "uninitialized",
            Lifecycle::Ready => "ready",
            Lifecycle::Destroyed => "destroyed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("web view is already set up")]
    AlreadySetUp,
    #[error("web view has been destroyed")]
    Destroyed,
    #[error("web view is {0}, not ready")]
    NotReady(Lifecycle),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("web view is {0}, not ready")]
    NotReady(Lifecycle),
    #[error(transparent)]
    Rejected(#[from] AdmissionError),
}

/// Notifications published by a web view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Loaded(String),
    Rejected { input: String, reason: AdmissionError },
    VisibilityChanged(bool),
    LoadingChanged(bool),
}

/// Per-view settings, usually taken from [`VrwvConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub default_url: String,
    pub size: SurfaceSize,
    pub loading_hold: Duration,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&VrwvConfig::default())
    }
}

impl ViewSettings {
    pub fn from_config(cfg: &VrwvConfig) -> Self {
        Self {
            default_url: cfg.default_url.clone(),
            size: cfg.surface,
            loading_hold: cfg.loading_hold(),
        }
    }
}

/// Mutable view state behind the controller's lock.
#[derive(Debug)]
pub(super) struct ViewState {
    pub(super) lifecycle: Lifecycle,
    pub(super) current_url: Option<String>,
    pub(super) visible: bool,
    pub(super) loading: bool,
    /// Time left until the loading indicator hides itself.
    pub(super) hide_in: Option<Duration>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            lifecycle: Lifecycle::Uninitialized,
            current_url: None,
            visible: true,
            loading: false,
            hide_in: None,
        }
    }
}

impl ViewState {
    /// Sets the indicator; returns the event to publish if it changed.
    pub(super) fn set_loading(&mut self, on: bool) -> Option<ViewEvent> {
        if self.loading == on {
            return None;
        }
        self.loading = on;
        Some(ViewEvent::LoadingChanged(on))
    }

    /// Runs the hide timer forward by `elapsed`.
    pub(super) fn advance(&mut self, elapsed: Duration) -> Option<ViewEvent> {
        let remaining = self.hide_in?;
        if elapsed >= remaining {
            self.hide_in = None;
            self.set_loading(false)
        } else {
            self.hide_in = Some(remaining - elapsed);
            None
        }
    }
}
