//! Headless stand-ins for the engine widgets a web view listens to.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::events::EventHub;

/// Physical size of the web surface in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 1.5,
            height: 0.9,
        }
    }
}

/// Text input where the user types a URL.
///
/// `end_edit` fires on [`UrlField::commit`] only; [`UrlField::set_text`]
/// changes the text silently.
#[derive(Debug, Clone, Default)]
pub struct UrlField {
    text: Arc<Mutex<String>>,
    end_edit: EventHub<String>,
}

impl UrlField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.text
            .lock()
            .map(|t| t.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn set_text(&self, text: &str) {
        let mut guard = self
            .text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = text.to_string();
    }

    /// Sets the text and notifies `end_edit` listeners, as when the user confirms the edit.
    pub fn commit(&self, text: &str) {
        self.set_text(text);
        self.end_edit.emit(&text.to_string());
    }

    pub fn end_edit(&self) -> &EventHub<String> {
        &self.end_edit
    }
}

/// Who grabbed or released the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub interactor: String,
}

/// Grabbable object the surface is attached to.
#[derive(Debug, Clone, Default)]
pub struct GrabHandle {
    select_entered: EventHub<Interaction>,
    select_exited: EventHub<Interaction>,
}

impl GrabHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grab(&self, interactor: &str) {
        self.select_entered.emit(&Interaction {
            interactor: interactor.to_string(),
        });
    }

    pub fn release(&self, interactor: &str) {
        self.select_exited.emit(&Interaction {
            interactor: interactor.to_string(),
        });
    }

    pub fn select_entered(&self) -> &EventHub<Interaction> {
        &self.select_entered
    }

    pub fn select_exited(&self) -> &EventHub<Interaction> {
        &self.select_exited
    }
}
