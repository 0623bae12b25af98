//! Copy-to-clipboard handling for `.copy-btn` controls.
//!
//! A click selects the full content of the button's target element, runs
//! the platform copy command on that selection, clears the selection again
//! and tells the user whether it worked. Browser facilities are reached
//! through [`CopySurface`] and [`Notifier`] so the flow runs against fakes in
//! tests; the real implementations live in `dom` (hydrate builds only).

#[cfg(feature = "hydrate")]
mod dom;

#[cfg(feature = "hydrate")]
pub use dom::{AlertNotifier, DomSurface, bind_copy_buttons};

use leptos::logging::{error, log};
use serde::Deserialize;
use thiserror::Error;

/// Notice shown after a successful copy.
pub const COPIED: &str = "Copied!";
/// Notice shown after any failure.
pub const FAILED: &str = "Failed to copy";
/// Target used when a button does not name one.
pub const DEFAULT_TARGET_ID: &str = "content-to-copy";
/// Selector for controls that trigger a copy.
pub const COPY_BUTTON_SELECTOR: &str = ".copy-btn";
/// Attribute holding the `#id` selector of a button's target.
pub const TARGET_ATTR: &str = "data-clipboard-target";
/// Attribute choosing how a button reports the result.
pub const FEEDBACK_ATTR: &str = "data-copy-feedback";
/// How long a label notice stays on the button.
pub const LABEL_NOTICE_MS: u32 = 2_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CopyError {
    #[error("copy target #{0} is not in the document")]
    MissingTarget(String),
    #[error("copy target #{0} has no text")]
    EmptyTarget(String),
    #[error("copy command was rejected")]
    Rejected,
    #[error("copy command failed: {0}")]
    Platform(String),
}

/// Selection and copy facilities of the page.
pub trait CopySurface {
    /// Text content of the element with `id`, or `None` when absent.
    fn target_text(&self, id: &str) -> Option<String>;

    /// Make the full content of element `id` the only active selection.
    fn select_target(&mut self, id: &str) -> Result<(), CopyError>;

    /// Copy the active selection. `Ok(false)` when the platform declines.
    fn copy_selection(&mut self) -> Result<bool, CopyError>;

    fn clear_selection(&mut self);
}

/// Shows the user the result of a copy.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// A button whose content can be swapped for a short notice.
pub trait ButtonLabel {
    /// Current inner markup.
    fn markup(&self) -> String;

    fn show_text(&self, text: &str);

    /// Put `markup` back once `delay_ms` has passed.
    fn restore_after(&self, markup: String, delay_ms: u32);
}

/// Shows the message in place of the button content, then restores it.
///
/// The button's markup is captured once at construction, so a second click
/// while a notice is showing still restores the original icon.
pub struct LabelNotifier<B> {
    button: B,
    original: String,
}

impl<B: ButtonLabel> LabelNotifier<B> {
    pub fn new(button: B) -> Self {
        let original = button.markup();
        Self { button, original }
    }
}

impl<B: ButtonLabel> Notifier for LabelNotifier<B> {
    fn notify(&self, message: &str) {
        self.button.show_text(message);
        self.button.restore_after(self.original.clone(), LABEL_NOTICE_MS);
    }
}

/// How a copy button reports its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyFeedback {
    /// Blocking alert dialog
    #[default]
    Alert,
    /// Swap the button's content for the message for two seconds
    Label,
}

impl CopyFeedback {
    pub fn as_attr(self) -> &'static str {
        match self {
            CopyFeedback::Alert => "alert",
            CopyFeedback::Label => "label",
        }
    }

    /// Parse a `data-copy-feedback` value, falling back to an alert.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("label") => CopyFeedback::Label,
            _ => CopyFeedback::Alert,
        }
    }
}

#[derive(Debug)]
pub enum CopyOutcome {
    Copied,
    Failed(CopyError),
}

impl CopyOutcome {
    /// Message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            CopyOutcome::Copied => COPIED,
            CopyOutcome::Failed(_) => FAILED,
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }
}

/// Click handler for one copy button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyHandler {
    target_id: String,
}

impl CopyHandler {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
        }
    }

    /// Build from a `data-clipboard-target` value such as `"#snippet-1"`.
    /// A missing or blank selector targets [`DEFAULT_TARGET_ID`].
    pub fn from_selector(selector: Option<&str>) -> Self {
        let id = selector
            .map(|s| s.trim().trim_start_matches('#'))
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_TARGET_ID);
        Self::new(id)
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Run one copy and report it. Never panics and never returns an error:
    /// failures are logged and shown as [`FAILED`].
    pub fn handle_click(&self, surface: &mut impl CopySurface, notifier: &impl Notifier) -> CopyOutcome {
        let outcome = match self.copy(surface) {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => CopyOutcome::Failed(e),
        };

        match &outcome {
            CopyOutcome::Copied => log!("{}", COPIED),
            CopyOutcome::Failed(e) => error!("Copy command was unsuccessful: {}", e),
        }
        notifier.notify(outcome.message());

        outcome
    }

    fn copy(&self, surface: &mut impl CopySurface) -> Result<(), CopyError> {
        let id = self.target_id.as_str();

        let text = surface
            .target_text(id)
            .ok_or_else(|| CopyError::MissingTarget(id.to_string()))?;
        if text.trim().is_empty() {
            return Err(CopyError::EmptyTarget(id.to_string()));
        }

        surface.clear_selection();
        let copied = surface.select_target(id).and_then(|()| surface.copy_selection());
        // Cleared on every path, including a failed select or copy
        surface.clear_selection();

        match copied? {
            true => Ok(()),
            false => Err(CopyError::Rejected),
        }
    }
}
