//! Native file and message dialogs.
//!
//! `DialogProvider` is the seam between the host operations and the OS.
//! `NativeDialogs` implements it with `rfd`; tests substitute scripted fakes.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult};
use setops_common::PlatformError;
use tracing::{debug, warn};

/// A named group of file extensions shown in a file chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Options for a file or folder chooser.
#[derive(Debug, Clone, Default)]
pub struct FileDialogSpec {
    pub title: Option<String>,
    pub directory: Option<PathBuf>,
    pub filters: Vec<FileFilter>,
}

/// Severity icon of a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageLevel {
    #[default]
    Info,
    Warning,
    Error,
}

/// Options for a modal message box.
#[derive(Debug, Clone, Default)]
pub struct MessageBoxSpec {
    pub title: Option<String>,
    pub message: String,
    pub detail: Option<String>,
    pub level: MessageLevel,
    /// Button labels in display order. Empty means a single "OK".
    pub buttons: Vec<String>,
}

/// Native dialog capability.
///
/// Selection methods return `Ok(None)` when the user cancels.
pub trait DialogProvider {
    fn pick_files(&self, spec: &FileDialogSpec) -> Result<Option<Vec<PathBuf>>, PlatformError>;

    fn pick_folder(&self, spec: &FileDialogSpec) -> Result<Option<PathBuf>, PlatformError>;

    /// Show a message box and return the index of the pressed button, or
    /// `None` when it was dismissed without choosing one.
    fn message_box(&self, spec: &MessageBoxSpec) -> Result<Option<usize>, PlatformError>;
}

/// Dialogs backed by the operating system through `rfd`.
///
/// Must be called from the thread that runs the event loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl NativeDialogs {
    fn file_dialog(spec: &FileDialogSpec) -> FileDialog {
        let mut dialog = FileDialog::new();
        if let Some(title) = &spec.title {
            dialog = dialog.set_title(title);
        }
        if let Some(dir) = &spec.directory {
            dialog = dialog.set_directory(dir);
        }
        for filter in &spec.filters {
            dialog = dialog.add_filter(&filter.name, filter.extensions.as_slice());
        }
        dialog
    }
}

impl DialogProvider for NativeDialogs {
    fn pick_files(&self, spec: &FileDialogSpec) -> Result<Option<Vec<PathBuf>>, PlatformError> {
        debug!(filters = spec.filters.len(), "opening file chooser");
        Ok(Self::file_dialog(spec).pick_files())
    }

    fn pick_folder(&self, spec: &FileDialogSpec) -> Result<Option<PathBuf>, PlatformError> {
        debug!("opening folder chooser");
        Ok(Self::file_dialog(spec).pick_folder())
    }

    fn message_box(&self, spec: &MessageBoxSpec) -> Result<Option<usize>, PlatformError> {
        let level = match spec.level {
            MessageLevel::Info => rfd::MessageLevel::Info,
            MessageLevel::Warning => rfd::MessageLevel::Warning,
            MessageLevel::Error => rfd::MessageLevel::Error,
        };

        let mut dialog = MessageDialog::new()
            .set_level(level)
            .set_buttons(message_buttons(&spec.buttons))
            .set_description(description(spec));
        if let Some(title) = &spec.title {
            dialog = dialog.set_title(title);
        }

        let result = dialog.show();
        debug!(?result, "message box closed");
        Ok(button_index(&result, &spec.buttons))
    }
}

/// Message text with the optional detail appended as its own paragraph.
fn description(spec: &MessageBoxSpec) -> String {
    match spec.detail.as_deref() {
        Some(detail) if !detail.is_empty() => format!("{}\n\n{detail}", spec.message),
        _ => spec.message.clone(),
    }
}

/// Map caller button labels onto the layouts `rfd` can render (at most three).
fn message_buttons(labels: &[String]) -> MessageButtons {
    match labels {
        [] => MessageButtons::Ok,
        [only] => MessageButtons::OkCustom(only.clone()),
        [first, second] => MessageButtons::OkCancelCustom(first.clone(), second.clone()),
        [first, second, third, rest @ ..] => {
            if !rest.is_empty() {
                warn!(
                    count = labels.len(),
                    "message box supports at most 3 buttons; extra buttons dropped"
                );
            }
            MessageButtons::YesNoCancelCustom(first.clone(), second.clone(), third.clone())
        }
    }
}

/// Translate the dialog result back into an index into `labels`.
///
/// Backends report custom buttons either by label or by the role of the
/// slot they were placed in, so both forms are handled.
fn button_index(result: &MessageDialogResult, labels: &[String]) -> Option<usize> {
    let shown = labels.len().clamp(1, 3);
    match result {
        MessageDialogResult::Custom(label) => labels.iter().position(|l| l == label),
        MessageDialogResult::Ok | MessageDialogResult::Yes => Some(0),
        MessageDialogResult::No if shown >= 2 => Some(1),
        MessageDialogResult::Cancel if shown >= 2 => Some(shown - 1),
        MessageDialogResult::No | MessageDialogResult::Cancel => None,
    }
}
