//! Native services behind the four bridge operations.

use std::path::{Path, PathBuf};

use setops_common::PlatformError;
use setops_platform::{
    open_folder, DialogProvider, FileDialogSpec, FileFilter, FolderOpener, MessageBoxSpec,
    MessageLevel, NativeDialogs, SystemFileManager,
};
use setops_webview::{
    BridgeCall, MessageBoxOptions, MessageBoxResult, MessageType, SelectFilesOptions,
    SelectionResult,
};

/// Filter groups offered by the file chooser, in display order.
const FILE_FILTERS: &[(&str, &[&str])] = &[
    ("CSV Files", &["csv"]),
    ("Excel Files", &["xlsx", "xls"]),
    ("Text Files", &["txt"]),
    ("All Files", &["*"]),
];

/// The dialog and file-manager capabilities bridge calls are executed with.
pub(in crate::app_state) struct HostServices {
    dialogs: Box<dyn DialogProvider>,
    opener: Box<dyn FolderOpener>,
}

impl HostServices {
    pub(in crate::app_state) fn new(
        dialogs: Box<dyn DialogProvider>,
        opener: Box<dyn FolderOpener>,
    ) -> Self {
        Self { dialogs, opener }
    }

    /// OS dialogs and the platform file manager.
    pub(in crate::app_state) fn native() -> Self {
        Self::new(Box::new(NativeDialogs), Box::new(SystemFileManager))
    }

    /// Run one call. Errors are native failures; cancellation and missing
    /// paths are ordinary results.
    pub(in crate::app_state) fn execute(
        &self,
        call: BridgeCall,
    ) -> Result<serde_json::Value, PlatformError> {
        let value = match call {
            BridgeCall::SelectFiles(options) => serde_json::json!(self.select_files(&options)?),
            BridgeCall::SelectFolder => serde_json::json!(self.select_folder()?),
            BridgeCall::OpenFolder { path } => {
                serde_json::json!(open_folder(self.opener.as_ref(), &path)?)
            }
            BridgeCall::ShowMessage(options) => serde_json::json!(self.show_message(&options)?),
        };
        Ok(value)
    }

    fn select_files(&self, options: &SelectFilesOptions) -> Result<SelectionResult, PlatformError> {
        let spec = FileDialogSpec {
            title: options.title.clone(),
            directory: options.default_path.as_deref().and_then(start_directory),
            filters: FILE_FILTERS
                .iter()
                .map(|(name, exts)| FileFilter::new(*name, exts))
                .collect(),
        };
        Ok(match self.dialogs.pick_files(&spec)? {
            Some(paths) => SelectionResult::selected(paths),
            None => SelectionResult::cancelled(),
        })
    }

    fn select_folder(&self) -> Result<SelectionResult, PlatformError> {
        Ok(match self.dialogs.pick_folder(&FileDialogSpec::default())? {
            Some(path) => SelectionResult::selected([path]),
            None => SelectionResult::cancelled(),
        })
    }

    fn show_message(&self, options: &MessageBoxOptions) -> Result<MessageBoxResult, PlatformError> {
        let spec = MessageBoxSpec {
            title: options.title.clone(),
            message: options.message.clone(),
            detail: options.detail.clone(),
            level: message_level(options.kind),
            buttons: options.buttons.clone(),
        };
        let response = self
            .dialogs
            .message_box(&spec)?
            .unwrap_or_else(|| dismissal_index(options));
        Ok(MessageBoxResult {
            response,
            checkbox_checked: options.checkbox_checked,
        })
    }
}

/// Directory a chooser should open in for a caller's `defaultPath`.
/// A file path opens its parent.
fn start_directory(default_path: &str) -> Option<PathBuf> {
    if default_path.is_empty() {
        return None;
    }
    let path = Path::new(default_path);
    if path.is_dir() {
        Some(path.to_path_buf())
    } else {
        path.parent()
            .filter(|p| p.is_dir())
            .map(Path::to_path_buf)
    }
}

fn message_level(kind: MessageType) -> MessageLevel {
    match kind {
        MessageType::Error => MessageLevel::Error,
        MessageType::Warning => MessageLevel::Warning,
        MessageType::None | MessageType::Info | MessageType::Question => MessageLevel::Info,
    }
}

/// Button index reported when the box closes without a choice: `cancelId`
/// if given, else the first "Cancel" or "No" button, else 0.
fn dismissal_index(options: &MessageBoxOptions) -> usize {
    options.cancel_id.unwrap_or_else(|| {
        options
            .buttons
            .iter()
            .position(|b| b.eq_ignore_ascii_case("cancel") || b.eq_ignore_ascii_case("no"))
            .unwrap_or(0)
    })
}

/// Scripted stand-ins for the native capabilities.
#[cfg(test)]
pub(in crate::app_state) mod fakes {
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use setops_common::PlatformError;
    use setops_platform::{DialogProvider, FileDialogSpec, FolderOpener, MessageBoxSpec};

    /// Dialogs that replay fixed answers and record what they were asked.
    #[derive(Default)]
    pub(in crate::app_state) struct ScriptedDialogs {
        pub files: Option<Vec<PathBuf>>,
        pub folder: Option<PathBuf>,
        pub button: Option<usize>,
        pub fail: bool,
        pub file_specs: Rc<RefCell<Vec<FileDialogSpec>>>,
        pub message_specs: Rc<RefCell<Vec<MessageBoxSpec>>>,
    }

    impl DialogProvider for ScriptedDialogs {
        fn pick_files(&self, spec: &FileDialogSpec) -> Result<Option<Vec<PathBuf>>, PlatformError> {
            if self.fail {
                return Err(PlatformError::DialogError("no display".into()));
            }
            self.file_specs.borrow_mut().push(spec.clone());
            Ok(self.files.clone())
        }

        fn pick_folder(&self, spec: &FileDialogSpec) -> Result<Option<PathBuf>, PlatformError> {
            self.file_specs.borrow_mut().push(spec.clone());
            Ok(self.folder.clone())
        }

        fn message_box(&self, spec: &MessageBoxSpec) -> Result<Option<usize>, PlatformError> {
            self.message_specs.borrow_mut().push(spec.clone());
            Ok(self.button)
        }
    }

    #[derive(Default, Clone)]
    pub(in crate::app_state) struct RecordingOpener {
        pub launched: Rc<RefCell<Vec<PathBuf>>>,
    }

    impl FolderOpener for RecordingOpener {
        fn launch(&self, path: &Path) -> Result<(), PlatformError> {
            self.launched.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::{RecordingOpener, ScriptedDialogs};
    use super::*;
    use std::rc::Rc;

    use serde_json::json;

    fn host(dialogs: ScriptedDialogs) -> HostServices {
        HostServices::new(Box::new(dialogs), Box::new(RecordingOpener::default()))
    }

    #[test]
    fn cancelled_file_selection() {
        let value = host(ScriptedDialogs::default())
            .execute(BridgeCall::SelectFiles(SelectFilesOptions::default()))
            .unwrap();
        assert_eq!(value, json!({ "cancelled": true, "filePaths": [] }));
    }

    #[test]
    fn file_selection_uses_fixed_filters() {
        let dialogs = ScriptedDialogs {
            files: Some(vec![PathBuf::from("/data/a.csv"), PathBuf::from("/data/b.xls")]),
            ..Default::default()
        };
        let specs = Rc::clone(&dialogs.file_specs);
        let value = host(dialogs)
            .execute(BridgeCall::SelectFiles(SelectFilesOptions {
                title: Some("Choose inputs".into()),
                default_path: None,
            }))
            .unwrap();

        assert_eq!(
            value,
            json!({ "cancelled": false, "filePaths": ["/data/a.csv", "/data/b.xls"] })
        );
        let specs = specs.borrow();
        assert_eq!(specs[0].title.as_deref(), Some("Choose inputs"));
        let names: Vec<_> = specs[0].filters.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["CSV Files", "Excel Files", "Text Files", "All Files"]);
        assert_eq!(specs[0].filters[1].extensions, ["xlsx", "xls"]);
    }

    #[test]
    fn folder_selection_wraps_single_path() {
        let dialogs = ScriptedDialogs {
            folder: Some(PathBuf::from("/data/exports")),
            ..Default::default()
        };
        let value = host(dialogs).execute(BridgeCall::SelectFolder).unwrap();
        assert_eq!(value, json!({ "cancelled": false, "filePaths": ["/data/exports"] }));
    }

    #[test]
    fn cancelled_folder_selection() {
        let value = host(ScriptedDialogs::default())
            .execute(BridgeCall::SelectFolder)
            .unwrap();
        assert_eq!(value, json!({ "cancelled": true, "filePaths": [] }));
    }

    #[test]
    fn dialog_failure_is_an_error() {
        let dialogs = ScriptedDialogs {
            fail: true,
            ..Default::default()
        };
        let err = host(dialogs)
            .execute(BridgeCall::SelectFiles(SelectFilesOptions::default()))
            .unwrap_err();
        assert!(matches!(err, PlatformError::DialogError(_)));
    }

    #[test]
    fn open_folder_missing_path_is_false_without_launch() {
        let opener = RecordingOpener::default();
        let host = HostServices::new(Box::new(ScriptedDialogs::default()), Box::new(opener.clone()));

        let value = host
            .execute(BridgeCall::OpenFolder {
                path: "/nonexistent/setops/output".into(),
            })
            .unwrap();
        assert_eq!(value, json!(false));
        assert!(opener.launched.borrow().is_empty());
    }

    #[test]
    fn open_folder_existing_dir_launches_once() {
        let dir = tempfile::tempdir().unwrap();
        let opener = RecordingOpener::default();
        let host = HostServices::new(Box::new(ScriptedDialogs::default()), Box::new(opener.clone()));

        let value = host
            .execute(BridgeCall::OpenFolder {
                path: dir.path().to_string_lossy().into_owned(),
            })
            .unwrap();
        assert_eq!(value, json!(true));
        let launched = opener.launched.borrow();
        assert_eq!(launched.len(), 1);
        assert_eq!(launched[0], dir.path());
    }

    #[test]
    fn show_message_reports_pressed_button() {
        let dialogs = ScriptedDialogs {
            button: Some(0),
            ..Default::default()
        };
        let value = host(dialogs)
            .execute(BridgeCall::ShowMessage(MessageBoxOptions {
                message: "ok".into(),
                buttons: vec!["OK".into()],
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(value, json!({ "response": 0, "checkboxChecked": false }));
    }

    #[test]
    fn show_message_passes_options_to_dialog() {
        let dialogs = ScriptedDialogs {
            button: Some(1),
            ..Default::default()
        };
        let specs = Rc::clone(&dialogs.message_specs);
        let value = host(dialogs)
            .execute(BridgeCall::ShowMessage(MessageBoxOptions {
                message: "Delete results?".into(),
                kind: MessageType::Warning,
                title: Some("Confirm".into()),
                detail: Some("This cannot be undone.".into()),
                buttons: vec!["Delete".into(), "Keep".into()],
                checkbox_checked: true,
                ..Default::default()
            }))
            .unwrap();

        assert_eq!(value, json!({ "response": 1, "checkboxChecked": true }));
        let specs = specs.borrow();
        assert_eq!(specs[0].level, MessageLevel::Warning);
        assert_eq!(specs[0].title.as_deref(), Some("Confirm"));
        assert_eq!(specs[0].buttons, ["Delete", "Keep"]);
    }

    #[test]
    fn dismissed_message_uses_cancel_id() {
        let value = host(ScriptedDialogs::default())
            .execute(BridgeCall::ShowMessage(MessageBoxOptions {
                message: "Continue?".into(),
                buttons: vec!["Yes".into(), "Maybe".into(), "Stop".into()],
                cancel_id: Some(2),
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(value["response"], json!(2));
    }

    #[test]
    fn dismissal_defaults_to_cancel_button() {
        let options = MessageBoxOptions {
            message: "Save?".into(),
            buttons: vec!["Save".into(), "Cancel".into()],
            ..Default::default()
        };
        assert_eq!(dismissal_index(&options), 1);

        let options = MessageBoxOptions {
            message: "Done".into(),
            ..Default::default()
        };
        assert_eq!(dismissal_index(&options), 0);
    }

    #[test]
    fn start_directory_for_file_is_parent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("input.csv");
        std::fs::write(&file, "a,b").unwrap();

        assert_eq!(start_directory(dir.path().to_str().unwrap()), Some(dir.path().to_path_buf()));
        assert_eq!(start_directory(file.to_str().unwrap()), Some(dir.path().to_path_buf()));
        assert_eq!(start_directory(""), None);
        assert_eq!(start_directory("/nonexistent/setops/x.csv"), None);
    }

    #[test]
    fn message_levels() {
        assert_eq!(message_level(MessageType::Error), MessageLevel::Error);
        assert_eq!(message_level(MessageType::Warning), MessageLevel::Warning);
        assert_eq!(message_level(MessageType::Question), MessageLevel::Info);
        assert_eq!(message_level(MessageType::None), MessageLevel::Info);
    }
}
