pub mod crash_report;
pub mod dialogs;
pub mod folder;
pub mod paths;

pub use dialogs::{
    DialogProvider, FileDialogSpec, FileFilter, MessageBoxSpec, MessageLevel, NativeDialogs,
};
pub use folder::{open_folder, FolderOpener, SystemFileManager};
pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir};
