use std::path::{Path, PathBuf};

/// Per-session dialog state. Nothing here outlives the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Directory the open/save dialogs start in.
    pub last_directory: Option<PathBuf>,
}

impl Settings {
    /// Remember the folder containing `file` for the next dialog.
    ///
    /// Returns whether anything changed.
    pub fn remember_directory_of(&mut self, file: &Path) -> bool {
        let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) else {
            return false;
        };
        if self.last_directory.as_deref() == Some(dir) {
            return false;
        }
        self.last_directory = Some(dir.to_path_buf());
        true
    }
}
