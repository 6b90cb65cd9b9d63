use std::path::{Path, PathBuf};

use blur_image_core::shared::constants::{JPEG_EXTENSIONS, PNG_EXTENSIONS};

fn image_dialog(title: &str, start_dir: Option<PathBuf>) -> rfd::AsyncFileDialog {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter("JPG file", JPEG_EXTENSIONS)
        .add_filter("PNG file", PNG_EXTENSIONS);
    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }
    dialog
}

/// Ask for an existing JPEG/PNG file. `None` when the dialog is dismissed.
pub async fn pick_image(start_dir: Option<PathBuf>) -> Option<PathBuf> {
    image_dialog("Open image file", start_dir)
        .pick_file()
        .await
        .map(|h| h.path().to_path_buf())
}

/// Ask for a destination path. `None` when the dialog is dismissed.
pub async fn save_image(start_dir: Option<PathBuf>, file_name: String) -> Option<PathBuf> {
    image_dialog("Save file", start_dir)
        .set_file_name(file_name)
        .save_file()
        .await
        .map(|h| h.path().to_path_buf())
}

/// Suggested destination name: `{stem}_blurred.{ext}`.
pub fn suggested_file_name(source: Option<&Path>) -> String {
    let Some(source) = source else {
        return "blurred.png".to_string();
    };
    let stem = source
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let ext = source
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_else(|| "png".to_string());
    format!("{stem}_blurred.{ext}")
}

/// Some platforms return the typed name without the filter's extension.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("png")
    }
}
