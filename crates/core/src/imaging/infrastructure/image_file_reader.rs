use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::error::PictureError;
use crate::shared::picture::Picture;

/// Reads JPEG and PNG files with the `image` crate.
///
/// The format is sniffed from the file contents, so a PNG saved with a
/// `.jpg` name still opens.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Picture, PictureError> {
        let reader = image::ImageReader::open(path)
            .map_err(|source| PictureError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .with_guessed_format()
            .map_err(|source| PictureError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let decoded = reader.decode().map_err(|source| PictureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let picture = Picture::from_dynamic(decoded);
        log::info!(
            "Decoded {} ({}x{})",
            path.display(),
            picture.width(),
            picture.height()
        );
        Ok(picture)
    }
}
