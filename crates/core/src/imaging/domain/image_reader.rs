use std::path::Path;

use crate::shared::error::PictureError;
use crate::shared::picture::Picture;

/// Decodes an image file into a [`Picture`].
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Picture, PictureError>;
}
