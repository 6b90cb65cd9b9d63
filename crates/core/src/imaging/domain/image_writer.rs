use std::path::Path;

use crate::shared::error::PictureError;
use crate::shared::picture::Picture;

/// Writes a picture to disk; the destination extension picks the format.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, picture: &Picture) -> Result<(), PictureError>;
}
