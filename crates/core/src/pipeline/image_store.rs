use std::path::{Path, PathBuf};

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::blur_radius::BlurRadius;
use crate::shared::error::PictureError;
use crate::shared::picture::Picture;

/// The single loaded picture and the radius chosen for it.
///
/// What is stored always matches what the user sees: a cancelled or failed
/// open leaves nothing loaded, and the radius is pinned to zero until a
/// picture is present.
#[derive(Debug, Default)]
pub struct ImageStore {
    picture: Option<Picture>,
    source_path: Option<PathBuf>,
    radius: BlurRadius,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `path` and replaces the current picture, resetting the radius.
    pub fn open(
        &mut self,
        reader: &dyn ImageReader,
        path: &Path,
    ) -> Result<&Picture, PictureError> {
        self.radius = BlurRadius::ZERO;
        match reader.read(path) {
            Ok(picture) => {
                self.source_path = Some(path.to_path_buf());
                Ok(self.picture.insert(picture))
            }
            Err(e) => {
                log::warn!("Could not open {}: {e}", path.display());
                self.clear();
                Err(e)
            }
        }
    }

    /// Open dialog was dismissed.
    pub fn cancel_open(&mut self) {
        self.clear();
    }

    /// Stores a new radius and returns the one actually in effect.
    pub fn set_radius(&mut self, value: i64) -> BlurRadius {
        self.radius = if self.picture.is_some() {
            BlurRadius::clamped(value)
        } else {
            BlurRadius::ZERO
        };
        self.radius
    }

    pub fn picture(&self) -> Option<&Picture> {
        self.picture.as_ref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn radius(&self) -> BlurRadius {
        self.radius
    }

    pub fn is_loaded(&self) -> bool {
        self.picture.is_some()
    }

    fn clear(&mut self) {
        self.picture = None;
        self.source_path = None;
        self.radius = BlurRadius::ZERO;
    }
}
