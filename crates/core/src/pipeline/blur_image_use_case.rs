use std::path::Path;

use crate::blurring::domain::picture_blurrer::PictureBlurrer;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::pipeline::image_store::ImageStore;
use crate::shared::error::PictureError;

/// Save pipeline: blur the stored original at the stored radius → write.
pub struct BlurImageUseCase {
    blurrer: Box<dyn PictureBlurrer>,
    image_writer: Box<dyn ImageWriter>,
}

impl BlurImageUseCase {
    pub fn new(blurrer: Box<dyn PictureBlurrer>, image_writer: Box<dyn ImageWriter>) -> Self {
        Self {
            blurrer,
            image_writer,
        }
    }

    /// Returns `Ok(false)` without touching the file system when nothing is loaded.
    pub fn execute(&self, store: &ImageStore, output_path: &Path) -> Result<bool, PictureError> {
        let Some(blurred) = self.blurrer.blur_loaded(store.picture(), store.radius()) else {
            log::debug!("Save skipped: no picture loaded");
            return Ok(false);
        };
        self.image_writer.write(output_path, &blurred)?;
        log::info!(
            "Saved {} (radius={})",
            output_path.display(),
            store.radius()
        );
        Ok(true)
    }
}
