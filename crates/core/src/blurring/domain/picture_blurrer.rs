use crate::shared::blur_radius::BlurRadius;
use crate::shared::picture::Picture;

/// Domain interface for blurring a whole picture.
///
/// Implementations are pure: the input is left untouched and a new picture
/// with identical dimensions is returned. Radius zero must return the input
/// pixels unchanged.
pub trait PictureBlurrer: Send {
    fn blur(&self, picture: &Picture, radius: BlurRadius) -> Picture;

    /// Blurs when a picture is loaded; no picture yields no result.
    fn blur_loaded(&self, picture: Option<&Picture>, radius: BlurRadius) -> Option<Picture> {
        picture.map(|p| self.blur(p, radius))
    }
}
