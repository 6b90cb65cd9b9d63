use crate::blurring::domain::picture_blurrer::PictureBlurrer;
use crate::shared::blur_radius::BlurRadius;
use crate::shared::picture::Picture;

use super::gaussian;

/// Whole-picture Gaussian blur on the CPU.
///
/// The picture is premultiplied onto a transparent surface of the same size,
/// blurred with a separable kernel of half-width `radius`, and converted back
/// to straight alpha. Pixels near the border pick up transparency from the
/// empty surroundings, so edges fade rather than clip.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuGaussianBlurrer;

impl CpuGaussianBlurrer {
    pub fn new() -> Self {
        Self
    }
}

impl PictureBlurrer for CpuGaussianBlurrer {
    fn blur(&self, picture: &Picture, radius: BlurRadius) -> Picture {
        if radius.is_zero() || picture.width() == 0 || picture.height() == 0 {
            return picture.clone();
        }

        let (width, height) = (picture.width() as usize, picture.height() as usize);
        let kernel = gaussian::gaussian_kernel_1d(radius.value() as usize, radius.sigma());
        log::debug!(
            "Blurring {}x{} picture (radius={}, taps={})",
            width,
            height,
            radius,
            kernel.len()
        );

        let pixels = match picture.as_ndarray() {
            Ok(view) => view,
            Err(e) => {
                log::warn!("Skipping blur: {e}");
                return picture.clone();
            }
        };
        let mut surface = gaussian::premultiply(pixels);
        gaussian::separable_gaussian_blur_transparent(&mut surface, &kernel);
        let pixels = gaussian::unpremultiply(&surface);

        Picture::new(pixels, picture.width(), picture.height())
            .unwrap_or_else(|_| picture.clone())
    }
}
