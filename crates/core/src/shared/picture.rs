use ndarray::ArrayView3;

use super::error::PictureError;

pub const CHANNELS: usize = 4;

/// A decoded image: contiguous straight-alpha RGBA bytes in row-major order.
///
/// Pictures are replaced wholesale; transforms build a new one instead of
/// mutating pixels in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picture {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Picture {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, PictureError> {
        if data.len() != (width as usize) * (height as usize) * CHANNELS {
            return Err(PictureError::BufferSize { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a picture from any decoded image, adding an opaque alpha channel
    /// when the source has none.
    pub fn from_dynamic(img: image::DynamicImage) -> Self {
        let rgba = img.into_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            data: rgba.into_raw(),
            width,
            height,
        }
    }

    pub fn to_rgba_image(&self) -> image::RgbaImage {
        // Length is checked on construction, so this never fails.
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel view indexed as `[row, column, channel]`.
    pub fn as_ndarray(&self) -> Result<ArrayView3<'_, u8>, PictureError> {
        ArrayView3::from_shape(
            (self.height as usize, self.width as usize, CHANNELS),
            &self.data,
        )
        .map_err(|_| PictureError::BufferSize {
            width: self.width,
            height: self.height,
        })
    }
}
