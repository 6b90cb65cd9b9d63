use std::path::Path;

use image::ImageFormat;

use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::error::PictureError;
use crate::shared::picture::Picture;

/// Writes a picture as PNG (alpha kept) or JPEG (alpha dropped).
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Output format selected by the destination's extension.
pub fn format_for(path: &Path) -> Result<ImageFormat, PictureError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => Ok(ImageFormat::Png),
        Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
        _ => Err(PictureError::UnsupportedFormat(path.to_path_buf())),
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, picture: &Picture) -> Result<(), PictureError> {
        let format = format_for(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| PictureError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let rgba = picture.to_rgba_image();
        let result = match format {
            ImageFormat::Jpeg => image::DynamicImage::ImageRgba8(rgba)
                .into_rgb8()
                .save_with_format(path, format),
            _ => rgba.save_with_format(path, format),
        };
        result.map_err(|source| PictureError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Wrote {} as {:?}", path.display(), format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn make_picture(width: u32, height: u32, rgba: [u8; 4]) -> Picture {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..(width * height) {
            data.extend_from_slice(&rgba);
        }
        Picture::new(data, width, height).unwrap()
    }

    #[rstest]
    #[case("out.png", ImageFormat::Png)]
    #[case("out.PNG", ImageFormat::Png)]
    #[case("out.jpg", ImageFormat::Jpeg)]
    #[case("out.jpeg", ImageFormat::Jpeg)]
    fn test_format_for_known_extensions(#[case] name: &str, #[case] expected: ImageFormat) {
        assert_eq!(format_for(Path::new(name)).unwrap(), expected);
    }

    #[rstest]
    #[case("out.bmp")]
    #[case("out")]
    fn test_format_for_unknown_extension(#[case] name: &str) {
        assert!(matches!(
            format_for(Path::new(name)),
            Err(PictureError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_png_roundtrip_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let picture = make_picture(20, 10, [50, 100, 200, 128]);
        ImageFileWriter::new().write(&path, &picture).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (20, 10));
        assert_eq!(img.get_pixel(0, 0).0, [50, 100, 200, 128]);
    }

    #[test]
    fn test_jpeg_written_without_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let picture = make_picture(16, 16, [120, 120, 120, 64]);
        ImageFileWriter::new().write(&path, &picture).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (16, 16));
        assert!(!img.color().has_alpha());
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.png");
        ImageFileWriter::new()
            .write(&path, &make_picture(4, 4, [0, 0, 0, 255]))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unsupported_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        let result = ImageFileWriter::new().write(&path, &make_picture(4, 4, [0, 0, 0, 255]));
        assert!(matches!(result, Err(PictureError::UnsupportedFormat(_))));
        assert!(!path.exists());
    }
}
