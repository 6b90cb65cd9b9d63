use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PictureError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported image format for {0} (expected .jpg, .jpeg or .png)")]
    UnsupportedFormat(PathBuf),
    #[error("blur radius {0} is outside 0..=10")]
    InvalidRadius(u8),
    #[error("pixel buffer does not match {width}x{height} RGBA")]
    BufferSize { width: u32, height: u32 },
}
