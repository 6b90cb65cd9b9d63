pub const MIN_BLUR_RADIUS: u8 = 0;
pub const MAX_BLUR_RADIUS: u8 = 10;

/// Extensions accepted by the open and save dialogs, grouped per filter.
pub const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];
pub const PNG_EXTENSIONS: &[&str] = &["png"];

pub const PLACEHOLDER_TEXT: &str = "Press \"Open image\" to choose picture you want to blur.";
