use super::constants::{MAX_BLUR_RADIUS, MIN_BLUR_RADIUS};
use super::error::PictureError;

/// Blur strength in whole steps, always within `0..=10`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlurRadius(u8);

impl BlurRadius {
    pub const ZERO: BlurRadius = BlurRadius(MIN_BLUR_RADIUS);
    pub const MAX: BlurRadius = BlurRadius(MAX_BLUR_RADIUS);

    /// Rejects values outside the supported range.
    pub fn new(value: u8) -> Result<Self, PictureError> {
        if value > MAX_BLUR_RADIUS {
            return Err(PictureError::InvalidRadius(value));
        }
        Ok(Self(value))
    }

    /// Saturates out-of-range values to the nearest bound.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(MIN_BLUR_RADIUS as i64, MAX_BLUR_RADIUS as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Gaussian sigma used for this radius.
    ///
    /// Radius counts pixels of spread on each side; three sigma covers it.
    pub fn sigma(self) -> f32 {
        self.0 as f32 / 3.0
    }
}

impl std::fmt::Display for BlurRadius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
