use crate::foundation::error::{ArticulateError, ArticulateResult};

pub use glam::{DMat4, DVec3};

/// Straight (non-premultiplied) RGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Build a color from its channels. No range check; see [`Rgb::validate`].
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Quantize to 8-bit channels, rounding to nearest.
    pub fn to_rgb8(self) -> [u8; 3] {
        fn q(c: f32) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Reject non-finite channels and channels outside `[0, 1]`.
    pub fn validate(self, field: &str) -> ArticulateResult<()> {
        for (name, c) in [("r", self.r), ("g", self.g), ("b", self.b)] {
            if !c.is_finite() || !(0.0..=1.0).contains(&c) {
                return Err(ArticulateError::validation(format!(
                    "{field}.{name} must be finite and within [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Check that all three components of an authored vector are finite.
pub(crate) fn validate_finite3(v: [f64; 3], field: &str) -> ArticulateResult<()> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(ArticulateError::validation(format!(
            "{field} must have finite components"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
