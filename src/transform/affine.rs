//! 4x4 affine transform value type.

use std::ops::Mul;

use crate::foundation::core::{DMat4, DVec3};

/// Affine map stored as a 4x4 column-major matrix acting on column vectors.
///
/// `a * b` applies `b` first, then `a`. Values are immutable: every
/// constructor and operation returns a new transform.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Transform(DMat4);

impl Transform {
    /// The multiplicative identity.
    pub const IDENTITY: Self = Self(DMat4::IDENTITY);

    /// Same as [`Transform::IDENTITY`].
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Wrap a raw matrix.
    #[inline]
    pub fn from_matrix(m: DMat4) -> Self {
        Self(m)
    }

    /// The underlying matrix.
    #[inline]
    pub fn matrix(self) -> DMat4 {
        self.0
    }

    /// Pure translation by `v`.
    #[inline]
    pub fn translation(v: DVec3) -> Self {
        Self(DMat4::from_translation(v))
    }

    /// Pure rotation of `angle_degrees` about `axis`, right-handed.
    ///
    /// `axis` need not be unit length but must be non-zero and finite. A zero
    /// axis is a caller bug: it trips a debug assertion and yields NaNs in
    /// release builds.
    pub fn rotation(angle_degrees: f64, axis: DVec3) -> Self {
        debug_assert!(
            axis.is_finite() && axis.length_squared() > 0.0,
            "rotation axis must be non-zero and finite, got {axis}"
        );
        Self(DMat4::from_axis_angle(
            axis.normalize(),
            angle_degrees.to_radians(),
        ))
    }

    /// Pure (possibly non-uniform) scale.
    #[inline]
    pub fn scale(v: DVec3) -> Self {
        Self(DMat4::from_scale(v))
    }

    /// `a * b`: apply `b` first, then `a`.
    #[inline]
    pub fn compose(a: Self, b: Self) -> Self {
        Self(a.0 * b.0)
    }

    /// Map a point (w = 1).
    #[inline]
    pub fn transform_point(self, p: DVec3) -> DVec3 {
        self.0.transform_point3(p)
    }

    /// Image of the origin.
    #[inline]
    pub fn translation_part(self) -> DVec3 {
        self.0.w_axis.truncate()
    }

    /// Element-wise comparison within `eps`.
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        self.0.abs_diff_eq(other.0, eps)
    }

    /// Whether every element is finite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Elements in column-major order.
    pub fn to_cols_array(self) -> [f64; 16] {
        self.0.to_cols_array()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform {
    type Output = Transform;

    #[inline]
    fn mul(self, rhs: Transform) -> Transform {
        Transform::compose(self, rhs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
