//! Vector types and traits for physics calculations.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// Trait for vector types used in physics calculations.
///
/// Abstracts over dimensionality (2D, 3D) so particles and constraints
/// are written once and shared by every dimension.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Clamp the length to at most `max`, keeping the direction.
    ///
    /// Vectors already shorter than `max` are returned unchanged.
    fn limit(self, max: Self::Scalar) -> Self {
        let len_sq = self.length_sq();
        if len_sq > max * max {
            self.scale(max / len_sq.sqrt())
        } else {
            self
        }
    }

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }

    /// Linear interpolation between self and other.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self).scale(t)
    }
}

/// Component-wise `Add`, `Sub` and `Neg` for a plain float struct.
macro_rules! componentwise_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl<F: Float> Add for $ty<F> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self { $ty { $($field: self.$field + rhs.$field),+ } }
        }

        impl<F: Float> Sub for $ty<F> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self { $ty { $($field: self.$field - rhs.$field),+ } }
        }

        impl<F: Float> Neg for $ty<F> {
            type Output = Self;
            fn neg(self) -> Self { $ty { $($field: -self.$field),+ } }
        }
    };
}

/// 2D vector for planar scenes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

componentwise_ops!(Vec2 { x, y });

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2::new(F::zero(), F::zero()) }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2::new(self.x * s, self.y * s) }
}

/// 3D vector for spatial scenes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }
}

componentwise_ops!(Vec3 { x, y, z });

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    fn zero() -> Self { Vec3::new(F::zero(), F::zero(), F::zero()) }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y + self.z * other.z }
    fn scale(self, s: F) -> Self { Vec3::new(self.x * s, self.y * s, self.z * s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vec3_length() {
        let v = Vec3::new(2.0f32, 3.0, 6.0);
        assert_relative_eq!(v.length(), 7.0, epsilon = 1e-6);
    }

    #[test]
    fn limit_shortens_long_vector() {
        let v = Vec2::new(30.0f32, 40.0).limit(5.0);
        assert_relative_eq!(v.x, 3.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 4.0, epsilon = 1e-6);
    }

    #[test]
    fn limit_keeps_short_vector() {
        let v = Vec3::new(0.1f64, -0.2, 0.3);
        assert_eq!(v.limit(1.0), v);
    }

    #[test]
    fn limit_zero_vector() {
        let v = Vec2::<f32>::zero();
        assert_eq!(v.limit(0.5), Vec2::zero());
    }

    #[test]
    fn limit_keeps_direction_of_negative_vector() {
        let v = Vec3::new(0.0f32, -10.0, 0.0).limit(2.0);
        assert_eq!(v, Vec3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn negation_and_difference() {
        let a = Vec3::new(1.0f64, -2.0, 3.0);
        assert_eq!(-a, Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(a - a, Vec3::zero());
    }

    #[test]
    fn lerp_midpoint() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(10.0f32, 10.0);
        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-6);
        assert_relative_eq!(mid.y, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert_relative_eq!(a.distance(b), 5.0, epsilon = 1e-6);
    }
}
