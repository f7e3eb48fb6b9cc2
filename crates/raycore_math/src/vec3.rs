//! 3D Vector type
//!
//! Unlike [`Vector2`](crate::Vector2) and [`Vector4`](crate::Vector4), this
//! type does not go through the field-driven implementation. Every operation
//! is written out per component since this is the type the renderer's inner
//! loops run on.

use bytemuck::{Pod, Zeroable};
use crate::vector::{impl_vector_ops, Vector};
use crate::Real;

/// 3D Vector with x, y, z components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vector3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vector3
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Vector for Vector3 {
    type Scalar = Real;

    #[inline]
    fn add_in_place(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }

    #[inline]
    fn scale_in_place(&mut self, s: Real) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }

    #[inline]
    fn mul_in_place(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
        self.z *= rhs.z;
    }

    #[inline]
    fn dot(self, rhs: Self) -> Real {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    fn squared_sum(self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    fn added(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }

    #[inline]
    fn subtracted(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }

    #[inline]
    fn scaled(self, s: Real) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[inline]
    fn mul_elementwise(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }

    #[inline]
    fn negated(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl_vector_ops!(Vector3);

impl From<[Real; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [Real; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [Real; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}
