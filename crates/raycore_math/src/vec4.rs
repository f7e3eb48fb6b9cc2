//! 4D Vector type

use bytemuck::{Pod, Zeroable};
use crate::fields::{impl_field_vector, ComponentFields};
use crate::Real;

/// 4D Vector with w, x, y, z components
///
/// Components are ordered w first, both in memory and when summing.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vector4 {
    pub w: Real,
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vector4 {
    pub const ZERO: Self = Self { w: 0.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Create a new Vector4
    #[inline]
    pub const fn new(w: Real, x: Real, y: Real, z: Real) -> Self {
        Self { w, x, y, z }
    }
}

impl ComponentFields<4> for Vector4 {
    type Scalar = Real;

    #[inline]
    fn fields(&self) -> [Real; 4] {
        [self.w, self.x, self.y, self.z]
    }

    #[inline]
    fn fields_mut(&mut self) -> [&mut Real; 4] {
        [&mut self.w, &mut self.x, &mut self.y, &mut self.z]
    }
}

impl_field_vector!(Vector4: [Real; 4]);
