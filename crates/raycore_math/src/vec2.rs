//! 2D Vector type

use bytemuck::{Pod, Zeroable};
use crate::fields::{impl_field_vector, ComponentFields};
use crate::Real;

/// 2D Vector with x, y components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vector2 {
    pub x: Real,
    pub y: Real,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new Vector2
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }
}

impl ComponentFields<2> for Vector2 {
    type Scalar = Real;

    #[inline]
    fn fields(&self) -> [Real; 2] {
        [self.x, self.y]
    }

    #[inline]
    fn fields_mut(&mut self) -> [&mut Real; 2] {
        [&mut self.x, &mut self.y]
    }
}

impl_field_vector!(Vector2: [Real; 2]);
