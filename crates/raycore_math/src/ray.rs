//! Parametric rays

use crate::vector::Vector;
use crate::Vector3;

/// A half-line with an origin and a unit-length direction
///
/// The direction is normalized on every write, so [`Ray::direction`] never
/// returns a non-unit vector. A zero-length direction is not rejected; it
/// turns into NaN components, the same as [`Vector::normalized`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray<V: Vector> {
    origin: V,
    direction: V,
}

/// Ray in 3D space
pub type Ray3 = Ray<Vector3>;

impl<V: Vector> Ray<V> {
    /// Create a ray, normalizing `direction`
    #[inline]
    pub fn new(origin: V, direction: V) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Start point of the ray
    #[inline]
    pub fn origin(&self) -> V {
        self.origin
    }

    /// Mutable access to the origin
    ///
    /// The origin has no invariant attached, unlike the direction.
    #[inline]
    pub fn origin_mut(&mut self) -> &mut V {
        &mut self.origin
    }

    /// Unit-length direction of the ray
    #[inline]
    pub fn direction(&self) -> V {
        self.direction
    }

    /// Replace the direction, normalizing it before it is stored
    #[inline]
    pub fn set_direction(&mut self, direction: V) {
        self.direction = direction.normalized();
    }

    /// Point at parameter `t` along the ray
    ///
    /// `origin + t * direction`. Any `t` is accepted, negative values give
    /// points behind the origin.
    #[inline]
    pub fn at(&self, t: V::Scalar) -> V {
        self.origin.added(self.direction.scaled(t))
    }
}
