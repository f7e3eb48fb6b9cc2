//! The vector contract
//!
//! A vector type only has to provide a handful of in-place primitives plus
//! the dot product and squared sum. Everything else (negation, subtraction,
//! division, norm, normalization and the out-of-place operators) is derived
//! from those primitives by default methods, so a new vector type gets the
//! full operation set for free. Types that can do better, like [`Vector3`],
//! override the defaults.
//!
//! [`Vector3`]: crate::Vector3

use crate::scalar::Scalar;
use num_traits::{Float, One, Zero};

/// Operations every vector type supports
///
/// None of these operations fail. Dividing by a zero scalar or normalizing a
/// zero-length vector yields infinite or NaN components, which propagate
/// silently through later arithmetic.
pub trait Vector: Copy {
    /// Component type
    type Scalar: Scalar;

    /// `self += rhs`
    fn add_in_place(&mut self, rhs: Self);

    /// `self *= s`
    fn scale_in_place(&mut self, s: Self::Scalar);

    /// Component-wise `self *= rhs`
    fn mul_in_place(&mut self, rhs: Self);

    /// Dot product
    fn dot(self, rhs: Self) -> Self::Scalar;

    /// Sum of the squared components (the squared norm)
    fn squared_sum(self) -> Self::Scalar;

    /// `self + rhs`
    #[inline]
    fn added(self, rhs: Self) -> Self {
        let mut out = self;
        out.add_in_place(rhs);
        out
    }

    /// `self * s`
    #[inline]
    fn scaled(self, s: Self::Scalar) -> Self {
        let mut out = self;
        out.scale_in_place(s);
        out
    }

    /// Component-wise multiplication (Hadamard product)
    #[inline]
    fn mul_elementwise(self, rhs: Self) -> Self {
        let mut out = self;
        out.mul_in_place(rhs);
        out
    }

    /// `-self`, computed as `-1 * self`
    #[inline]
    fn negated(self) -> Self {
        self.scaled(-Self::Scalar::one())
    }

    /// `self - rhs`, computed as `self + (-rhs)`
    #[inline]
    fn subtracted(self, rhs: Self) -> Self {
        self.added(rhs.negated())
    }

    /// `self / s`, computed as `self * (1 / s)`
    #[inline]
    fn divided(self, s: Self::Scalar) -> Self {
        self.scaled(Self::Scalar::one() / s)
    }

    /// Euclidean length
    #[inline]
    fn norm(self) -> Self::Scalar {
        self.squared_sum().sqrt()
    }

    /// Scale to unit length
    ///
    /// A zero vector is not guarded against: the result is NaN in every
    /// component.
    #[inline]
    fn normalized(self) -> Self {
        self.scaled(Self::Scalar::one() / self.norm())
    }

    /// Linear interpolation, `self` at `t = 0` and `other` at `t = 1`
    #[inline]
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self.added(other.subtracted(self).scaled(t))
    }

    /// Euclidean distance between two points
    #[inline]
    fn distance(self, other: Self) -> Self::Scalar {
        self.subtracted(other).norm()
    }

    /// True if the squared norm is exactly zero
    ///
    /// Components small enough for their squares to underflow count as zero,
    /// so `(1e-200, 0, 0)` is reported as zero.
    #[inline]
    fn is_zero(self) -> bool {
        self.squared_sum() == Self::Scalar::zero()
    }
}

/// Binds the arithmetic operators of a [`Vector`] to its contract methods
///
/// Expects the type to use [`Real`](crate::Real) components.
macro_rules! impl_vector_ops {
    ($ty:ident) => {
        impl ::std::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $crate::vector::Vector::add_in_place(self, rhs)
            }
        }

        impl ::std::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = $crate::vector::Vector::subtracted(*self, rhs)
            }
        }

        impl ::std::ops::MulAssign<$crate::Real> for $ty {
            #[inline]
            fn mul_assign(&mut self, s: $crate::Real) {
                $crate::vector::Vector::scale_in_place(self, s)
            }
        }

        impl ::std::ops::MulAssign for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                $crate::vector::Vector::mul_in_place(self, rhs)
            }
        }

        impl ::std::ops::DivAssign<$crate::Real> for $ty {
            #[inline]
            fn div_assign(&mut self, s: $crate::Real) {
                *self = $crate::vector::Vector::divided(*self, s)
            }
        }

        impl ::std::ops::Add for $ty {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                $crate::vector::Vector::added(self, rhs)
            }
        }

        impl ::std::ops::Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $crate::vector::Vector::subtracted(self, rhs)
            }
        }

        impl ::std::ops::Mul<$crate::Real> for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, s: $crate::Real) -> Self {
                $crate::vector::Vector::scaled(self, s)
            }
        }

        impl ::std::ops::Mul<$ty> for $crate::Real {
            type Output = $ty;
            #[inline]
            fn mul(self, v: $ty) -> $ty {
                $crate::vector::Vector::scaled(v, self)
            }
        }

        impl ::std::ops::Mul for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                $crate::vector::Vector::mul_elementwise(self, rhs)
            }
        }

        impl ::std::ops::Div<$crate::Real> for $ty {
            type Output = Self;
            #[inline]
            fn div(self, s: $crate::Real) -> Self {
                $crate::vector::Vector::divided(self, s)
            }
        }

        impl ::std::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                $crate::vector::Vector::negated(self)
            }
        }
    };
}

pub(crate) use impl_vector_ops;
