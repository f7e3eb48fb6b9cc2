//! Field-driven vector implementation
//!
//! Any struct that can hand out its components as a fixed-size array of
//! mutable references gets the required [`Vector`](crate::Vector) primitives
//! from the generic functions below. The array order is the component order
//! used when accumulating sums, which only affects floating-point rounding.

use crate::scalar::Scalar;
use num_traits::Zero;

/// Ordered access to the `N` scalar components of a vector
pub trait ComponentFields<const N: usize>: Copy {
    /// Component type
    type Scalar: Scalar;

    /// Component values, in component order
    fn fields(&self) -> [Self::Scalar; N];

    /// Mutable references to the components, in component order
    fn fields_mut(&mut self) -> [&mut Self::Scalar; N];
}

/// `lhs += rhs`, per component
#[inline]
pub fn add_assign<V, const N: usize>(lhs: &mut V, rhs: &V)
where
    V: ComponentFields<N>,
{
    for (l, r) in lhs.fields_mut().into_iter().zip(rhs.fields()) {
        *l += r;
    }
}

/// `v *= s`, per component
#[inline]
pub fn scale_assign<V, const N: usize>(v: &mut V, s: V::Scalar)
where
    V: ComponentFields<N>,
{
    for c in v.fields_mut() {
        *c *= s;
    }
}

/// `lhs *= rhs`, per component
#[inline]
pub fn mul_assign<V, const N: usize>(lhs: &mut V, rhs: &V)
where
    V: ComponentFields<N>,
{
    for (l, r) in lhs.fields_mut().into_iter().zip(rhs.fields()) {
        *l *= r;
    }
}

/// Sum of pairwise component products, starting from zero
#[inline]
pub fn dot<V, const N: usize>(lhs: &V, rhs: &V) -> V::Scalar
where
    V: ComponentFields<N>,
{
    lhs.fields()
        .into_iter()
        .zip(rhs.fields())
        .fold(V::Scalar::zero(), |acc, (l, r)| acc + l * r)
}

/// Sum of each component squared
#[inline]
pub fn squared_sum<V, const N: usize>(v: &V) -> V::Scalar
where
    V: ComponentFields<N>,
{
    v.fields()
        .into_iter()
        .fold(V::Scalar::zero(), |acc, c| acc + c * c)
}

/// Implements [`Vector`](crate::Vector) for a [`ComponentFields`] struct
///
/// Also binds the arithmetic operators and the array conversions. The type
/// must implement `Default`.
macro_rules! impl_field_vector {
    ($ty:ident: [$scalar:ty; $n:literal]) => {
        impl $crate::vector::Vector for $ty {
            type Scalar = $scalar;

            #[inline]
            fn add_in_place(&mut self, rhs: Self) {
                $crate::fields::add_assign::<Self, $n>(self, &rhs)
            }

            #[inline]
            fn scale_in_place(&mut self, s: $scalar) {
                $crate::fields::scale_assign::<Self, $n>(self, s)
            }

            #[inline]
            fn mul_in_place(&mut self, rhs: Self) {
                $crate::fields::mul_assign::<Self, $n>(self, &rhs)
            }

            #[inline]
            fn dot(self, rhs: Self) -> $scalar {
                $crate::fields::dot::<Self, $n>(&self, &rhs)
            }

            #[inline]
            fn squared_sum(self) -> $scalar {
                $crate::fields::squared_sum::<Self, $n>(&self)
            }
        }

        impl From<[$scalar; $n]> for $ty {
            #[inline]
            fn from(components: [$scalar; $n]) -> Self {
                let mut out = <$ty as Default>::default();
                let fields = $crate::fields::ComponentFields::<$n>::fields_mut(&mut out);
                for (f, c) in fields.into_iter().zip(components) {
                    *f = c;
                }
                out
            }
        }

        impl From<$ty> for [$scalar; $n] {
            #[inline]
            fn from(v: $ty) -> Self {
                $crate::fields::ComponentFields::<$n>::fields(&v)
            }
        }

        $crate::vector::impl_vector_ops!($ty);
    };
}

pub(crate) use impl_field_vector;
