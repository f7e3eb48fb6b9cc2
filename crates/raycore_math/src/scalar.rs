//! Scalar component type

use num_traits::Float;
use std::fmt::Debug;
use std::ops::{AddAssign, MulAssign};

/// The concrete scalar used by every vector in this crate
pub type Real = f64;

/// Numeric type usable as a vector component
///
/// Anything float-like works: the contract only needs addition,
/// multiplication and a square root, all of which come from [`Float`].
pub trait Scalar: Float + Debug + AddAssign + MulAssign {}

impl<T> Scalar for T where T: Float + Debug + AddAssign + MulAssign {}
