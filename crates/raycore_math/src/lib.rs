//! Vector algebra for the raycore renderer
//!
//! This crate provides the fixed-size vector types and the ray type that the
//! rest of the renderer computes with.
//!
//! ## Core Types
//!
//! - [`Vector`] - The operation contract shared by every vector type
//! - [`Vector2`] - 2D vector with x, y components
//! - [`Vector3`] - 3D vector with x, y, z components and a cross product
//! - [`Vector4`] - 4D vector with w, x, y, z components
//! - [`Ray`] - Origin plus unit direction, evaluated with [`Ray::at`]
//!
//! [`Vector2`] and [`Vector4`] are built from [`ComponentFields`], a generic
//! per-component implementation. [`Vector3`] is written out by hand.
//!
//! Nothing here validates its inputs. Dividing by zero or normalizing a zero
//! vector produces infinite or NaN components.

mod scalar;
mod vector;
pub mod fields;
mod vec2;
mod vec3;
mod vec4;
pub mod ray;

pub use scalar::{Real, Scalar};
pub use vector::Vector;
pub use fields::ComponentFields;
pub use vec2::Vector2;
pub use vec3::Vector3;
pub use vec4::Vector4;
pub use ray::{Ray, Ray3};
