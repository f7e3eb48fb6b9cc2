//! raycore - vector algebra core for a ray tracer
//!
//! The math lives in [`raycore_math`], re-exported here as [`math`]. This crate
//! adds configuration loading and a ray probe that exercises the core.

pub mod config;
pub mod probe;

pub use raycore_math as math;
