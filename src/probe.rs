//! Ray probing
//!
//! Builds rays from configuration and evaluates them at a list of parameters.
//! The math core never validates its inputs, so rays whose direction cannot
//! be normalized to unit length are rejected here before they are constructed.

use std::fmt;

use raycore_math::{Ray3, Real, Vector, Vector3};

use crate::config::{ProbeConfig, ProbeRayConfig};

/// Error type for probe setup
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeError {
    /// Ray direction does not normalize to unit length
    ///
    /// Covers true zero vectors as well as directions so small or so large
    /// that the squared norm underflows or overflows.
    ZeroDirection { index: usize },
    /// Ray origin or direction contains NaN or infinity
    NonFinite { index: usize },
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::ZeroDirection { index } => {
                write!(f, "Probe ray {} has a direction that cannot be normalized", index)
            }
            ProbeError::NonFinite { index } => {
                write!(f, "Probe ray {} has a non-finite component", index)
            }
        }
    }
}

impl std::error::Error for ProbeError {}

/// A point sampled along a probe ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSample {
    /// Index of the ray in the probe configuration
    pub ray: usize,
    /// Ray parameter
    pub t: Real,
    /// `origin + t * direction`
    pub point: Vector3,
}

/// Allowed deviation from unit length after normalization
const UNIT_EPSILON: Real = 1e-9;

fn is_finite(v: Vector3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

/// Build a single ray from its configuration
pub fn build_ray(index: usize, config: &ProbeRayConfig) -> Result<Ray3, ProbeError> {
    let origin = Vector3::from(config.origin);
    let direction = Vector3::from(config.direction);

    if !is_finite(origin) || !is_finite(direction) {
        return Err(ProbeError::NonFinite { index });
    }

    let ray = Ray3::new(origin, direction);
    let unit = ray.direction();
    if !is_finite(unit) || (unit.norm() - 1.0).abs() > UNIT_EPSILON {
        return Err(ProbeError::ZeroDirection { index });
    }

    Ok(ray)
}

/// Build all configured rays, failing on the first invalid one
pub fn build_rays(config: &ProbeConfig) -> Result<Vec<Ray3>, ProbeError> {
    config
        .rays
        .iter()
        .enumerate()
        .map(|(i, ray)| build_ray(i, ray))
        .collect()
}

/// Evaluate every ray at every parameter, ray-major
pub fn sample(rays: &[Ray3], ts: &[Real]) -> Vec<ProbeSample> {
    rays.iter()
        .enumerate()
        .flat_map(|(i, ray)| {
            ts.iter().map(move |&t| ProbeSample {
                ray: i,
                t,
                point: ray.at(t),
            })
        })
        .collect()
}

/// Build the configured rays and sample them
pub fn run(config: &ProbeConfig) -> Result<Vec<ProbeSample>, ProbeError> {
    let rays = build_rays(config)?;
    log::info!(
        "Probing {} rays at {} parameters",
        rays.len(),
        config.samples.len()
    );

    for (i, ray) in rays.iter().enumerate() {
        let d = ray.direction();
        log::debug!(
            "Ray {}: origin ({:.3}, {:.3}, {:.3}), direction ({:.3}, {:.3}, {:.3})",
            i,
            ray.origin().x,
            ray.origin().y,
            ray.origin().z,
            d.x,
            d.y,
            d.z
        );
    }

    let samples = sample(&rays, &config.samples);
    for s in &samples {
        log::info!(
            "ray {} t={:.3} -> ({:.3}, {:.3}, {:.3})",
            s.ray,
            s.t,
            s.point.x,
            s.point.y,
            s.point.z
        );
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray_config(origin: [f64; 3], direction: [f64; 3]) -> ProbeRayConfig {
        ProbeRayConfig { origin, direction }
    }

    #[test]
    fn test_build_ray_normalizes() {
        let ray = build_ray(0, &ray_config([0.0, 0.0, 0.0], [0.0, 0.0, 5.0])).unwrap();
        assert_eq!(ray.direction(), Vector3::Z);
    }

    #[test]
    fn test_build_ray_zero_direction() {
        let err = build_ray(3, &ray_config([1.0, 1.0, 1.0], [0.0, 0.0, 0.0])).unwrap_err();
        assert_eq!(err, ProbeError::ZeroDirection { index: 3 });
        assert!(err.to_string().contains("cannot be normalized"));
    }

    #[test]
    fn test_build_ray_direction_overflows_norm() {
        // Squared norm overflows to infinity, normalizing would give (0, 0, 0)
        let err = build_ray(0, &ray_config([0.0; 3], [1e200, 0.0, 0.0])).unwrap_err();
        assert_eq!(err, ProbeError::ZeroDirection { index: 0 });
    }

    #[test]
    fn test_build_ray_direction_underflows_norm() {
        // Squared norm underflows to zero, normalizing would give infinity
        let err = build_ray(4, &ray_config([0.0; 3], [1e-200, 0.0, 0.0])).unwrap_err();
        assert_eq!(err, ProbeError::ZeroDirection { index: 4 });
    }

    #[test]
    fn test_build_ray_accepts_large_and_small_directions() {
        let ray = build_ray(0, &ray_config([0.0; 3], [1e100, 0.0, 0.0])).unwrap();
        assert!((ray.direction().norm() - 1.0).abs() < UNIT_EPSILON);

        let ray = build_ray(0, &ray_config([0.0; 3], [0.0, 1e-100, 0.0])).unwrap();
        assert!((ray.direction().norm() - 1.0).abs() < UNIT_EPSILON);
    }

    #[test]
    fn test_build_ray_non_finite() {
        let err = build_ray(1, &ray_config([f64::NAN, 0.0, 0.0], [1.0, 0.0, 0.0])).unwrap_err();
        assert_eq!(err, ProbeError::NonFinite { index: 1 });

        let err = build_ray(2, &ray_config([0.0; 3], [f64::INFINITY, 0.0, 0.0])).unwrap_err();
        assert_eq!(err, ProbeError::NonFinite { index: 2 });
    }

    #[test]
    fn test_build_rays_reports_first_bad_index() {
        let config = ProbeConfig {
            rays: vec![
                ray_config([0.0; 3], [1.0, 0.0, 0.0]),
                ray_config([0.0; 3], [0.0, 0.0, 0.0]),
            ],
            samples: vec![1.0],
        };
        assert_eq!(build_rays(&config).unwrap_err(), ProbeError::ZeroDirection { index: 1 });
    }

    #[test]
    fn test_sample_is_ray_major() {
        let rays = vec![
            Ray3::new(Vector3::ZERO, Vector3::Z),
            Ray3::new(Vector3::X, Vector3::Y),
        ];
        let samples = sample(&rays, &[0.0, 2.0]);
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0].point, Vector3::ZERO);
        assert_eq!(samples[1].point, Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(samples[2].ray, 1);
        assert_eq!(samples[3].point, Vector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_run_default_config() {
        let samples = run(&ProbeConfig::default()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].point, Vector3::Z);
    }
}
