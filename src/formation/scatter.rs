use std::f32::consts::TAU;
use crate::error::Result;
use crate::math::Vec3;
use crate::random::RandomSource;
use super::positive_dimension;

/// Height of the scatter sphere's centre above the ground
pub const SCATTER_LIFT: f32 = 5.0;

/// Sphere that scattered particles are sampled from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterVolume {
    pub radius: f32,
    pub center: Vec3,
}

impl Default for ScatterVolume {
    fn default() -> Self {
        Self {
            radius: 15.0,
            center: Vec3::new(0.0, SCATTER_LIFT, 0.0),
        }
    }
}

impl ScatterVolume {
    pub fn new(radius: f32) -> Result<Self> {
        Ok(Self {
            radius: positive_dimension("scatter_radius", radius)?,
            center: Vec3::new(0.0, SCATTER_LIFT, 0.0),
        })
    }

    /// Uniform-in-volume sample: uniform solid angle, cube-root radius
    pub fn sample(&self, rng: &mut dyn RandomSource) -> Vec3 {
        let u = rng.next_f32();
        let v = rng.next_f32();
        let theta = TAU * u;
        let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
        let r = self.radius * rng.next_f32().cbrt();

        self.center
            + Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            )
    }

    pub fn contains(&self, point: Vec3, epsilon: f32) -> bool {
        point.distance(&self.center) <= self.radius + epsilon
    }
}
