use std::f32::consts::TAU;
use crate::data::Color;
use crate::error::Result;
use crate::math::Vec3;
use crate::particles::{Particle, SystemKind};
use crate::random::RandomSource;
use super::{positive_count, positive_dimension, random_phase, Formation, ScatterVolume, TreeShape, LAYER_BASE_HEIGHT};

pub const DEFAULT_LIGHT_COUNT: usize = 200;
pub const DEFAULT_SPIRAL_LOOPS: f32 = 8.0;
/// The spiral stops short of the apex to stay on the foliage
pub const SPIRAL_HEIGHT_COMPRESSION: f32 = 0.95;
/// Lights wrap slightly outside the crystals
pub const SPIRAL_RADIUS_OFFSET: f32 = 1.05;
pub const LIGHT_SCALE: f32 = 0.04;

/// Fairy lights wound around the tree in one continuous spiral
#[derive(Debug, Clone)]
pub struct FairyLightFormation {
    count: usize,
    loops: f32,
    shape: TreeShape,
    scatter: ScatterVolume,
    color: Color,
}

impl FairyLightFormation {
    pub fn new(
        count: usize,
        loops: f32,
        shape: TreeShape,
        scatter: ScatterVolume,
        color: Color,
    ) -> Result<Self> {
        Ok(Self {
            count: positive_count("fairy_lights.count", count)?,
            loops: positive_dimension("fairy_lights.loops", loops)?,
            shape,
            scatter,
            color,
        })
    }

    /// Point on the spiral at `t` in `[0, 1)`
    fn spiral_point(&self, t: f32) -> Vec3 {
        let height = t * self.shape.total_height * SPIRAL_HEIGHT_COMPRESSION + LAYER_BASE_HEIGHT;
        let radius = self.shape.layer_radius(t) * SPIRAL_RADIUS_OFFSET;
        let angle = t * TAU * self.loops;
        Vec3::new(angle.cos() * radius, height, angle.sin() * radius)
    }
}

impl Formation for FairyLightFormation {
    fn kind(&self) -> SystemKind {
        SystemKind::FairyLights
    }

    fn particle_count(&self) -> usize {
        self.count
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Vec<Particle> {
        (0..self.count)
            .map(|i| {
                let t = i as f32 / self.count as f32;
                let tree_position = self.spiral_point(t);
                let scatter_position = self.scatter.sample(rng);
                let phase = random_phase(rng);

                Particle {
                    tree_position,
                    scatter_position,
                    base_orientation: None,
                    scale: LIGHT_SCALE,
                    phase,
                    color: self.color,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    fn formation(count: usize) -> FairyLightFormation {
        FairyLightFormation::new(
            count,
            DEFAULT_SPIRAL_LOOPS,
            TreeShape::default(),
            ScatterVolume::default(),
            Color::from_rgb_u32(0xFFF9E6),
        )
        .unwrap()
    }

    #[test]
    fn test_fixed_count() {
        let lights = formation(DEFAULT_LIGHT_COUNT);
        assert_eq!(lights.generate(&mut SeededRandom::new(1)).len(), 200);
    }

    #[test]
    fn test_spiral_climbs_monotonically() {
        let particles = formation(200).generate(&mut SeededRandom::new(1));
        for pair in particles.windows(2) {
            assert!(pair[1].tree_position.y > pair[0].tree_position.y);
        }
        assert!((particles[0].tree_position.y - LAYER_BASE_HEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_spiral_wraps_outside_foliage() {
        let lights = formation(200);
        let shape = TreeShape::default();
        for i in 0..200 {
            let t = i as f32 / 200.0;
            let p = lights.spiral_point(t);
            let horizontal = (p.x * p.x + p.z * p.z).sqrt();
            assert!((horizontal - shape.layer_radius(t) * SPIRAL_RADIUS_OFFSET).abs() < 1e-4);
        }
    }

    #[test]
    fn test_one_loop_every_count_over_loops() {
        let lights = formation(200);
        // 200 lights over 8 loops: every 25th light is back at angle zero
        let p = lights.spiral_point(25.0 / 200.0);
        assert!(p.z.abs() < 1e-3);
        assert!(p.x > 0.0);
    }

    #[test]
    fn test_rejects_zero_count() {
        assert!(FairyLightFormation::new(
            0,
            8.0,
            TreeShape::default(),
            ScatterVolume::default(),
            Color::default()
        )
        .is_err());
    }
}
