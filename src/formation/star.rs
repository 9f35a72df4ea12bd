use crate::data::Color;
use crate::math::Vec3;
use crate::particles::{Particle, SystemKind};
use crate::random::RandomSource;
use super::{random_phase, Formation, ScatterVolume, TreeShape};

/// Gap between the top of the tree and the star
pub const STAR_CLEARANCE: f32 = 0.2;

/// The single star topper
#[derive(Debug, Clone)]
pub struct StarFormation {
    shape: TreeShape,
    scatter: ScatterVolume,
    color: Color,
}

impl StarFormation {
    pub fn new(shape: TreeShape, scatter: ScatterVolume, color: Color) -> Self {
        Self { shape, scatter, color }
    }

    pub fn apex(&self) -> Vec3 {
        Vec3::new(0.0, self.shape.total_height + STAR_CLEARANCE, 0.0)
    }
}

impl Formation for StarFormation {
    fn kind(&self) -> SystemKind {
        SystemKind::Star
    }

    fn particle_count(&self) -> usize {
        1
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Vec<Particle> {
        let scatter_position = self.scatter.sample(rng);
        vec![Particle {
            tree_position: self.apex(),
            scatter_position,
            base_orientation: None,
            scale: 1.0,
            phase: random_phase(rng),
            color: self.color,
        }]
    }
}
