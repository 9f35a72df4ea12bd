use std::f32::consts::TAU;
use crate::data::Color;
use crate::error::{CrystalTreeError, Result};
use crate::math::{Euler, Mat4, Vec3};
use crate::particles::{Particle, SystemKind};
use crate::random::RandomSource;
use super::{layer_count, layer_fraction, random_phase, Formation, ScatterVolume, TreeShape};

/// Branches on the bottom layer, before the constant minimum is added
pub const BRANCHES_BASE: f32 = 12.0;
/// Fraction of `BRANCHES_BASE` lost between the bottom and top layer
pub const BRANCHES_TAPER: f32 = 0.8;
pub const BRANCHES_MIN: f32 = 3.0;
pub const CRYSTALS_PER_BRANCH: f32 = 20.0;
pub const CRYSTALS_TAPER: f32 = 0.5;
/// Downward Y component of every branch direction before normalization
pub const BRANCH_DROOP: f32 = -0.15;
/// Angular offset per layer so branches of adjacent layers do not line up
pub const LAYER_ANGLE_STEP: f32 = 0.5;
/// Jitter around the branch line at the tip of the lowest layer
pub const BRANCH_SPREAD: f32 = 0.3;
/// Full width of the random tilt added to X and Z orientation
pub const TILT_JITTER: f32 = 0.5;
pub const SCALE_MIN: f32 = 0.15;
pub const SCALE_RANGE: f32 = 0.15;
pub const SCALE_TAPER: f32 = 0.5;
/// Draws above this threshold use the base emerald
pub const JEWEL_THRESHOLD: f32 = 0.3;
/// Full width of the lightness jitter on base emerald crystals
pub const LIGHTNESS_JITTER: f32 = 0.1;

/// Crystal shards that form the body of the tree
#[derive(Debug, Clone)]
pub struct BodyFormation {
    layers: usize,
    shape: TreeShape,
    scatter: ScatterVolume,
    base_color: Color,
    jewels: Vec<Color>,
}

impl BodyFormation {
    pub fn new(
        layers: usize,
        shape: TreeShape,
        scatter: ScatterVolume,
        base_color: Color,
        jewels: Vec<Color>,
    ) -> Result<Self> {
        let layers = layer_count("body.layers", layers)?;
        if jewels.is_empty() {
            return Err(CrystalTreeError::EmptyPalette { field: "body.palette" });
        }
        Ok(Self {
            layers,
            shape,
            scatter,
            base_color,
            jewels,
        })
    }

    fn branches_in_layer(t: f32) -> usize {
        (BRANCHES_BASE * (1.0 - t * BRANCHES_TAPER) + BRANCHES_MIN).ceil() as usize
    }

    fn crystals_per_branch(t: f32) -> usize {
        (CRYSTALS_PER_BRANCH * (1.0 - t * CRYSTALS_TAPER)).ceil() as usize
    }

    fn crystal_color(&self, rng: &mut dyn RandomSource) -> Color {
        if rng.next_f32() > JEWEL_THRESHOLD {
            self.base_color
                .offset_hsl(0.0, 0.0, rng.centered() * LIGHTNESS_JITTER)
        } else {
            self.jewels[rng.index(self.jewels.len())]
        }
    }
}

impl Formation for BodyFormation {
    fn kind(&self) -> SystemKind {
        SystemKind::Body
    }

    fn particle_count(&self) -> usize {
        (0..self.layers)
            .map(|i| {
                let t = layer_fraction(i, self.layers);
                Self::branches_in_layer(t) * Self::crystals_per_branch(t)
            })
            .sum()
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Vec<Particle> {
        let mut particles = Vec::with_capacity(self.particle_count());

        for i in 0..self.layers {
            let t = layer_fraction(i, self.layers);
            let layer_center = Vec3::new(0.0, self.shape.layer_height(t), 0.0);
            let layer_radius = self.shape.layer_radius(t);
            let branches = Self::branches_in_layer(t);
            let crystals = Self::crystals_per_branch(t);

            for b in 0..branches {
                let angle = (b as f32 / branches as f32) * TAU + i as f32 * LAYER_ANGLE_STEP;
                let branch_dir = Vec3::new(angle.cos(), BRANCH_DROOP, angle.sin()).normalize();

                for c in 0..crystals {
                    // 0 at the trunk, approaching 1 at the tip
                    let along = c as f32 / crystals as f32;
                    let spread = BRANCH_SPREAD * (1.0 - t) * along;
                    let jitter = Vec3::new(
                        rng.centered() * spread,
                        rng.centered() * spread * 0.5,
                        rng.centered() * spread,
                    );
                    let tree_position = layer_center + branch_dir.scale(along * layer_radius) + jitter;

                    let facing = Mat4::look_rotation(
                        tree_position,
                        tree_position + branch_dir + Vec3::UP,
                        Vec3::UP,
                    );
                    let tilt_x = rng.centered() * TILT_JITTER;
                    let tilt_z = rng.centered() * TILT_JITTER;
                    let base_orientation = Euler::from_rotation_matrix(&facing).offset(tilt_x, 0.0, tilt_z);

                    let scale = (SCALE_MIN + rng.next_f32() * SCALE_RANGE) * (1.0 - t * SCALE_TAPER);
                    let scatter_position = self.scatter.sample(rng);
                    let phase = random_phase(rng);
                    let color = self.crystal_color(rng);

                    particles.push(Particle {
                        tree_position,
                        scatter_position,
                        base_orientation: Some(base_orientation),
                        scale,
                        phase,
                        color,
                    });
                }
            }
        }

        particles
    }
}
