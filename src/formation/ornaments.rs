use std::f32::consts::TAU;
use crate::data::Color;
use crate::error::{CrystalTreeError, Result};
use crate::math::Vec3;
use crate::particles::{Particle, SystemKind};
use crate::random::RandomSource;
use super::{layer_count, layer_fraction, random_phase, Formation, ScatterVolume, TreeShape};

/// Ornaments on the bottom layer
pub const ORNAMENTS_BASE: f32 = 7.0;
pub const ORNAMENTS_MIN: usize = 3;
/// Angular offset per layer, larger than the crystals' so ornaments fall between branches
pub const LAYER_ANGLE_STEP: f32 = 1.2;
/// Ornaments hang just inside the branch tips
pub const TIP_INSET: f32 = 0.95;
pub const HANG_DROP: f32 = 0.2;
pub const SCALE_MIN: f32 = 0.12;
pub const SCALE_RANGE: f32 = 0.06;

/// Metallic spheres hung near the implied branch tips
#[derive(Debug, Clone)]
pub struct OrnamentFormation {
    layers: usize,
    shape: TreeShape,
    scatter: ScatterVolume,
    palette: Vec<Color>,
}

impl OrnamentFormation {
    pub fn new(
        layers: usize,
        shape: TreeShape,
        scatter: ScatterVolume,
        palette: Vec<Color>,
    ) -> Result<Self> {
        let layers = layer_count("ornaments.layers", layers)?;
        if palette.is_empty() {
            return Err(CrystalTreeError::EmptyPalette { field: "ornaments.palette" });
        }
        Ok(Self {
            layers,
            shape,
            scatter,
            palette,
        })
    }

    fn ornaments_in_layer(t: f32) -> usize {
        ((ORNAMENTS_BASE * (1.0 - t)).floor() as usize).max(ORNAMENTS_MIN)
    }
}

impl Formation for OrnamentFormation {
    fn kind(&self) -> SystemKind {
        SystemKind::Ornaments
    }

    fn particle_count(&self) -> usize {
        (0..self.layers)
            .map(|i| Self::ornaments_in_layer(layer_fraction(i, self.layers)))
            .sum()
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Vec<Particle> {
        let mut particles = Vec::with_capacity(self.particle_count());

        for i in 0..self.layers {
            let t = layer_fraction(i, self.layers);
            let y = self.shape.layer_height(t) - HANG_DROP;
            let radius = self.shape.layer_radius(t) * TIP_INSET;
            let count = Self::ornaments_in_layer(t);

            for j in 0..count {
                let angle = (j as f32 / count as f32) * TAU + i as f32 * LAYER_ANGLE_STEP;
                let tree_position = Vec3::new(angle.cos() * radius, y, angle.sin() * radius);

                let scatter_position = self.scatter.sample(rng);
                let scale = SCALE_MIN + rng.next_f32() * SCALE_RANGE;
                let phase = random_phase(rng);
                let color = self.palette[rng.index(self.palette.len())];

                particles.push(Particle {
                    tree_position,
                    scatter_position,
                    base_orientation: None,
                    scale,
                    phase,
                    color,
                });
            }
        }

        particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::palette::ORNAMENT_COLORS;
    use crate::random::SeededRandom;

    fn formation(layers: usize) -> OrnamentFormation {
        let palette = ORNAMENT_COLORS
            .iter()
            .map(|hex| Color::from_hex(hex).unwrap())
            .collect();
        OrnamentFormation::new(layers, TreeShape::default(), ScatterVolume::default(), palette).unwrap()
    }

    #[test]
    fn test_default_density() {
        let ornaments = formation(14);
        let particles = ornaments.generate(&mut SeededRandom::new(4));
        assert_eq!(particles.len(), ornaments.particle_count());
        assert!(particles.len() >= 50 && particles.len() <= 70, "{}", particles.len());
    }

    #[test]
    fn test_every_layer_has_minimum() {
        assert_eq!(OrnamentFormation::ornaments_in_layer(1.0), ORNAMENTS_MIN);
        assert_eq!(OrnamentFormation::ornaments_in_layer(0.0), 7);
    }

    #[test]
    fn test_ornaments_sit_inside_tips() {
        let shape = TreeShape::default();
        let particles = formation(14).generate(&mut SeededRandom::new(8));
        for p in &particles {
            let horizontal = (p.tree_position.x.powi(2) + p.tree_position.z.powi(2)).sqrt();
            assert!(horizontal <= shape.max_radius * TIP_INSET + 1e-4);
            assert!(p.base_orientation.is_none());
            assert!(p.scale >= SCALE_MIN && p.scale <= SCALE_MIN + SCALE_RANGE);
        }
    }

    #[test]
    fn test_colors_come_from_palette() {
        let palette: Vec<Color> = ORNAMENT_COLORS
            .iter()
            .map(|hex| Color::from_hex(hex).unwrap())
            .collect();
        for p in formation(14).generate(&mut SeededRandom::new(12)) {
            assert!(palette.contains(&p.color));
        }
    }

    #[test]
    fn test_rejects_empty_palette() {
        assert!(OrnamentFormation::new(14, TreeShape::default(), ScatterVolume::default(), vec![]).is_err());
    }
}
