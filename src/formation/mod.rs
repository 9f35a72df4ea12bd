//! Formation generators
//!
//! Each generator places the particles of one system once, at population
//! time: where they sit in the assembled tree and where they fly to when the
//! tree scatters. Generators are pure apart from the random source they draw
//! from, so a seeded source reproduces the same formation exactly.

mod body;
mod ornaments;
mod lights;
mod star;
mod scatter;

pub use body::BodyFormation;
pub use ornaments::OrnamentFormation;
pub use lights::FairyLightFormation;
pub use star::StarFormation;
pub use scatter::{ScatterVolume, SCATTER_LIFT};

use crate::error::{CrystalTreeError, Result};
use crate::particles::{Particle, SystemKind};
use crate::random::RandomSource;

/// Vertical offset applied to every layer so the lowest layer clears the floor
pub const LAYER_BASE_HEIGHT: f32 = 0.5;
/// Fraction of the total height used by the layered formations
pub const LAYER_HEIGHT_COMPRESSION: f32 = 0.9;
/// Extra narrowing applied on top of the linear taper near the apex
pub const TAPER_CURVATURE: f32 = 0.2;

/// Produces the fixed particle set for one system
pub trait Formation {
    fn kind(&self) -> SystemKind;

    /// Number of particles `generate` will return
    fn particle_count(&self) -> usize;

    fn generate(&self, rng: &mut dyn RandomSource) -> Vec<Particle>;
}

/// Silhouette shared by all layered formations so ornaments and lights sit
/// on the same implied branches as the crystals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeShape {
    pub total_height: f32,
    pub max_radius: f32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            total_height: 7.5,
            max_radius: 2.8,
        }
    }
}

impl TreeShape {
    pub fn new(total_height: f32, max_radius: f32) -> Result<Self> {
        Ok(Self {
            total_height: positive_dimension("total_height", total_height)?,
            max_radius: positive_dimension("max_radius", max_radius)?,
        })
    }

    /// Height of the layer at normalized position `t` (0 = bottom, 1 = top)
    pub fn layer_height(&self, t: f32) -> f32 {
        t * self.total_height * LAYER_HEIGHT_COMPRESSION + LAYER_BASE_HEIGHT
    }

    /// Convex taper: full radius at the base, zero at the apex
    pub fn layer_radius(&self, t: f32) -> f32 {
        self.max_radius * (1.0 - t) * (1.0 - t * TAPER_CURVATURE)
    }
}

/// Per-particle phase in `[0, 2pi)`
pub(crate) fn random_phase(rng: &mut dyn RandomSource) -> f32 {
    (rng.next_f32() * std::f32::consts::TAU).rem_euclid(std::f32::consts::TAU)
}

/// Normalized position of layer `index` in a stack of `layers` (>= 2)
pub(crate) fn layer_fraction(index: usize, layers: usize) -> f32 {
    index as f32 / (layers - 1) as f32
}

pub(crate) fn positive_dimension(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CrystalTreeError::NonPositiveDimension { field, value })
    }
}

pub(crate) fn positive_count(field: &'static str, value: usize) -> Result<usize> {
    if value > 0 {
        Ok(value)
    } else {
        Err(CrystalTreeError::NonPositiveCount { field, value: value as i64 })
    }
}

pub(crate) fn layer_count(field: &'static str, value: usize) -> Result<usize> {
    if value >= 2 {
        Ok(value)
    } else {
        Err(CrystalTreeError::TooFewLayers { field, value })
    }
}
