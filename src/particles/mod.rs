//! Particle systems
//!
//! The tree is drawn as four instanced particle systems that share a single
//! morphing implementation, plus an ambient dust field.

mod particle;
pub mod motion;
mod system;
pub mod dust;

pub use particle::{GeometryKind, MaterialKind, MaterialProperties, Particle, SystemKind};
pub use motion::{InstanceTransform, MotionPolicy};
pub use system::MorphingSystem;
pub use dust::{DustField, DustVolume};
