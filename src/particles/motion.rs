//! Secondary motion layered on top of the formation interpolation
//!
//! A `MotionPolicy` is a small value describing how one system drifts, spins
//! and pulses once it starts to scatter. All four systems share the same
//! updater and differ only in the policy they carry.

use crate::math::{lerp, Euler, Mat4, Vec3};
use super::{Particle, SystemKind};

/// Eased progress above which scattered motion kicks in
pub const MOTION_THRESHOLD: f32 = 0.01;

/// Rendered transform of one instance for the current tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceTransform {
    pub position: Vec3,
    pub rotation: Euler,
    pub scale: f32,
}

impl InstanceTransform {
    /// Pose of a particle sitting in the assembled tree
    pub fn at_rest(particle: &Particle) -> Self {
        Self {
            position: particle.tree_position,
            rotation: particle.base_orientation.unwrap_or_default(),
            scale: particle.scale,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::compose(self.position, self.rotation, Vec3::splat(self.scale))
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

/// Slow vertical bob: `sin(time * frequency + phase) * amplitude * eased * lift`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub amplitude: f32,
    pub frequency: f32,
    pub lift: f32,
}

/// Rotation applied while scattered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spin {
    None,
    /// Added to the base orientation, growing with time and eased progress
    Tumble { rate_x: f32, rate_y: f32 },
    /// Replaces the orientation; the X rate is scaled by the particle's phase
    /// and the particle snaps back upright once assembled
    PhaseTumble { rate_x: f32, rate_y: f32 },
    /// Constant yaw, plus a roll that only engages while scattered and
    /// relaxes back to zero at `settle_rate` per second otherwise
    Topper { yaw_rate: f32, roll_rate: f32, settle_rate: f32 },
}

/// Twinkle on the rendered scale: `scale + sin(time * frequency + phase) * amplitude`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub amplitude: f32,
    pub frequency: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPolicy {
    /// Eased progress that must be exceeded before drift and spin apply
    pub threshold: f32,
    pub drift: Option<Drift>,
    pub spin: Spin,
    /// Pulses run regardless of the morph so lights keep twinkling
    pub pulse: Option<Pulse>,
}

impl MotionPolicy {
    pub const STATIC: MotionPolicy = MotionPolicy {
        threshold: MOTION_THRESHOLD,
        drift: None,
        spin: Spin::None,
        pulse: None,
    };

    pub fn for_kind(kind: SystemKind) -> Self {
        match kind {
            SystemKind::Body => Self {
                threshold: MOTION_THRESHOLD,
                drift: Some(Drift { amplitude: 0.5, frequency: 0.5, lift: 0.02 }),
                spin: Spin::Tumble { rate_x: 0.1, rate_y: 0.1 },
                pulse: None,
            },
            SystemKind::Ornaments => Self {
                threshold: MOTION_THRESHOLD,
                drift: None,
                spin: Spin::PhaseTumble { rate_x: 0.2, rate_y: 0.1 },
                pulse: None,
            },
            SystemKind::FairyLights => Self {
                threshold: MOTION_THRESHOLD,
                drift: None,
                spin: Spin::None,
                pulse: Some(Pulse { amplitude: 0.02, frequency: 3.0 }),
            },
            SystemKind::Star => Self {
                threshold: 0.1,
                drift: None,
                spin: Spin::Topper { yaw_rate: 0.2, roll_rate: 0.5, settle_rate: 2.0 },
                pulse: None,
            },
        }
    }

    /// Transform for `particle` at eased progress `eased`.
    ///
    /// `previous` is the transform written on the last tick; only the
    /// topper's roll settling reads it.
    pub fn apply(
        &self,
        particle: &Particle,
        previous: &InstanceTransform,
        eased: f32,
        time: f32,
        dt: f32,
    ) -> InstanceTransform {
        let active = eased > self.threshold;
        let base = particle.base_orientation.unwrap_or_default();

        let mut position = particle.tree_position.lerp(&particle.scatter_position, eased);
        if let (true, Some(drift)) = (active, self.drift) {
            position.y += (time * drift.frequency + particle.phase).sin() * drift.amplitude * eased * drift.lift;
        }

        let rotation = match self.spin {
            Spin::None => base,
            Spin::Tumble { rate_x, rate_y } if active => {
                base.offset(time * rate_x * eased, time * rate_y * eased, 0.0)
            }
            Spin::Tumble { .. } => base,
            Spin::PhaseTumble { rate_x, rate_y } if active => {
                Euler::new(time * rate_x * particle.phase, time * rate_y, 0.0)
            }
            Spin::PhaseTumble { .. } => Euler::IDENTITY,
            Spin::Topper { yaw_rate, roll_rate, settle_rate } => {
                let roll = if active {
                    time * roll_rate * eased
                } else {
                    lerp(previous.rotation.z, 0.0, (dt * settle_rate).clamp(0.0, 1.0))
                };
                Euler::new(base.x, time * yaw_rate, roll)
            }
        };

        let scale = match self.pulse {
            Some(pulse) => particle.scale + (time * pulse.frequency + particle.phase).sin() * pulse.amplitude,
            None => particle.scale,
        };

        InstanceTransform { position, rotation, scale }
    }
}
