//! Smoothed progress between the assembled and scattered formations
//!
//! Each particle system owns one controller. The controller never jumps: every
//! tick moves `progress` a fraction of the remaining distance towards the
//! current target, so flipping the target mid-flight simply reverses
//! direction from wherever the system happens to be.

use super::easing::{ease, Easing};
use crate::error::Result;
use crate::formation::positive_dimension;

/// Distance from the target at which progress snaps onto it
pub const SETTLE_EPSILON: f32 = 0.001;

/// Which formation the systems are heading towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetStatus {
    #[default]
    Assembled,
    Scattered,
}

impl TargetStatus {
    /// Progress value that corresponds to this status
    pub fn target(&self) -> f32 {
        match self {
            TargetStatus::Assembled => 0.0,
            TargetStatus::Scattered => 1.0,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            TargetStatus::Assembled => TargetStatus::Scattered,
            TargetStatus::Scattered => TargetStatus::Assembled,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TargetStatus::Assembled => "assembled",
            TargetStatus::Scattered => "scattered",
        }
    }
}

/// Exponentially smoothed morph progress for one particle system
#[derive(Debug, Clone)]
pub struct MorphController {
    progress: f32,
    /// Fraction of the remaining distance covered per second
    pub smoothing_rate: f32,
    pub easing: Easing,
}

impl MorphController {
    pub fn new(smoothing_rate: f32) -> Result<Self> {
        Ok(Self {
            progress: 0.0,
            smoothing_rate: positive_dimension("smoothing_rate", smoothing_rate)?,
            easing: Easing::default(),
        })
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance one tick towards `status`. Returns true on the tick the
    /// controller lands exactly on its target.
    pub fn update(&mut self, status: TargetStatus, dt: f32) -> bool {
        let target = status.target();
        if self.progress == target {
            return false;
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let step = (self.smoothing_rate * dt).min(1.0);
        self.progress += (target - self.progress) * step;

        if (target - self.progress).abs() <= SETTLE_EPSILON {
            self.progress = target;
        }
        self.progress = self.progress.clamp(0.0, 1.0);

        self.progress == target
    }

    /// Raw smoothed progress in [0, 1]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress reshaped by the easing curve; this drives the transforms
    pub fn eased(&self) -> f32 {
        ease(self.progress, self.easing)
    }

    pub fn is_settled(&self, status: TargetStatus) -> bool {
        self.progress == status.target()
    }

    /// Jump to a progress value (0.0 to 1.0)
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
}
