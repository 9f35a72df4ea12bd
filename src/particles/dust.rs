//! Ambient magic dust
//!
//! Free-floating motes that rise through the scene and wrap back to the
//! floor. Unlike the tree systems they ignore the morph entirely.

use crate::error::Result;
use crate::formation::{positive_count, positive_dimension};
use crate::math::{Euler, Vec3};
use crate::random::RandomSource;
use super::motion::InstanceTransform;

/// Slowest rise per tick
pub const RISE_MIN: f32 = 0.005;
pub const RISE_RANGE: f32 = 0.01;
pub const SWAY_AMPLITUDE: f32 = 0.02;
pub const SWAY_FREQUENCY: f32 = 0.5;
pub const TWINKLE_AMPLITUDE: f32 = 0.02;
pub const TWINKLE_FREQUENCY: f32 = 2.0;
/// Offsets are drawn from `[0, OFFSET_RANGE)`
pub const OFFSET_RANGE: f32 = 100.0;

/// A single mote
#[derive(Debug, Clone)]
struct Mote {
    x: f32,
    y: f32,
    z: f32,
    rise: f32,
    offset: f32,
}

/// Box the dust lives in: `width` x `height` x `depth`, base on the floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DustVolume {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for DustVolume {
    fn default() -> Self {
        Self {
            width: 15.0,
            height: 10.0,
            depth: 15.0,
        }
    }
}

/// System managing the ambient dust motes
pub struct DustField {
    motes: Vec<Mote>,
    count: usize,
    volume: DustVolume,
    transforms: Vec<InstanceTransform>,
}

impl DustField {
    pub fn new(count: usize, volume: DustVolume) -> Result<Self> {
        positive_dimension("dust.width", volume.width)?;
        positive_dimension("dust.height", volume.height)?;
        positive_dimension("dust.depth", volume.depth)?;
        Ok(Self {
            motes: Vec::new(),
            count: positive_count("dust.count", count)?,
            volume,
            transforms: Vec::new(),
        })
    }

    pub fn populate(&mut self, rng: &mut dyn RandomSource) {
        self.motes = (0..self.count)
            .map(|_| Mote {
                x: rng.centered() * self.volume.width,
                y: rng.next_f32() * self.volume.height,
                z: rng.centered() * self.volume.depth,
                rise: RISE_MIN + rng.next_f32() * RISE_RANGE,
                offset: rng.next_f32() * OFFSET_RANGE,
            })
            .collect();
        self.transforms = vec![
            InstanceTransform {
                position: Vec3::ZERO,
                rotation: Euler::IDENTITY,
                scale: 0.0,
            };
            self.count
        ];
        self.write_transforms(0.0);
    }

    pub fn is_ready(&self) -> bool {
        !self.motes.is_empty()
    }

    /// Rise one step per tick and wrap at the ceiling
    pub fn tick(&mut self, time: f32) {
        if !self.is_ready() {
            return;
        }
        for mote in &mut self.motes {
            mote.y += mote.rise;
            if mote.y > self.volume.height {
                mote.y = 0.0;
            }
        }
        self.write_transforms(time);
    }

    fn write_transforms(&mut self, time: f32) {
        for (mote, slot) in self.motes.iter().zip(self.transforms.iter_mut()) {
            let sway = (time * SWAY_FREQUENCY + mote.offset).sin() * SWAY_AMPLITUDE;
            let twinkle = (time * TWINKLE_FREQUENCY + mote.offset).sin() * TWINKLE_AMPLITUDE + TWINKLE_AMPLITUDE;
            slot.position = Vec3::new(mote.x + sway, mote.y, mote.z);
            slot.scale = twinkle;
        }
    }

    pub fn len(&self) -> usize {
        self.motes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motes.is_empty()
    }

    pub fn transforms(&self) -> &[InstanceTransform] {
        &self.transforms
    }

    pub fn instance_matrices(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.transforms.len() * 16);
        for t in &self.transforms {
            data.extend_from_slice(t.matrix().as_slice());
        }
        data
    }
}
