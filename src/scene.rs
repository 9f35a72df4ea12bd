//! Scene composer
//!
//! Owns the four morphing systems plus the dust field and drives them
//! from a single target status and clock.

use crate::animation::TargetStatus;
use crate::data::SceneConfig;
use crate::error::{CrystalTreeError, Result};
use crate::particles::{DustField, MorphingSystem, SystemKind};
use crate::random::{RandomSource, SeededRandom};

pub struct CrystalTreeScene {
    /// Indexed in `SystemKind::ALL` order
    systems: Vec<MorphingSystem>,
    dust: Option<DustField>,
    status: TargetStatus,
    seed: Option<u64>,
}

impl CrystalTreeScene {
    pub fn new(config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let systems = vec![
            MorphingSystem::new(
                Box::new(config.body_formation()?),
                config.morph_controller(config.body.smoothing_rate)?,
            ),
            MorphingSystem::new(
                Box::new(config.ornament_formation()?),
                config.morph_controller(config.ornaments.smoothing_rate)?,
            ),
            MorphingSystem::new(
                Box::new(config.fairy_light_formation()?),
                config.morph_controller(config.fairy_lights.smoothing_rate)?,
            ),
            MorphingSystem::new(
                Box::new(config.star_formation()?),
                config.morph_controller(config.star.smoothing_rate)?,
            ),
        ];
        let dust = if config.dust.enabled {
            Some(config.dust_field()?)
        } else {
            None
        };

        log::info!(
            "Crystal tree scene created: {} body layers, {} ornament layers, {} lights, dust {}",
            config.body.layers,
            config.ornaments.layers,
            config.fairy_lights.count,
            if dust.is_some() { "on" } else { "off" },
        );

        Ok(Self {
            systems,
            dust,
            status: TargetStatus::default(),
            seed: config.seed,
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::new(&SceneConfig::from_yaml(yaml)?)
    }

    /// Generate every system's particles from one random stream, in
    /// body, ornaments, lights, star, dust order
    pub fn populate(&mut self, rng: &mut dyn RandomSource) {
        for system in &mut self.systems {
            system.populate(rng);
        }
        if let Some(dust) = self.dust.as_mut() {
            dust.populate(rng);
        }
        log::info!(
            "Crystal tree populated: {} instances across {} systems",
            self.systems.iter().map(MorphingSystem::len).sum::<usize>(),
            self.systems.len(),
        );
    }

    /// Populate with the configured seed, or entropy when none was given
    pub fn populate_from_config_seed(&mut self) {
        let mut rng = SeededRandom::from_optional_seed(self.seed);
        self.populate(&mut rng);
    }

    pub fn is_ready(&self) -> bool {
        self.systems.iter().all(MorphingSystem::is_ready)
    }

    pub fn status(&self) -> TargetStatus {
        self.status
    }

    pub fn set_status(&mut self, status: TargetStatus) {
        if status != self.status {
            log::debug!("Target status {} -> {}", self.status.name(), status.name());
        }
        self.status = status;
    }

    pub fn toggle(&mut self) -> TargetStatus {
        self.set_status(self.status.toggled());
        self.status
    }

    /// Advance every system with the same status, step and clock
    pub fn tick(&mut self, dt: f32, elapsed: f32) {
        for system in &mut self.systems {
            system.tick(self.status, dt, elapsed);
        }
        if let Some(dust) = self.dust.as_mut() {
            dust.tick(elapsed);
        }
    }

    /// True once every system has landed on the current target
    pub fn is_settled(&self) -> bool {
        self.systems.iter().all(|s| s.is_settled(self.status))
    }

    pub fn system(&self, kind: SystemKind) -> &MorphingSystem {
        &self.systems[kind as usize]
    }

    pub fn system_by_name(&self, name: &str) -> Result<&MorphingSystem> {
        SystemKind::from_name(name)
            .map(|kind| self.system(kind))
            .ok_or_else(|| CrystalTreeError::UnknownSystem(name.to_string()))
    }

    pub fn systems(&self) -> &[MorphingSystem] {
        &self.systems
    }

    pub fn dust(&self) -> Option<&DustField> {
        self.dust.as_ref()
    }
}
