use crate::animation::{MorphController, TargetStatus};
use crate::formation::Formation;
use crate::random::RandomSource;
use super::motion::{InstanceTransform, MotionPolicy};
use super::{Particle, SystemKind};

/// One morphing particle system: its formation, progress and instance buffer.
///
/// The instance buffer is owned here and only ever written by `tick`.
/// Renderers read it through `transforms` or take flattened copies.
pub struct MorphingSystem {
    kind: SystemKind,
    formation: Box<dyn Formation>,
    policy: MotionPolicy,
    morph: MorphController,
    particles: Vec<Particle>,
    /// `None` until `populate` has run
    transforms: Option<Vec<InstanceTransform>>,
}

impl MorphingSystem {
    pub fn new(formation: Box<dyn Formation>, morph: MorphController) -> Self {
        let kind = formation.kind();
        Self {
            kind,
            formation,
            policy: MotionPolicy::for_kind(kind),
            morph,
            particles: Vec::new(),
            transforms: None,
        }
    }

    pub fn with_policy(mut self, policy: MotionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Generate the particle set and reset the instance buffer to the
    /// assembled pose
    pub fn populate(&mut self, rng: &mut dyn RandomSource) {
        self.particles = self.formation.generate(rng);
        self.transforms = Some(self.particles.iter().map(InstanceTransform::at_rest).collect());
        log::debug!("{} populated with {} particles", self.kind.name(), self.particles.len());
    }

    pub fn is_ready(&self) -> bool {
        self.transforms.is_some()
    }

    /// Advance the morph and rewrite every instance transform
    pub fn tick(&mut self, status: TargetStatus, dt: f32, time: f32) {
        let Some(transforms) = self.transforms.as_mut() else {
            log::trace!("{} not populated, skipping tick", self.kind.name());
            return;
        };

        if self.morph.update(status, dt) {
            log::debug!("{} settled {}", self.kind.name(), status.name());
        }
        let eased = self.morph.eased();

        for (particle, slot) in self.particles.iter().zip(transforms.iter_mut()) {
            *slot = self.policy.apply(particle, slot, eased, time, dt);
        }
    }

    pub fn kind(&self) -> SystemKind {
        self.kind
    }

    pub fn progress(&self) -> f32 {
        self.morph.progress()
    }

    pub fn is_settled(&self, status: TargetStatus) -> bool {
        self.morph.is_settled(status)
    }

    /// Particle count once populated, zero before
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn transforms(&self) -> Option<&[InstanceTransform]> {
        self.transforms.as_deref()
    }

    /// Column-major 4x4 matrices, 16 floats per instance
    pub fn instance_matrices(&self) -> Vec<f32> {
        let Some(transforms) = self.transforms.as_ref() else {
            return Vec::new();
        };
        let mut data = Vec::with_capacity(transforms.len() * 16);
        for t in transforms {
            data.extend_from_slice(t.matrix().as_slice());
        }
        data
    }

    /// RGB per instance, 3 floats each
    pub fn instance_colors(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.particles.len() * 3);
        for p in &self.particles {
            data.extend_from_slice(&p.color.to_array());
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Color;
    use crate::formation::{BodyFormation, FairyLightFormation, ScatterVolume, StarFormation, TreeShape};
    use crate::random::SeededRandom;

    const DT: f32 = 1.0 / 60.0;

    fn lights() -> MorphingSystem {
        let formation = FairyLightFormation::new(
            50,
            8.0,
            TreeShape::default(),
            ScatterVolume::default(),
            Color::new(1.0, 1.0, 0.9),
        )
        .unwrap();
        MorphingSystem::new(Box::new(formation), MorphController::new(1.5).unwrap())
    }

    #[test]
    fn test_tick_before_populate_is_noop() {
        let mut system = lights();
        assert!(!system.is_ready());
        system.tick(TargetStatus::Scattered, DT, 0.0);
        assert_eq!(system.progress(), 0.0);
        assert!(system.transforms().is_none());
        assert!(system.instance_matrices().is_empty());
    }

    #[test]
    fn test_populate_starts_at_rest() {
        let mut system = lights();
        system.populate(&mut SeededRandom::new(1));
        assert_eq!(system.len(), 50);
        let transforms = system.transforms().unwrap();
        for (p, t) in system.particles().iter().zip(transforms) {
            assert_eq!(t.position, p.tree_position);
        }
    }

    #[test]
    fn test_buffer_length_is_stable() {
        let mut system = lights();
        system.populate(&mut SeededRandom::new(2));
        let len = system.instance_matrices().len();
        assert_eq!(len, 50 * 16);
        for i in 0..120 {
            system.tick(TargetStatus::Scattered, DT, i as f32 * DT);
            assert_eq!(system.instance_matrices().len(), len);
        }
        assert_eq!(system.instance_colors().len(), 50 * 3);
    }

    #[test]
    fn test_static_fields_survive_ticks() {
        let mut system = lights();
        system.populate(&mut SeededRandom::new(3));
        let before: Vec<Particle> = system.particles().to_vec();
        for i in 0..90 {
            let status = if i < 45 { TargetStatus::Scattered } else { TargetStatus::Assembled };
            system.tick(status, DT, i as f32 * DT);
        }
        for (a, b) in before.iter().zip(system.particles()) {
            assert_eq!(a.scale.to_bits(), b.scale.to_bits());
            assert_eq!(a.base_orientation, b.base_orientation);
            assert_eq!(a.tree_position, b.tree_position);
        }
    }

    #[test]
    fn test_body_orientation_restored_after_round_trip() {
        let jewels = vec![Color::new(0.8, 0.1, 0.1)];
        let formation = BodyFormation::new(
            3,
            TreeShape::default(),
            ScatterVolume::default(),
            Color::new(0.0, 0.2, 0.15),
            jewels,
        )
        .unwrap();
        let mut system = MorphingSystem::new(Box::new(formation), MorphController::new(1.2).unwrap());
        system.populate(&mut SeededRandom::new(4));
        let before: Vec<Particle> = system.particles().to_vec();

        let mut frame = 0;
        for _ in 0..40 {
            system.tick(TargetStatus::Scattered, DT, frame as f32 * DT);
            frame += 1;
        }
        assert!(system.progress() > 0.1 && system.progress() < 1.0);
        // Rotation moves while scattered
        let spun = system.transforms().unwrap()[0].rotation;
        assert_ne!(Some(spun), before[0].base_orientation);

        while !system.is_settled(TargetStatus::Assembled) {
            system.tick(TargetStatus::Assembled, DT, frame as f32 * DT);
            frame += 1;
            assert!(frame < 2000, "body never settled");
        }
        system.tick(TargetStatus::Assembled, DT, frame as f32 * DT);

        let transforms = system.transforms().unwrap();
        for ((a, b), t) in before.iter().zip(system.particles()).zip(transforms) {
            let base = a.base_orientation.unwrap();
            let kept = b.base_orientation.unwrap();
            assert_eq!(base.x.to_bits(), kept.x.to_bits());
            assert_eq!(base.y.to_bits(), kept.y.to_bits());
            assert_eq!(base.z.to_bits(), kept.z.to_bits());
            assert_eq!(a.scale.to_bits(), b.scale.to_bits());
            assert_eq!(t.rotation, base);
            assert_eq!(t.scale.to_bits(), a.scale.to_bits());
            assert_eq!(t.position, a.tree_position);
        }
    }

    #[test]
    fn test_star_moves_towards_scatter_point() {
        let star = StarFormation::new(TreeShape::default(), ScatterVolume::default(), Color::default());
        let mut system = MorphingSystem::new(Box::new(star), MorphController::new(1.5).unwrap());
        system.populate(&mut SeededRandom::new(4));
        let target = system.particles()[0].scatter_position;
        for i in 0..600 {
            system.tick(TargetStatus::Scattered, DT, i as f32 * DT);
        }
        assert!(system.is_settled(TargetStatus::Scattered));
        let position = system.transforms().unwrap()[0].position;
        assert!(position.distance(&target) < 1e-4);
    }

    #[test]
    fn test_custom_policy() {
        let mut system = lights().with_policy(MotionPolicy::STATIC);
        system.populate(&mut SeededRandom::new(5));
        system.tick(TargetStatus::Assembled, DT, 1.0);
        let t = system.transforms().unwrap()[0];
        assert_eq!(t.scale, system.particles()[0].scale);
    }
}
