use serde::Deserialize;
use crate::animation::{Easing, MorphController};
use crate::error::Result;
use crate::formation::{
    BodyFormation, FairyLightFormation, OrnamentFormation, ScatterVolume, StarFormation, TreeShape,
};
use crate::particles::{DustField, DustVolume};
use super::color::{parse_palette, Color};
use super::palette::{self, owned};

/// YAML scene configuration. Every field has a default, so an empty
/// document produces the standard tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Seed for formation generation; entropy is used when absent
    pub seed: Option<u64>,
    pub total_height: f32,
    pub max_radius: f32,
    pub scatter_radius: f32,
    pub easing: Easing,
    pub body: BodyConfig,
    pub ornaments: OrnamentConfig,
    pub fairy_lights: FairyLightConfig,
    pub star: StarConfig,
    pub dust: DustConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BodyConfig {
    pub layers: usize,
    pub base_color: String,
    pub palette: Vec<String>,
    pub smoothing_rate: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrnamentConfig {
    pub layers: usize,
    pub palette: Vec<String>,
    pub smoothing_rate: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FairyLightConfig {
    pub count: usize,
    pub loops: f32,
    pub color: String,
    pub smoothing_rate: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarConfig {
    pub color: String,
    pub smoothing_rate: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DustConfig {
    pub enabled: bool,
    pub count: usize,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let shape = TreeShape::default();
        Self {
            seed: None,
            total_height: shape.total_height,
            max_radius: shape.max_radius,
            scatter_radius: ScatterVolume::default().radius,
            easing: Easing::default(),
            body: BodyConfig::default(),
            ornaments: OrnamentConfig::default(),
            fairy_lights: FairyLightConfig::default(),
            star: StarConfig::default(),
            dust: DustConfig::default(),
        }
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            layers: 16,
            base_color: palette::EMERALD.to_string(),
            palette: owned(&palette::JEWEL_COLORS),
            smoothing_rate: 1.2, // slower than the other systems
        }
    }
}

impl Default for OrnamentConfig {
    fn default() -> Self {
        Self {
            layers: 14,
            palette: owned(&palette::ORNAMENT_COLORS),
            smoothing_rate: 1.5,
        }
    }
}

impl Default for FairyLightConfig {
    fn default() -> Self {
        Self {
            count: 200,
            loops: 8.0,
            color: palette::WARM_WHITE.to_string(),
            smoothing_rate: 1.5,
        }
    }
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            color: palette::GOLD_METALLIC.to_string(),
            smoothing_rate: 1.5,
        }
    }
}

impl Default for DustConfig {
    fn default() -> Self {
        let volume = DustVolume::default();
        Self {
            enabled: true,
            count: 300,
            width: volume.width,
            height: volume.height,
            depth: volume.depth,
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: SceneConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter by building each system's formation once
    pub fn validate(&self) -> Result<()> {
        self.body_formation()?;
        self.ornament_formation()?;
        self.fairy_light_formation()?;
        self.star_formation()?;
        self.dust_field()?;
        for rate in [
            self.body.smoothing_rate,
            self.ornaments.smoothing_rate,
            self.fairy_lights.smoothing_rate,
            self.star.smoothing_rate,
        ] {
            MorphController::new(rate)?;
        }
        Ok(())
    }

    pub fn shape(&self) -> Result<TreeShape> {
        TreeShape::new(self.total_height, self.max_radius)
    }

    pub fn scatter_volume(&self) -> Result<ScatterVolume> {
        ScatterVolume::new(self.scatter_radius)
    }

    pub fn body_formation(&self) -> Result<BodyFormation> {
        BodyFormation::new(
            self.body.layers,
            self.shape()?,
            self.scatter_volume()?,
            Color::from_hex(&self.body.base_color)?,
            parse_palette("body.palette", &self.body.palette)?,
        )
    }

    pub fn ornament_formation(&self) -> Result<OrnamentFormation> {
        OrnamentFormation::new(
            self.ornaments.layers,
            self.shape()?,
            self.scatter_volume()?,
            parse_palette("ornaments.palette", &self.ornaments.palette)?,
        )
    }

    pub fn fairy_light_formation(&self) -> Result<FairyLightFormation> {
        FairyLightFormation::new(
            self.fairy_lights.count,
            self.fairy_lights.loops,
            self.shape()?,
            self.scatter_volume()?,
            Color::from_hex(&self.fairy_lights.color)?,
        )
    }

    pub fn star_formation(&self) -> Result<StarFormation> {
        Ok(StarFormation::new(
            self.shape()?,
            self.scatter_volume()?,
            Color::from_hex(&self.star.color)?,
        ))
    }

    pub fn dust_field(&self) -> Result<DustField> {
        DustField::new(
            self.dust.count,
            DustVolume {
                width: self.dust.width,
                height: self.dust.height,
                depth: self.dust.depth,
            },
        )
    }

    pub fn morph_controller(&self, smoothing_rate: f32) -> Result<MorphController> {
        Ok(MorphController::new(smoothing_rate)?.with_easing(self.easing))
    }
}
