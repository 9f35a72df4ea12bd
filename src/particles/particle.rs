use serde::Serialize;
use crate::data::Color;
use crate::math::{Euler, Vec3};

/// The four morphing particle systems that make up the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemKind {
    Body,
    Ornaments,
    FairyLights,
    Star,
}

impl SystemKind {
    pub const ALL: [SystemKind; 4] = [
        SystemKind::Body,
        SystemKind::Ornaments,
        SystemKind::FairyLights,
        SystemKind::Star,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SystemKind::Body => "body",
            SystemKind::Ornaments => "ornaments",
            SystemKind::FairyLights => "fairy_lights",
            SystemKind::Star => "star",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Mesh each instance of this system is drawn with
    pub fn geometry(&self) -> GeometryKind {
        match self {
            SystemKind::Body => GeometryKind::Cone { radius: 0.3, height: 1.2, radial_segments: 4 },
            SystemKind::Ornaments => GeometryKind::Sphere { radius: 1.0, segments: 32 },
            SystemKind::FairyLights => GeometryKind::Sphere { radius: 1.0, segments: 16 },
            SystemKind::Star => GeometryKind::Dodecahedron { radius: 0.45 },
        }
    }

    pub fn material(&self) -> MaterialKind {
        match self {
            SystemKind::Body => MaterialKind::Emerald,
            SystemKind::Ornaments => MaterialKind::Gold,
            SystemKind::FairyLights => MaterialKind::WarmLight,
            SystemKind::Star => MaterialKind::StarGlow,
        }
    }
}

/// Instanced mesh shape, in local units before per-instance scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryKind {
    Cone { radius: f32, height: f32, radial_segments: u32 },
    Sphere { radius: f32, segments: u32 },
    Dodecahedron { radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Faceted, metallic green crystal shaded with per-instance colors
    Emerald,
    /// Polished clear-coated metal tinted by per-instance colors
    Gold,
    /// Emissive bulb that bypasses tone mapping
    WarmLight,
    StarGlow,
}

/// Surface parameters a renderer needs to build the material
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialProperties {
    pub base_color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub clearcoat: f32,
    pub env_map_intensity: f32,
    pub vertex_colors: bool,
    pub flat_shading: bool,
    pub tone_mapped: bool,
}

impl MaterialKind {
    pub fn properties(&self) -> MaterialProperties {
        let gold = Color::from_rgb_u32(0xFFD700);
        match self {
            MaterialKind::Emerald => MaterialProperties {
                base_color: Color::from_rgb_u32(0x043927),
                emissive: Color::default(),
                emissive_intensity: 0.0,
                roughness: 0.2,
                metalness: 0.6,
                clearcoat: 0.0,
                env_map_intensity: 1.5,
                vertex_colors: true,
                flat_shading: true,
                tone_mapped: true,
            },
            MaterialKind::Gold => MaterialProperties {
                base_color: Color::new(1.0, 1.0, 1.0),
                emissive: Color::default(),
                emissive_intensity: 0.0,
                roughness: 0.1,
                metalness: 1.0,
                clearcoat: 1.0,
                env_map_intensity: 1.2,
                vertex_colors: true,
                flat_shading: false,
                tone_mapped: true,
            },
            MaterialKind::WarmLight => MaterialProperties {
                base_color: Color::from_rgb_u32(0xFFF9E6),
                emissive: gold,
                emissive_intensity: 4.0,
                roughness: 1.0,
                metalness: 0.0,
                clearcoat: 0.0,
                env_map_intensity: 1.0,
                vertex_colors: false,
                flat_shading: false,
                tone_mapped: false,
            },
            MaterialKind::StarGlow => MaterialProperties {
                base_color: gold,
                emissive: gold,
                emissive_intensity: 3.0,
                roughness: 0.1,
                metalness: 1.0,
                clearcoat: 0.0,
                env_map_intensity: 1.0,
                vertex_colors: false,
                flat_shading: false,
                tone_mapped: false,
            },
        }
    }
}

/// One placed particle. Never mutated after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Location when the tree is fully assembled
    pub tree_position: Vec3,
    /// Location when the tree is fully scattered
    pub scatter_position: Vec3,
    /// Intrinsic orientation; only body crystals carry one
    pub base_orientation: Option<Euler>,
    pub scale: f32,
    /// Offset in `[0, 2pi)` that desynchronizes drift, tumble and twinkle
    pub phase: f32,
    pub color: Color,
}
