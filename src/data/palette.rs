//! Default palettes for the crystal tree.

/// Base crystal color; most body crystals use a lightness-jittered copy
pub const EMERALD: &str = "#043927";

/// Secondary crystal palette, emerald weighted three times
pub const JEWEL_COLORS: [&str; 8] = [
    "#043927", // emerald
    "#043927",
    "#043927",
    "#7209B7", // amethyst
    "#D00000", // ruby
    "#4361EE", // sapphire
    "#FFB703", // citrine
    "#00B4D8", // turquoise
];

/// Metallic ornament finishes
pub const ORNAMENT_COLORS: [&str; 6] = [
    "#FFD700", // gold
    "#E0BFB8", // rose gold
    "#C0C0C0", // silver
    "#D00000",
    "#4361EE",
    "#7209B7",
];

pub const WARM_WHITE: &str = "#FFF9E6";
pub const GOLD_METALLIC: &str = "#FFD700";

pub fn owned(palette: &[&str]) -> Vec<String> {
    palette.iter().map(|hex| hex.to_string()).collect()
}
