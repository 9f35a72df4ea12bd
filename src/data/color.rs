use serde::{Deserialize, Serialize};
use crate::error::{CrystalTreeError, Result};

/// sRGB color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CrystalTreeError::InvalidColor(hex.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| CrystalTreeError::InvalidColor(hex.to_string()))?;
        Ok(Self::from_rgb_u32(value))
    }

    pub fn from_rgb_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as f32 / 255.0,
            g: ((value >> 8) & 0xff) as f32 / 255.0,
            b: (value & 0xff) as f32 / 255.0,
        }
    }

    /// Hue, saturation and lightness, each in `[0, 1]`
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let lightness = (min + max) / 2.0;

        if max == min {
            return (0.0, 0.0, lightness);
        }

        let delta = max - min;
        let saturation = if lightness <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };
        let hue = if max == self.r {
            (self.g - self.b) / delta + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        (hue / 6.0, saturation, lightness)
    }

    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = h.rem_euclid(1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::new(l, l, l);
        }

        let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let q = 2.0 * l - p;

        Self {
            r: hue_to_rgb(q, p, h + 1.0 / 3.0),
            g: hue_to_rgb(q, p, h),
            b: hue_to_rgb(q, p, h - 1.0 / 3.0),
        }
    }

    /// Shift the color in HSL space
    pub fn offset_hsl(&self, dh: f32, ds: f32, dl: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h + dh, s + ds, l + dl)
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Parse a list of hex strings, rejecting empty lists
pub fn parse_palette(field: &'static str, entries: &[String]) -> Result<Vec<Color>> {
    if entries.is_empty() {
        return Err(CrystalTreeError::EmptyPalette { field });
    }
    entries.iter().map(|hex| Color::from_hex(hex)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_color_close(a: Color, b: Color) {
        assert!((a.r - b.r).abs() < 1e-3, "{:?} vs {:?}", a, b);
        assert!((a.g - b.g).abs() < 1e-3, "{:?} vs {:?}", a, b);
        assert!((a.b - b.b).abs() < 1e-3, "{:?} vs {:?}", a, b);
    }

    #[test]
    fn test_from_hex() {
        let gold = Color::from_hex("#FFD700").unwrap();
        assert_eq!(gold.r, 1.0);
        assert!((gold.g - 215.0 / 255.0).abs() < 1e-6);
        assert_eq!(gold.b, 0.0);
        assert_eq!(Color::from_hex("043927").unwrap(), Color::from_rgb_u32(0x043927));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_hsl_round_trip() {
        for hex in ["#043927", "#7209B7", "#D00000", "#4361EE", "#FFB703", "#C0C0C0"] {
            let c = Color::from_hex(hex).unwrap();
            let (h, s, l) = c.to_hsl();
            assert_color_close(Color::from_hsl(h, s, l), c);
        }
    }

    #[test]
    fn test_offset_lightness_brightens() {
        let base = Color::from_hex("#043927").unwrap();
        let lighter = base.offset_hsl(0.0, 0.0, 0.05);
        assert!(lighter.to_hsl().2 > base.to_hsl().2);
        let (h0, _, _) = base.to_hsl();
        let (h1, _, _) = lighter.to_hsl();
        assert!((h0 - h1).abs() < 1e-3);
    }

    #[test]
    fn test_parse_palette() {
        let entries = vec!["#FFD700".to_string(), "#C0C0C0".to_string()];
        assert_eq!(parse_palette("ornaments", &entries).unwrap().len(), 2);
        assert!(matches!(
            parse_palette("ornaments", &[]),
            Err(CrystalTreeError::EmptyPalette { field: "ornaments" })
        ));
    }
}
