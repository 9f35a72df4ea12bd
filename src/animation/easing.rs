//! Easing curves for the morph between formations

use serde::Deserialize;

/// Easing function types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation
    Linear,
    /// Cubic ease-in-out: zero velocity at both ends
    #[default]
    EaseInOutCubic,
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_fixed_points() {
        assert_eq!(ease(0.0, Easing::EaseInOutCubic), 0.0);
        assert_eq!(ease(1.0, Easing::EaseInOutCubic), 1.0);
        assert!((ease(0.5, Easing::EaseInOutCubic) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ease_monotonic() {
        for easing in [Easing::Linear, Easing::EaseInOutCubic] {
            let mut prev = 0.0;
            for i in 0..=1000 {
                let t = i as f32 / 1000.0;
                let v = ease(t, easing);
                assert!(v >= prev, "Easing {:?} should be monotonic at {}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_cubic_flat_at_endpoints() {
        let h = 1e-3;
        let start_slope = ease(h, Easing::EaseInOutCubic) / h;
        let end_slope = (1.0 - ease(1.0 - h, Easing::EaseInOutCubic)) / h;
        assert!(start_slope < 1e-4);
        assert!(end_slope < 1e-4);
    }

    #[test]
    fn test_cubic_symmetric() {
        let v1 = ease(0.2, Easing::EaseInOutCubic);
        let v2 = ease(0.8, Easing::EaseInOutCubic);
        assert!((v1 + v2 - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_ease_clamps_input() {
        assert_eq!(ease(-0.5, Easing::EaseInOutCubic), 0.0);
        assert_eq!(ease(1.5, Easing::Linear), 1.0);
    }
}
