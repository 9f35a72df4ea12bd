use serde::{Deserialize, Serialize};
use super::Mat4;

/// Intrinsic XYZ Euler angles in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler {
    pub const IDENTITY: Euler = Euler { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Decompose the rotation part of a matrix (assumed unscaled) into XYZ angles
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        let d = &m.data;
        let (m11, m12, m13) = (d[0], d[4], d[8]);
        let (m22, m23) = (d[5], d[9]);
        let (m32, m33) = (d[6], d[10]);

        let y = m13.clamp(-1.0, 1.0).asin();
        if m13.abs() < 0.999_999_9 {
            Self {
                x: (-m23).atan2(m33),
                y,
                z: (-m12).atan2(m11),
            }
        } else {
            // Gimbal lock: fold the remaining freedom into X
            Self {
                x: m32.atan2(m22),
                y,
                z: 0.0,
            }
        }
    }

    pub fn offset(&self, dx: f32, dy: f32, dz: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_euler_close(a: Euler, b: Euler) {
        assert!((a.x - b.x).abs() < 1e-4, "x: {} vs {}", a.x, b.x);
        assert!((a.y - b.y).abs() < 1e-4, "y: {} vs {}", a.y, b.y);
        assert!((a.z - b.z).abs() < 1e-4, "z: {} vs {}", a.z, b.z);
    }

    #[test]
    fn test_identity_decomposes_to_zero() {
        let e = Euler::from_rotation_matrix(&Mat4::identity());
        assert_euler_close(e, Euler::IDENTITY);
    }

    #[test]
    fn test_matrix_round_trip() {
        let original = Euler::new(0.3, -0.7, 1.1);
        let m = Mat4::from_euler(original);
        assert_euler_close(Euler::from_rotation_matrix(&m), original);
    }

    #[test]
    fn test_gimbal_lock_keeps_y() {
        let m = Mat4::from_euler(Euler::new(0.4, std::f32::consts::FRAC_PI_2, 0.0));
        let e = Euler::from_rotation_matrix(&m);
        assert!((e.y - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
        assert_eq!(e.z, 0.0);
    }

    #[test]
    fn test_offset() {
        let e = Euler::new(1.0, 2.0, 3.0).offset(0.5, 0.0, -1.0);
        assert_eq!(e, Euler::new(1.5, 2.0, 2.0));
    }
}
