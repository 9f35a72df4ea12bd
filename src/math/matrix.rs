use super::{Euler, Vec3};

/// 4x4 matrix for transformations (column-major for WebGL instancing)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.data[12] = x;
        m.data[13] = y;
        m.data[14] = z;
        m
    }

    /// Rotation matrix for intrinsic XYZ Euler angles
    pub fn from_euler(rotation: Euler) -> Self {
        let (a, b) = (rotation.x.cos(), rotation.x.sin());
        let (c, d) = (rotation.y.cos(), rotation.y.sin());
        let (e, f) = (rotation.z.cos(), rotation.z.sin());

        let ae = a * e;
        let af = a * f;
        let be = b * e;
        let bf = b * f;

        Self {
            data: [
                c * e, af + be * d, bf - ae * d, 0.0,
                -c * f, ae - bf * d, be + af * d, 0.0,
                d, -b * c, a * c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Translation * rotation * scale, the layout an instanced mesh expects
    pub fn compose(position: Vec3, rotation: Euler, scale: Vec3) -> Self {
        let mut m = Self::from_euler(rotation);
        for (col, s) in [scale.x, scale.y, scale.z].into_iter().enumerate() {
            for row in 0..3 {
                m.data[col * 4 + row] *= s;
            }
        }
        m.data[12] = position.x;
        m.data[13] = position.y;
        m.data[14] = position.z;
        m
    }

    /// Rotation whose local +Z axis points from `target` back towards `eye`.
    ///
    /// Degenerate inputs (coincident points, or `up` parallel to the view
    /// direction) are nudged so the result is always a proper rotation.
    pub fn look_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let mut z = eye - target;
        if z.length_squared() == 0.0 {
            z.z = 1.0;
        }
        z = z.normalize();

        let mut x = up.cross(&z);
        if x.length_squared() == 0.0 {
            if (up.z.abs() - 1.0).abs() < f32::EPSILON {
                z.x += 0.0001;
            } else {
                z.z += 0.0001;
            }
            z = z.normalize();
            x = up.cross(&z);
        }
        x = x.normalize();
        let y = z.cross(&x);

        Self {
            data: [
                x.x, x.y, x.z, 0.0,
                y.x, y.y, y.z, 0.0,
                z.x, z.y, z.z, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Matrix multiplication
    pub fn mul(&self, other: &Mat4) -> Self {
        let mut result = [0.0f32; 16];

        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[row + k * 4] * other.data[k + col * 4];
                }
                result[row + col * 4] = sum;
            }
        }

        Self { data: result }
    }

    /// Transform a point (applies translation)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.data[0] * p.x + self.data[4] * p.y + self.data[8] * p.z + self.data[12],
            self.data[1] * p.x + self.data[5] * p.y + self.data[9] * p.z + self.data[13],
            self.data[2] * p.x + self.data[6] * p.y + self.data[10] * p.z + self.data[14],
        )
    }

    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}
