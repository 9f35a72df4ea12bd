pub mod vec3;
pub mod euler;
pub mod matrix;

pub use vec3::Vec3;
pub use euler::Euler;
pub use matrix::Mat4;

/// Scalar linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
