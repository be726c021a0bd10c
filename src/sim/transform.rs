//! Scale / rotation / translation triple and its world matrix

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Placement of a model in the world
///
/// The world matrix is never cached: [`Transform::world_matrix`] derives it
/// from the current triple, so it cannot go stale after a mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vec3,
    /// Euler angles in radians (x, y, z)
    pub rotation: Vec3,
    pub translation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
            translation: Vec3::ZERO,
        }
    }
}

impl Transform {
    /// Identity placement with a uniform scale
    pub fn with_scale(scale: f32) -> Self {
        Self {
            scale: Vec3::splat(scale),
            ..Self::default()
        }
    }

    /// Rotation as a quaternion (applied X, then Y, then Z)
    #[inline]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// World matrix: scale, then rotate, then translate
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation(), self.translation)
    }

    /// Lateral position
    #[inline]
    pub fn x(&self) -> f32 {
        self.translation.x
    }

    /// Depth position (toward the far plane is positive)
    #[inline]
    pub fn z(&self) -> f32 {
        self.translation.z
    }
}
