use cgmath::{Deg, Matrix3, Vector2};

use crate::utils::Color;

/// Position, scale, rotation, and tint shared by everything drawable.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub position: Vector2<f32>,
    pub scale: Vector2<f32>,
    /// Rotation around the local origin, in degrees.
    pub rotation: f32,
    pub color: Color,
}

impl Transform {
    pub fn new() -> Transform {
        Transform::default()
    }

    /// World matrix: translate, then rotate, then scale.
    pub fn matrix(&self) -> Matrix3<f32> {
        Matrix3::from_translation(self.position)
            * Matrix3::from_angle_z(Deg(self.rotation))
            * Matrix3::from_nonuniform_scale(self.scale.x, self.scale.y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            position: Vector2::new(0.0, 0.0),
            scale: Vector2::new(1.0, 1.0),
            rotation: 0.0,
            color: Color::WHITE,
        }
    }
}
