//! Rendering capability
//!
//! The scene describes each frame as a list of draw calls against a
//! [`RendererSink`]. Drawing itself (pipelines, textures, fonts) belongs to
//! the host. [`CommandRecorder`] captures the calls for headless runs and
//! tests.

use glam::{Mat4, Vec3};

use crate::assets::{SpriteId, TextureId};
use crate::sim::Transform;

/// Fixed scene camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    /// Vertical field of view (radians)
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 1.0, -6.0),
            fov_y: 45f32.to_radians(),
            aspect: 1280.0 / 720.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Left-handed view looking down +z
    pub fn view(&self) -> Mat4 {
        Mat4::look_to_lh(self.eye, Vec3::Z, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

/// Renderer capability consumed by the scene (fire and forget)
pub trait RendererSink {
    fn draw_model(&mut self, transform: &Transform, camera: &Camera, texture: TextureId);
    fn draw_sprite(&mut self, sprite: SpriteId);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: f32);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Model { world: Mat4, texture: TextureId },
    Sprite(SpriteId),
    Text { text: String, x: f32, y: f32, scale: f32 },
}

/// Headless renderer that records one frame of draw calls
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    pub fn model_count(&self, texture: TextureId) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Model { texture: t, .. } if *t == texture))
            .count()
    }

    pub fn has_sprite(&self, sprite: SpriteId) -> bool {
        self.commands.contains(&DrawCommand::Sprite(sprite))
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RendererSink for CommandRecorder {
    fn draw_model(&mut self, transform: &Transform, _camera: &Camera, texture: TextureId) {
        self.commands.push(DrawCommand::Model {
            world: transform.world_matrix(),
            texture,
        });
    }

    fn draw_sprite(&mut self, sprite: SpriteId) {
        self.commands.push(DrawCommand::Sprite(sprite));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            scale,
        });
    }
}
