//! Rail Shooter - a 2.5D lane shooter scene
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (pools, spawning, motion, collisions)
//! - `scene`: Title / Playing / GameOver state machine
//! - `platform`: Input capability and headless input state
//! - `audio`: Sound ids, audio sink capability, BGM switching
//! - `renderer`: Renderer sink capability, camera, draw command recording
//! - `assets`: Asset manifest and loader capability
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use error::{AssetError, SceneError};
pub use scene::{Mode, Scene};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Beam pool capacity
    pub const MAX_BEAMS: usize = 10;
    /// Enemy pool capacity
    pub const MAX_ENEMIES: usize = 10;
    /// Number of stage floor segments on the conveyor
    pub const STAGE_SEGMENTS: usize = 20;

    /// Player lateral limit (stage half-width)
    pub const STAGE_HALF_WIDTH: f32 = 4.0;
    /// Far plane: enemies spawn here, beams expire past it
    pub const FAR_Z: f32 = 40.0;
    /// Near plane: enemies and stage segments crossing it are recycled
    pub const NEAR_Z: f32 = -5.0;
    /// Dying enemies are removed once they fall below this height
    pub const FALL_FLOOR_Y: f32 = -3.0;

    /// Stage segment spacing along z
    pub const STAGE_SEGMENT_SPACING: f32 = 2.0;
    /// Stage segment height
    pub const STAGE_Y: f32 = -1.5;
    /// Distance a segment jumps back when it wraps
    pub const STAGE_WRAP_DISTANCE: f32 = 40.0;

    /// Half-extent of every hitbox on the x/z plane
    pub const HIT_HALF_EXTENT: f32 = 1.0;

    /// Lives at the start of a run
    pub const STARTING_LIFE: i32 = 3;

    /// Title / game-over prompt blink period in frames
    pub const BLINK_PERIOD: u64 = 40;
}

/// Whether a blinking prompt is visible on the given frame
#[inline]
pub fn blink_visible(frame: u64) -> bool {
    frame % consts::BLINK_PERIOD >= consts::BLINK_PERIOD / 2
}
