//! Data-driven game balance
//!
//! Defaults reproduce the full game. [`Tuning::classic`] gives the
//! stripped-down early rules: no fire cooldown, a spawn every frame a slot is
//! free, instant kills and no speed ramp.

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Tunable constants for movement, spawning and difficulty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player lateral speed per frame
    pub player_speed: f32,

    /// Beam forward speed per frame
    pub beam_speed: f32,
    /// Beam spin per frame (x axis)
    pub beam_spin: f32,
    /// Frames the cooldown counts past before firing is allowed again (0 = no cooldown)
    pub beam_cooldown_frames: u32,

    /// Enemy base approach speed per frame (positive, applied toward the camera)
    pub enemy_speed: f32,
    /// Enemy spin per frame (x axis, applied negatively)
    pub enemy_spin: f32,
    /// Enemy lateral drift magnitude per frame
    pub enemy_drift: f32,
    /// Frame timer divisor for the approach-speed ramp (0 disables the ramp)
    pub difficulty_divisor: f32,
    /// Spawn probability numerator
    pub enemy_spawn_numerator: u32,
    /// Spawn probability denominator
    pub enemy_spawn_denominator: u32,

    /// Whether beam kills play the falling animation before the slot frees
    pub fall_animation: bool,
    /// Initial upward speed of a killed enemy
    pub fall_launch_speed: f32,
    /// Vertical speed lost per frame while falling
    pub fall_gravity: f32,
    /// Lateral drift multiplier while falling
    pub fall_drift_factor: f32,

    /// Stage conveyor speed per frame
    pub stage_scroll_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 0.1,

            beam_speed: 0.3,
            beam_spin: 0.1,
            beam_cooldown_frames: 10,

            enemy_speed: 0.1,
            enemy_spin: 0.1,
            enemy_drift: 0.1,
            difficulty_divisor: 1000.0,
            enemy_spawn_numerator: 1,
            enemy_spawn_denominator: 10,

            fall_animation: true,
            fall_launch_speed: 1.0,
            fall_gravity: 0.1,
            fall_drift_factor: 4.0,

            stage_scroll_speed: 0.1,
        }
    }
}

impl Tuning {
    /// Early single-slot rules: no fire cooldown, spawn every frame a slot is
    /// free, kills remove the enemy immediately
    pub fn classic() -> Self {
        Self {
            beam_cooldown_frames: 0,
            enemy_spawn_numerator: 1,
            enemy_spawn_denominator: 1,
            fall_animation: false,
            difficulty_divisor: 0.0,
            ..Self::default()
        }
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.enemy_spawn_denominator == 0 {
            return Err(SceneError::Config(
                "enemy_spawn_denominator must be non-zero".into(),
            ));
        }
        if self.enemy_spawn_numerator > self.enemy_spawn_denominator {
            return Err(SceneError::Config(format!(
                "enemy spawn chance {}/{} exceeds 1",
                self.enemy_spawn_numerator, self.enemy_spawn_denominator
            )));
        }
        if self.difficulty_divisor < 0.0 {
            return Err(SceneError::Config(
                "difficulty_divisor must not be negative".into(),
            ));
        }
        let speeds = [
            ("player_speed", self.player_speed),
            ("beam_speed", self.beam_speed),
            ("enemy_speed", self.enemy_speed),
            ("stage_scroll_speed", self.stage_scroll_speed),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(SceneError::Config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Extra approach speed after `frames` frames of play
    pub fn difficulty_ramp(&self, frames: u64) -> f32 {
        if self.difficulty_divisor > 0.0 {
            frames as f32 / self.difficulty_divisor
        } else {
            0.0
        }
    }
}
