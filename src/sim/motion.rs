//! Per-frame motion rules for each entity kind
//!
//! Each function integrates one kind for exactly one frame and applies its
//! boundary rule (clamp, bounce, expire or wrap).

use super::state::{BeamPool, EnemyPool, Player, Stage};
use crate::consts::*;
use crate::tuning::Tuning;

/// Slide the player along the lane and clamp to the stage edges
pub fn move_player(player: &mut Player, left: bool, right: bool, tuning: &Tuning) {
    let x = &mut player.transform.translation.x;
    if right {
        *x += tuning.player_speed;
    }
    if left {
        *x -= tuning.player_speed;
    }
    *x = x.clamp(-STAGE_HALF_WIDTH, STAGE_HALF_WIDTH);
}

/// Fly active beams away from the camera; expire them past the far plane
pub fn move_beams(beams: &mut BeamPool, tuning: &Tuning) {
    beams.for_each_live(|index, beam| {
        if !beam.is_active() {
            return;
        }
        beam.transform.translation.z += tuning.beam_speed;
        beam.transform.rotation.x += tuning.beam_spin;
        if beam.transform.translation.z > FAR_Z {
            log::trace!("beam {index} expired");
            beam.release();
        }
    });
}

/// Bring active enemies toward the camera with lateral drift that bounces off
/// the stage edges. `frame` feeds the approach-speed ramp.
pub fn move_enemies(enemies: &mut EnemyPool, frame: u64, tuning: &Tuning) {
    let approach = tuning.enemy_speed + tuning.difficulty_ramp(frame);
    enemies.for_each_live(|index, enemy| {
        if !enemy.is_active() {
            return;
        }
        let t = &mut enemy.transform;
        t.translation.z -= approach;
        t.rotation.x -= tuning.enemy_spin;
        t.translation.x += enemy.data.drift;

        if t.translation.x > STAGE_HALF_WIDTH {
            enemy.data.drift = -enemy.data.drift.abs();
        }
        if t.translation.x < -STAGE_HALF_WIDTH {
            enemy.data.drift = enemy.data.drift.abs();
        }
        if t.translation.z < NEAR_Z {
            log::trace!("enemy {index} slipped past");
            enemy.release();
        }
    });
}

/// Ballistic exit arc for Dying enemies; the slot frees once it drops below
/// the floor
pub fn fall_enemies(enemies: &mut EnemyPool, tuning: &Tuning) {
    enemies.for_each_live(|index, enemy| {
        if !enemy.is_dying() {
            return;
        }
        enemy.transform.translation.y += enemy.data.fall_speed;
        enemy.data.fall_speed -= tuning.fall_gravity;
        enemy.transform.translation.x += enemy.data.drift * tuning.fall_drift_factor;
        if enemy.transform.translation.y < FALL_FLOOR_Y {
            log::trace!("enemy {index} finished falling");
            enemy.release();
        }
    });
}

/// Conveyor the floor toward the camera; segments past the near plane jump
/// back by the wrap distance
pub fn scroll_stage(stage: &mut Stage, tuning: &Tuning) {
    for segment in &mut stage.segments {
        segment.translation.z -= tuning.stage_scroll_speed;
        if segment.translation.z < NEAR_Z {
            segment.translation.z += STAGE_WRAP_DISTANCE;
        }
    }
}
