//! Spawn policies for beams and enemies
//!
//! A spawner only ever claims a slot through [`super::pool::Pool::allocate`];
//! a full pool simply means nothing spawns this frame.

use glam::Vec3;
use rand::Rng;

use super::pool::Slot;
use super::state::{BeamData, BeamPool, EnemyData, EnemyPool, World};
use crate::consts::*;
use crate::tuning::Tuning;

/// Enemy spawn x is quantized to this step
const SPAWN_X_STEP: f32 = 0.1;

/// Fire a beam if the trigger is held and the cooldown allows it.
///
/// Runs every frame: while cooling down the counter advances and wraps to 0
/// once it passes `beam_cooldown_frames`. Returns the slot that was claimed.
pub fn spawn_beam(world: &mut World, fire_held: bool, tuning: &Tuning) -> Option<usize> {
    if world.ledger.beam_cooldown != 0 {
        world.ledger.beam_cooldown += 1;
        if world.ledger.beam_cooldown > tuning.beam_cooldown_frames {
            world.ledger.beam_cooldown = 0;
        }
        return None;
    }
    if !fire_held {
        return None;
    }

    let origin = world.player.transform.translation;
    let index = place_beam(&mut world.beams, origin.x, origin.z)?;
    if tuning.beam_cooldown_frames > 0 {
        world.ledger.beam_cooldown = 1;
    }
    log::debug!("beam {index} fired at x={:.1}", origin.x);
    Some(index)
}

/// Claim a beam slot at (x, 0, z) with a fresh spin
pub fn place_beam(beams: &mut BeamPool, x: f32, z: f32) -> Option<usize> {
    let index = beams.allocate()?;
    reset_slot(&mut beams[index], Vec3::new(x, 0.0, z), BeamData);
    Some(index)
}

/// Roll the spawn chance and, on success, drop an enemy on the far plane at a
/// random lane with a random drift direction.
pub fn spawn_enemy(world: &mut World, tuning: &Tuning) -> Option<usize> {
    if !world
        .rng
        .random_ratio(tuning.enemy_spawn_numerator, tuning.enemy_spawn_denominator)
    {
        return None;
    }
    if world.enemies.is_full() {
        return None;
    }

    let lanes = (2.0 * STAGE_HALF_WIDTH / SPAWN_X_STEP).round() as u32;
    let lane = world.rng.random_range(0..=lanes);
    let x = lane as f32 * SPAWN_X_STEP - STAGE_HALF_WIDTH;
    let drift = if world.rng.random_bool(0.5) {
        tuning.enemy_drift
    } else {
        -tuning.enemy_drift
    };

    let index = place_enemy(&mut world.enemies, x, FAR_Z, drift)?;
    log::debug!("enemy {index} spawned at x={x:.1} drift={drift:+.1}");
    Some(index)
}

/// Claim an enemy slot at (x, 0, z) with the given drift
pub fn place_enemy(enemies: &mut EnemyPool, x: f32, z: f32, drift: f32) -> Option<usize> {
    let index = enemies.allocate()?;
    reset_slot(
        &mut enemies[index],
        Vec3::new(x, 0.0, z),
        EnemyData {
            drift,
            fall_speed: 0.0,
        },
    );
    Some(index)
}

fn reset_slot<T>(slot: &mut Slot<T>, translation: Vec3, data: T) {
    slot.transform.translation = translation;
    slot.transform.rotation = Vec3::ZERO;
    slot.data = data;
}
