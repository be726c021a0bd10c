//! One gameplay frame
//!
//! Advances the world deterministically given the controls held this frame.

use super::collision::{GameEvent, beams_vs_enemies, player_vs_enemies};
use super::motion::{fall_enemies, move_beams, move_enemies, move_player, scroll_stage};
use super::spawner::{spawn_beam, spawn_enemy};
use super::state::World;
use crate::tuning::Tuning;

/// Controls sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Fire (held; the cooldown limits the rate)
    pub fire: bool,
}

/// Advance the world by one frame of play and report what happened.
///
/// Order: player, beams (move then fire), enemies (move, spawn, fall),
/// collisions (player first, then beams), stage. Does not advance the frame
/// counter; the scene owns that.
pub fn tick(world: &mut World, input: &TickInput, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();

    move_player(&mut world.player, input.left, input.right, tuning);

    move_beams(&mut world.beams, tuning);
    spawn_beam(world, input.fire, tuning);

    move_enemies(&mut world.enemies, world.ledger.frame, tuning);
    spawn_enemy(world, tuning);
    fall_enemies(&mut world.enemies, tuning);

    player_vs_enemies(
        &world.player,
        &mut world.enemies,
        &mut world.ledger,
        &mut events,
    );
    beams_vs_enemies(
        &mut world.beams,
        &mut world.enemies,
        &mut world.ledger,
        tuning,
        &mut events,
    );

    scroll_stage(&mut world.stage, tuning);

    log::trace!(
        "frame {} score {} life {} beams {} enemies {}",
        world.ledger.frame,
        world.ledger.score,
        world.ledger.life,
        world.beams.live_count(),
        world.enemies.live_count()
    );
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::spawner::place_enemy;

    /// Tuning with enemy spawning switched off so scenarios stay scripted
    fn quiet() -> Tuning {
        Tuning {
            enemy_spawn_numerator: 0,
            ..Tuning::default()
        }
    }

    /// Enemy (x, z) after each frame, replaying the motion rules by hand.
    /// Index 0 is the spawn position.
    fn enemy_track(x: f32, z: f32, drift: f32, frames: usize, tuning: &Tuning) -> Vec<(f32, f32)> {
        let (mut x, mut z, mut drift) = (x, z, drift);
        let mut track = vec![(x, z)];
        for _ in 0..frames {
            z -= tuning.enemy_speed;
            x += drift;
            if x > STAGE_HALF_WIDTH {
                drift = -drift.abs();
            }
            if x < -STAGE_HALF_WIDTH {
                drift = drift.abs();
            }
            track.push((x, z));
        }
        track
    }

    #[test]
    fn test_beam_kills_drifting_enemy_on_exact_frame() {
        let tuning = quiet();
        let track = enemy_track(0.0, FAR_Z, 0.1, 200, &tuning);

        // The beam fires on frame 1 at z = 0 and moves from frame 2 on;
        // find the first frame the depths overlap and park the player in
        // the enemy's lane for that frame.
        let mut beam_z = 0.0f32;
        let mut hit_frame = None;
        for frame in 2..track.len() {
            beam_z += tuning.beam_speed;
            if (beam_z - track[frame].1).abs() < HIT_HALF_EXTENT {
                hit_frame = Some(frame);
                break;
            }
        }
        let hit_frame = hit_frame.unwrap();
        let lane = track[hit_frame].0;

        let mut world = World::new(5);
        world.player.transform.translation.x = lane;
        let e = place_enemy(&mut world.enemies, 0.0, FAR_Z, 0.1).unwrap();

        let fire = TickInput { fire: true, ..Default::default() };
        assert!(tick(&mut world, &fire, &tuning).is_empty());
        let b = 0;
        assert!(world.beams[b].is_active());

        let idle = TickInput::default();
        for frame in 2..hit_frame {
            let events = tick(&mut world, &idle, &tuning);
            assert!(events.is_empty(), "hit too early at frame {frame}");
            assert!(world.enemies[e].is_active());
            assert!(world.beams[b].is_active());
        }
        let events = tick(&mut world, &idle, &tuning);
        assert_eq!(events, vec![GameEvent::EnemyHit { beam: b, enemy: e }]);
        assert_eq!(world.ledger.score, 1);
        assert!(world.beams[b].is_empty());
        assert!(world.enemies[e].is_dying());

        // Nothing further scores while it falls
        for _ in 0..30 {
            assert!(tick(&mut world, &idle, &tuning).is_empty());
        }
        assert_eq!(world.ledger.score, 1);
        assert!(world.enemies[e].is_empty());
    }

    #[test]
    fn test_tick_does_not_advance_frame_counter() {
        let mut world = World::new(5);
        tick(&mut world, &TickInput::default(), &quiet());
        assert_eq!(world.ledger.frame, 0);
    }

    #[test]
    fn test_enemy_reaching_player_costs_life() {
        let tuning = quiet();
        let mut world = World::new(5);
        place_enemy(&mut world.enemies, 0.0, 3.0, 0.0);

        let mut hit_frames = 0;
        for _ in 0..40 {
            let events = tick(&mut world, &TickInput::default(), &tuning);
            hit_frames += events
                .iter()
                .filter(|e| matches!(e, GameEvent::PlayerHit { .. }))
                .count();
        }
        assert_eq!(hit_frames, 1);
        assert_eq!(world.ledger.life, STARTING_LIFE - 1);
    }

    #[test]
    fn test_full_pools_throttle_silently() {
        let tuning = Tuning {
            enemy_spawn_denominator: 1,
            beam_cooldown_frames: 0,
            ..Tuning::default()
        };
        let mut world = World::new(5);
        world.player.transform.translation.x = -4.0;
        let fire = TickInput { fire: true, ..Default::default() };
        for _ in 0..40 {
            tick(&mut world, &fire, &tuning);
            assert!(world.beams.live_count() <= MAX_BEAMS);
            assert!(world.enemies.live_count() <= MAX_ENEMIES);
        }
        assert_eq!(world.beams.live_count(), MAX_BEAMS);
    }

    #[test]
    fn test_determinism() {
        let tuning = Tuning::default();
        let mut a = World::new(2024);
        let mut b = World::new(2024);
        let inputs = [
            TickInput { right: true, fire: true, ..Default::default() },
            TickInput { left: true, ..Default::default() },
            TickInput { fire: true, ..Default::default() },
            TickInput::default(),
        ];
        for frame in 0..600 {
            let input = inputs[frame % inputs.len()];
            a.ledger.frame = frame as u64;
            b.ledger.frame = frame as u64;
            assert_eq!(tick(&mut a, &input, &tuning), tick(&mut b, &input, &tuning));
        }
        assert_eq!(a.ledger, b.ledger);
        for i in 0..MAX_ENEMIES {
            assert_eq!(a.enemies[i].state(), b.enemies[i].state());
            assert_eq!(a.enemies[i].data, b.enemies[i].data);
            assert_eq!(a.enemies[i].transform, b.enemies[i].transform);
        }
    }
}
