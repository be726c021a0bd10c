//! Hit detection between the player, beams and enemies
//!
//! Everything uses one axis-aligned unit box on the x/z plane; height is
//! ignored so falling enemies are filtered by their tag, not their y.

use glam::Vec3;

use super::state::{BeamPool, EnemyPool, Ledger, Player};
use crate::consts::HIT_HALF_EXTENT;
use crate::tuning::Tuning;

/// Something the scene reacts to (sound effects, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An enemy rammed the player
    PlayerHit { enemy: usize },
    /// A beam destroyed an enemy
    EnemyHit { beam: usize, enemy: usize },
}

/// Box overlap on the x/z plane with a unit half-extent
#[inline]
pub fn overlaps(a: Vec3, b: Vec3) -> bool {
    (a.x - b.x).abs() < HIT_HALF_EXTENT && (a.z - b.z).abs() < HIT_HALF_EXTENT
}

/// Each active enemy touching the player is removed outright and costs one
/// life. Several enemies in the same frame each count.
pub fn player_vs_enemies(
    player: &Player,
    enemies: &mut EnemyPool,
    ledger: &mut Ledger,
    events: &mut Vec<GameEvent>,
) {
    let pos = player.transform.translation;
    enemies.for_each_live(|index, enemy| {
        if enemy.is_active() && overlaps(pos, enemy.transform.translation) {
            enemy.release();
            ledger.life -= 1;
            log::debug!("player hit by enemy {index}, life {}", ledger.life);
            events.push(GameEvent::PlayerHit { enemy: index });
        }
    });
}

/// Enemies in index order, each against beams in index order. The first
/// beam to touch an enemy consumes both: the beam frees, the enemy starts
/// falling (or frees when the fall animation is off), score goes up by one.
/// Consumed beams and enemies are never matched again this frame.
pub fn beams_vs_enemies(
    beams: &mut BeamPool,
    enemies: &mut EnemyPool,
    ledger: &mut Ledger,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    enemies.for_each_live(|enemy_index, enemy| {
        if !enemy.is_active() {
            return;
        }
        let target = enemy.transform.translation;
        let hit = beams
            .iter_active()
            .find(|(_, beam)| overlaps(beam.transform.translation, target))
            .map(|(index, _)| index);
        let Some(beam_index) = hit else {
            return;
        };

        beams.release(beam_index);
        if tuning.fall_animation {
            enemy.kill();
            enemy.data.fall_speed = tuning.fall_launch_speed;
        } else {
            enemy.release();
        }
        ledger.score += 1;
        log::debug!(
            "beam {beam_index} hit enemy {enemy_index}, score {}",
            ledger.score
        );
        events.push(GameEvent::EnemyHit {
            beam: beam_index,
            enemy: enemy_index,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawner::{place_beam, place_enemy};
    use crate::sim::state::World;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_threshold() {
        assert!(overlaps(Vec3::ZERO, Vec3::new(0.99, 0.0, 0.99)));
        assert!(!overlaps(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)));
        assert!(!overlaps(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)));
        // Height is ignored
        assert!(overlaps(Vec3::ZERO, Vec3::new(0.5, 50.0, -0.5)));
    }

    #[test]
    fn test_player_hit_removes_enemy_and_costs_life() {
        let mut world = World::new(0);
        let i = place_enemy(&mut world.enemies, 0.5, 0.5, 0.1).unwrap();
        let far = place_enemy(&mut world.enemies, 0.0, 20.0, 0.1).unwrap();
        let mut events = Vec::new();

        player_vs_enemies(&world.player, &mut world.enemies, &mut world.ledger, &mut events);

        assert!(world.enemies[i].is_empty());
        assert!(world.enemies[far].is_active());
        assert_eq!(world.ledger.life, 2);
        assert_eq!(events, vec![GameEvent::PlayerHit { enemy: i }]);
    }

    #[test]
    fn test_simultaneous_player_hits_each_count() {
        let mut world = World::new(0);
        place_enemy(&mut world.enemies, 0.2, 0.0, 0.1);
        place_enemy(&mut world.enemies, -0.2, 0.3, 0.1);
        place_enemy(&mut world.enemies, 0.0, -0.4, 0.1);
        place_enemy(&mut world.enemies, 0.0, 0.9, 0.1);
        let mut events = Vec::new();

        player_vs_enemies(&world.player, &mut world.enemies, &mut world.ledger, &mut events);

        assert_eq!(world.ledger.life, -1);
        assert_eq!(events.len(), 4);
        assert_eq!(world.enemies.live_count(), 0);
    }

    #[test]
    fn test_dying_enemy_never_collides() {
        let mut world = World::new(0);
        let tuning = Tuning::default();
        let i = place_enemy(&mut world.enemies, 0.0, 0.0, 0.1).unwrap();
        world.enemies.kill(i);
        place_beam(&mut world.beams, 0.0, 0.0);
        let mut events = Vec::new();

        player_vs_enemies(&world.player, &mut world.enemies, &mut world.ledger, &mut events);
        beams_vs_enemies(
            &mut world.beams,
            &mut world.enemies,
            &mut world.ledger,
            &tuning,
            &mut events,
        );

        assert!(events.is_empty());
        assert_eq!(world.ledger.life, 3);
        assert_eq!(world.ledger.score, 0);
        assert!(world.enemies[i].is_dying());
        assert_eq!(world.beams.live_count(), 1);
    }

    #[test]
    fn test_beam_hit_starts_fall() {
        let mut world = World::new(0);
        let tuning = Tuning::default();
        let e = place_enemy(&mut world.enemies, 1.0, 10.0, 0.1).unwrap();
        let b = place_beam(&mut world.beams, 1.5, 9.5).unwrap();
        let mut events = Vec::new();

        beams_vs_enemies(
            &mut world.beams,
            &mut world.enemies,
            &mut world.ledger,
            &tuning,
            &mut events,
        );

        assert!(world.beams[b].is_empty());
        assert!(world.enemies[e].is_dying());
        assert_eq!(world.enemies[e].data.fall_speed, 1.0);
        assert_eq!(world.ledger.score, 1);
        assert_eq!(events, vec![GameEvent::EnemyHit { beam: b, enemy: e }]);
    }

    #[test]
    fn test_beam_hit_without_fall_frees_enemy() {
        let mut world = World::new(0);
        let tuning = Tuning::classic();
        let e = place_enemy(&mut world.enemies, 0.0, 10.0, 0.1).unwrap();
        place_beam(&mut world.beams, 0.0, 10.0);
        let mut events = Vec::new();

        beams_vs_enemies(
            &mut world.beams,
            &mut world.enemies,
            &mut world.ledger,
            &tuning,
            &mut events,
        );

        assert!(world.enemies[e].is_empty());
        assert_eq!(world.ledger.score, 1);
    }

    #[test]
    fn test_consumed_participants_not_matched_twice() {
        let mut world = World::new(0);
        let tuning = Tuning::default();
        // Two beams on one enemy: only the lowest-index beam is used
        let e0 = place_enemy(&mut world.enemies, 0.0, 10.0, 0.1).unwrap();
        let b0 = place_beam(&mut world.beams, 0.1, 10.0).unwrap();
        let b1 = place_beam(&mut world.beams, -0.1, 10.0).unwrap();
        // A second enemy overlapping both beams takes the survivor
        let e1 = place_enemy(&mut world.enemies, 0.0, 10.2, -0.1).unwrap();
        // A third enemy finds no beams left
        let e2 = place_enemy(&mut world.enemies, 0.0, 9.8, 0.1).unwrap();
        let mut events = Vec::new();

        beams_vs_enemies(
            &mut world.beams,
            &mut world.enemies,
            &mut world.ledger,
            &tuning,
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                GameEvent::EnemyHit { beam: b0, enemy: e0 },
                GameEvent::EnemyHit { beam: b1, enemy: e1 },
            ]
        );
        assert_eq!(world.ledger.score, 2);
        assert!(world.enemies[e2].is_active());
        assert_eq!(world.beams.live_count(), 0);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -10.0f32..10.0, az in -10.0f32..10.0,
            bx in -10.0f32..10.0, bz in -10.0f32..10.0,
            ay in -5.0f32..5.0, by in -5.0f32..5.0,
        ) {
            let a = Vec3::new(ax, ay, az);
            let b = Vec3::new(bx, by, bz);
            prop_assert_eq!(overlaps(a, b), overlaps(b, a));
        }

        #[test]
        fn prop_score_and_life_move_by_hit_count(
            enemies in proptest::collection::vec((-3.0f32..3.0, -2.0f32..6.0), 0..10),
            beams in proptest::collection::vec((-3.0f32..3.0, -2.0f32..6.0), 0..10),
        ) {
            let mut world = World::new(0);
            let tuning = Tuning::default();
            for (x, z) in &enemies {
                place_enemy(&mut world.enemies, *x, *z, 0.1);
            }
            for (x, z) in &beams {
                place_beam(&mut world.beams, *x, *z);
            }
            let mut events = Vec::new();
            player_vs_enemies(&world.player, &mut world.enemies, &mut world.ledger, &mut events);
            beams_vs_enemies(&mut world.beams, &mut world.enemies, &mut world.ledger, &tuning, &mut events);

            let player_hits = events.iter().filter(|e| matches!(e, GameEvent::PlayerHit { .. })).count();
            let enemy_hits = events.len() - player_hits;
            prop_assert_eq!(world.ledger.life, 3 - player_hits as i32);
            prop_assert_eq!(world.ledger.score as usize, enemy_hits);
            prop_assert_eq!(world.beams.live_count(), beams.len() - enemy_hits);
            // Every resolved beam hit leaves a Dying enemy behind
            let dying = world.enemies.slots().iter().filter(|s| s.is_dying()).count();
            prop_assert_eq!(dying, enemy_hits);
        }
    }
}
