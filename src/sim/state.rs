//! World state and entity payloads
//!
//! Everything the simulation mutates in a frame lives in [`World`]; the
//! renderer reads it back without touching it.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::pool::{Pool, Slot};
use super::transform::Transform;
use crate::consts::*;

/// Beam slots carry nothing beyond their transform
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BeamData;

/// Per-enemy scratch values
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnemyData {
    /// Lateral speed per frame (sign flips at the stage edges)
    pub drift: f32,
    /// Vertical speed while Dying
    pub fall_speed: f32,
}

pub type BeamPool = Pool<BeamData, MAX_BEAMS>;
pub type EnemyPool = Pool<EnemyData, MAX_ENEMIES>;

/// Model scale for each entity kind
pub const PLAYER_SCALE: f32 = 0.5;
pub const BEAM_SCALE: f32 = 0.3;
pub const ENEMY_SCALE: f32 = 0.5;
pub const STAGE_SCALE: Vec3 = Vec3::new(4.5, 1.0, 1.0);

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub transform: Transform,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            transform: Transform::with_scale(PLAYER_SCALE),
        }
    }
}

/// Scrolling floor: a fixed ring of segments that wrap instead of respawning
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub segments: [Transform; STAGE_SEGMENTS],
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            segments: std::array::from_fn(|i| Transform {
                scale: STAGE_SCALE,
                rotation: Vec3::ZERO,
                translation: Vec3::new(0.0, STAGE_Y, STAGE_SEGMENT_SPACING * i as f32 + NEAR_Z),
            }),
        }
    }
}

/// Score, life and timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    pub score: u32,
    /// Signed: several hits in one frame may push it below zero
    pub life: i32,
    /// Frames since the current run started (or since boot while on the title)
    pub frame: u64,
    /// 0 = ready to fire, otherwise frames since the last shot
    pub beam_cooldown: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            score: 0,
            life: STARTING_LIFE,
            frame: 0,
            beam_cooldown: 0,
        }
    }
}

impl Ledger {
    pub fn is_dead(&self) -> bool {
        self.life <= 0
    }
}

/// Complete simulation state for one scene
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    pub beams: BeamPool,
    pub enemies: EnemyPool,
    pub stage: Stage,
    pub ledger: Ledger,
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
}

impl World {
    /// Create a fresh world with a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self {
            player: Player::default(),
            beams: Pool::new(Slot::new(Transform::with_scale(BEAM_SCALE), BeamData)),
            enemies: Pool::new(Slot::new(
                Transform::with_scale(ENEMY_SCALE),
                EnemyData::default(),
            )),
            stage: Stage::default(),
            ledger: Ledger::default(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset for a new run. The stage keeps scrolling from where it is and
    /// the RNG stream continues.
    pub fn start_run(&mut self) {
        self.ledger = Ledger::default();
        self.beams.clear();
        self.enemies.clear();
        self.player.transform.translation.x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_layout() {
        let stage = Stage::default();
        assert_eq!(stage.segments[0].translation, Vec3::new(0.0, -1.5, -5.0));
        assert_eq!(stage.segments[19].translation.z, 33.0);
        assert_eq!(stage.segments[7].scale, STAGE_SCALE);
    }

    #[test]
    fn test_start_run_resets_ledger_and_pools() {
        let mut world = World::new(1);
        world.ledger.score = 12;
        world.ledger.life = -1;
        world.ledger.frame = 900;
        world.ledger.beam_cooldown = 4;
        world.beams.allocate();
        let e = world.enemies.allocate().unwrap();
        world.enemies.kill(e);
        world.player.transform.translation.x = 3.5;

        world.start_run();

        assert_eq!(world.ledger, Ledger::default());
        assert_eq!(world.ledger.life, 3);
        assert_eq!(world.beams.live_count(), 0);
        assert_eq!(world.enemies.live_count(), 0);
        assert_eq!(world.player.transform.translation.x, 0.0);
    }

    #[test]
    fn test_pool_templates_keep_model_scale() {
        let world = World::new(1);
        assert_eq!(world.beams[3].transform.scale, Vec3::splat(BEAM_SCALE));
        assert_eq!(world.enemies[9].transform.scale, Vec3::splat(ENEMY_SCALE));
        assert_eq!(world.player.transform.scale, Vec3::splat(PLAYER_SCALE));
    }
}
