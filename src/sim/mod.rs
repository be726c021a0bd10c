//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic and
//! free of rendering, audio or input dependencies:
//! - One call to `tick` per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (by slot index)

pub mod collision;
pub mod motion;
pub mod pool;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod transform;

pub use collision::{GameEvent, beams_vs_enemies, overlaps, player_vs_enemies};
pub use pool::{Pool, Slot, SlotState};
pub use state::{
    BeamData, BeamPool, EnemyData, EnemyPool, Ledger, Player, Stage, World, BEAM_SCALE,
    ENEMY_SCALE, PLAYER_SCALE, STAGE_SCALE,
};
pub use tick::{TickInput, tick};
pub use transform::Transform;
