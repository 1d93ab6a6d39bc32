//! Simulation module
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - One untimed step per display frame
//! - Real-time work (spawning, countdown, fire cooldown) enters through
//!   explicit calls that carry their own timestamps
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod countdown;
pub mod input;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Span, can_move, resolve_block_contacts, resolve_bullet_hits};
pub use countdown::tick_clock;
pub use input::{AimGesture, AimLine, KeyState, TickInput, Trigger};
pub use spawner::spawn_zombie;
pub use state::{
    Block, Bullet, Direction, GameEvent, GameOverReason, GamePhase, GameState, Survivor, Zombie,
};
pub use tick::tick;
