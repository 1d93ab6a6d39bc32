//! Zombie Siege - A side-view zombie survival arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, spawning, countdown, game state)
//! - `session`: Game loop owner driven by frames, intervals and input events
//! - `renderer`: WebGPU rendering pipeline
//! - `highscores`: LocalStorage leaderboard
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences
//! - `audio`: Procedural Web Audio cues (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod highscores;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::Leaderboard;
pub use session::{FrameOutcome, Session};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas pixels)
    pub const GAME_WIDTH: f32 = 900.0;
    pub const GAME_HEIGHT: f32 = 600.0;
    /// Floor line: survivor feet, zombie feet and bottom block row sit here
    pub const GROUND_LEVEL: f32 = GAME_HEIGHT - 60.0;

    /// Tolerance for "same ground line" comparisons
    pub const CONTACT_EPSILON: f32 = 0.01;

    /// Survivor defaults
    pub const SURVIVOR_WIDTH: f32 = 30.0;
    pub const SURVIVOR_HEIGHT: f32 = 30.0;
    pub const SURVIVOR_MAX_HEALTH: i32 = 200;
    pub const SURVIVOR_SPEED: f32 = 5.0;
    pub const JUMP_VELOCITY: f32 = -5.0;

    /// Zombie defaults
    pub const ZOMBIE_WIDTH: f32 = 30.0;
    pub const ZOMBIE_HEIGHT: f32 = 30.0;
    pub const ZOMBIE_SPEED: f32 = 1.0;
    /// Right-edge spawn sits this far in from the playfield edge
    pub const ZOMBIE_RIGHT_SPAWN_INSET: f32 = 40.0;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 10.0;
    pub const BULLET_HEIGHT: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 7.0;

    /// Block defaults
    pub const BLOCK_SIZE: f32 = 30.0;
    pub const BLOCK_HEALTH: i32 = 3;

    /// Gravity (pixels per tick²)
    pub const GRAVITY: f32 = 0.3;

    /// Scoring and damage
    pub const KILL_SCORE: u64 = 10;
    pub const CONTACT_DAMAGE: i32 = 2;

    /// Real-time intervals (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    pub const COUNTDOWN_INTERVAL_MS: f64 = 1000.0;
    pub const FIRE_COOLDOWN_MS: f64 = 300.0;

    /// Round length (seconds)
    pub const ROUND_SECONDS: u32 = 300;

    /// Leaderboard size
    pub const MAX_LEADERBOARD_ENTRIES: usize = 10;
}

/// Compare two ground-line coordinates within `CONTACT_EPSILON`
#[inline]
pub fn same_line(a: f32, b: f32) -> bool {
    (a - b).abs() <= consts::CONTACT_EPSILON
}

/// Format whole seconds as `mm:ss`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(300), "05:00");
        assert_eq!(format_clock(299), "04:59");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn test_same_line() {
        assert!(same_line(consts::GROUND_LEVEL, 510.0 + 30.0));
        assert!(!same_line(consts::GROUND_LEVEL, 535.3));
    }
}
