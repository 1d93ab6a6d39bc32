//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`; there are no globals.

use glam::Vec2;

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Game is paused (no ticks, no spawns, clock stopped)
    Paused,
    /// Run ended - terminal
    GameOver,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Survivor health dropped to zero
    SurvivorDied,
    /// Countdown reached zero
    TimeUp,
}

/// Things that happened during a tick or callback, drained by the front end
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ZombieSpawned { direction: Direction },
    ZombieKilled { score: u64 },
    BlockDestroyed,
    ShotFired,
    ClockTick { seconds_remaining: u32 },
    PauseToggled { paused: bool },
    GameOver { reason: GameOverReason, score: u64 },
}

/// Horizontal travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Unit sign of motion along x
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// The player character
///
/// `pos.x` is the horizontal center, `pos.y` the foot line.
#[derive(Debug, Clone)]
pub struct Survivor {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub health: i32,
    pub alive: bool,
    pub speed: f32,
    pub vy: f32,
    pub on_ground: bool,
}

impl Survivor {
    /// Spawn centered on screen, standing on the ground
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(GAME_WIDTH / 2.0, GROUND_LEVEL),
            width: SURVIVOR_WIDTH,
            height: SURVIVOR_HEIGHT,
            health: tuning.survivor_health,
            alive: true,
            speed: tuning.survivor_speed,
            vy: 0.0,
            on_ground: true,
        }
    }

    /// Left edge of the body box
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.width / 2.0
    }

    /// Right edge of the body box
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Where bullets leave from (mid-body)
    pub fn weapon_origin(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y - self.height / 2.0)
    }

    /// Apply contact damage; returns true if this blow was lethal
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health = (self.health - amount).max(0);
        if self.health <= 0 && self.alive {
            self.alive = false;
            return true;
        }
        false
    }
}

/// A zombie walking along the ground
///
/// `pos.x` is the left edge, `pos.y` the foot line.
#[derive(Debug, Clone)]
pub struct Zombie {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub direction: Direction,
}

impl Zombie {
    pub fn new(x: f32, speed: f32, direction: Direction) -> Self {
        Self {
            pos: Vec2::new(x, GROUND_LEVEL),
            width: ZOMBIE_WIDTH,
            height: ZOMBIE_HEIGHT,
            speed,
            direction,
        }
    }
}

/// A projectile
///
/// `pos` is the top-left corner of the bullet box.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
        }
    }
}

/// A destructible cover block
///
/// `pos` is the top-left corner.
#[derive(Debug, Clone)]
pub struct Block {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub health: i32,
}

impl Block {
    pub fn new(x: f32, y: f32, health: i32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width: BLOCK_SIZE,
            height: BLOCK_SIZE,
            health,
        }
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Bottom-row blocks rest on the ground and obstruct walking
    pub fn on_ground(&self) -> bool {
        crate::same_line(self.pos.y, GROUND_LEVEL - self.height)
    }
}

/// Two 2x2 clusters flanking the survivor's start position
pub fn initial_blocks(center_x: f32, health: i32) -> Vec<Block> {
    let columns = [-90.0, -60.0, 60.0, 90.0];
    let rows = [GROUND_LEVEL - BLOCK_SIZE, GROUND_LEVEL - 2.0 * BLOCK_SIZE];

    columns
        .iter()
        .flat_map(|dx| {
            rows.iter()
                .map(move |&y| Block::new(center_x + dx, y, health))
        })
        .collect()
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance parameters this run was started with
    pub tuning: Tuning,
    pub survivor: Survivor,
    pub zombies: Vec<Zombie>,
    pub bullets: Vec<Bullet>,
    pub blocks: Vec<Block>,
    pub score: u64,
    /// Whole seconds left on the clock
    pub time_remaining: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the front end last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        let survivor = Survivor::new(&tuning);
        let blocks = initial_blocks(survivor.pos.x, tuning.block_health);
        Self {
            time_remaining: tuning.round_seconds,
            survivor,
            zombies: Vec::new(),
            bullets: Vec::new(),
            blocks,
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Credit one zombie kill
    pub fn award_kill(&mut self) {
        self.score += self.tuning.kill_score;
        self.events.push(GameEvent::ZombieKilled { score: self.score });
    }

    /// Enter the terminal phase (idempotent - only the first call emits)
    pub fn end(&mut self, reason: GameOverReason) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        log::info!("Game over ({:?}), final score {}", reason, self.score);
        self.events.push(GameEvent::GameOver {
            reason,
            score: self.score,
        });
    }

    /// Hand accumulated events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
