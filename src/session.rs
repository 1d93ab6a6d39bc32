//! Game loop owner
//!
//! `Session` holds the one `GameState` plus everything that feeds it: the
//! RNG, the key map, the aim gesture and the fire cooldown. Hosts call in from
//! three kinds of callbacks, each of which runs to completion:
//! - `frame` once per display frame
//! - `on_spawn_interval` / `on_countdown_interval` from real-time timers
//! - key and pointer handlers
//!
//! Hosts without native timers can drive the intervals with `run_timers`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::COUNTDOWN_INTERVAL_MS;
use crate::sim::input::is_pause_key;
use crate::sim::{
    AimGesture, AimLine, Bullet, GameEvent, GamePhase, GameState, KeyState, Trigger, spawn_zombie,
    tick, tick_clock,
};
use crate::tuning::Tuning;

/// What the host should do after a frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Simulated one step: render, then schedule the next frame
    Stepped,
    /// Paused: skip rendering but keep scheduling frames
    Skipped,
    /// Game over: stop scheduling frames
    Halted,
}

/// Repeating real-time timer for hosts without `setInterval`
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period_ms: f64,
    next_due_ms: f64,
    cancelled: bool,
}

impl IntervalTimer {
    pub fn new(period_ms: f64, start_ms: f64) -> Self {
        Self {
            period_ms,
            next_due_ms: start_ms + period_ms,
            cancelled: false,
        }
    }

    /// Number of periods that have elapsed by `now_ms` since the last poll
    ///
    /// A timer without a positive period never fires.
    pub fn poll(&mut self, now_ms: f64) -> u32 {
        if self.cancelled || !(self.period_ms > 0.0) {
            return 0;
        }
        let mut fired = 0;
        while now_ms >= self.next_due_ms {
            self.next_due_ms += self.period_ms;
            fired += 1;
        }
        fired
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// One run of the game, from start to game over
pub struct Session {
    state: GameState,
    rng: Pcg32,
    keys: KeyState,
    aim: AimGesture,
    trigger: Trigger,
    seed: u64,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let trigger = Trigger::new(tuning.fire_cooldown_ms);
        Self {
            state: GameState::new(tuning),
            rng: Pcg32::seed_from_u64(seed),
            keys: KeyState::default(),
            aim: AimGesture::default(),
            trigger,
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Aim line while a drag is in progress
    pub fn aim_line(&self) -> Option<AimLine> {
        self.aim.active()
    }

    /// Animation-frame callback
    pub fn frame(&mut self) -> FrameOutcome {
        match self.state.phase {
            GamePhase::GameOver => FrameOutcome::Halted,
            GamePhase::Paused => FrameOutcome::Skipped,
            GamePhase::Running => {
                let input = self.keys.snapshot();
                tick(&mut self.state, &input);
                FrameOutcome::Stepped
            }
        }
    }

    /// Spawn-interval callback
    pub fn on_spawn_interval(&mut self) {
        spawn_zombie(&mut self.state, &mut self.rng);
    }

    /// Countdown-interval callback
    pub fn on_countdown_interval(&mut self) {
        tick_clock(&mut self.state);
    }

    /// Whether the interval timers should keep running
    pub fn wants_intervals(&self) -> bool {
        !self.state.is_over()
    }

    /// Fire any interval callbacks that are due, cancelling both timers once
    /// the game is over
    pub fn run_timers(
        &mut self,
        spawn: &mut IntervalTimer,
        countdown: &mut IntervalTimer,
        now_ms: f64,
    ) {
        for _ in 0..spawn.poll(now_ms) {
            self.on_spawn_interval();
        }
        for _ in 0..countdown.poll(now_ms) {
            self.on_countdown_interval();
        }
        if !self.wants_intervals() {
            spawn.cancel();
            countdown.cancel();
        }
    }

    /// Default timers for a session starting at `start_ms`
    pub fn timers(&self, start_ms: f64) -> (IntervalTimer, IntervalTimer) {
        (
            IntervalTimer::new(self.state.tuning.spawn_interval_ms, start_ms),
            IntervalTimer::new(COUNTDOWN_INTERVAL_MS, start_ms),
        )
    }

    /// Key pressed; the pause key only toggles on a fresh press
    pub fn key_down(&mut self, key: &str) {
        let fresh = self.keys.key_down(key);
        if fresh && is_pause_key(key) {
            self.toggle_pause();
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.key_up(key);
    }

    /// Forget held keys (e.g. window lost focus and key-ups will never arrive)
    pub fn release_keys(&mut self) {
        self.keys.clear();
    }

    /// Running <-> Paused; no effect after game over
    pub fn toggle_pause(&mut self) {
        let paused = match self.state.phase {
            GamePhase::Running => true,
            GamePhase::Paused => false,
            GamePhase::GameOver => return,
        };
        self.state.phase = if paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        };
        self.state.events.push(GameEvent::PauseToggled { paused });
        log::info!("{}", if paused { "Paused" } else { "Resumed" });
    }

    /// Pause if running (auto-pause on blur/tab hide)
    pub fn pause(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.toggle_pause();
        }
    }

    /// Pointer pressed: start aiming from the survivor's weapon
    pub fn pointer_down(&mut self, pointer: Vec2) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        self.aim.press(self.state.survivor.weapon_origin(), pointer);
    }

    pub fn pointer_move(&mut self, pointer: Vec2) {
        self.aim.drag(pointer);
    }

    /// Pointer released: fire along the aim if the cooldown allows
    ///
    /// Returns true if a bullet was created.
    pub fn pointer_up(&mut self, now_ms: f64) -> bool {
        let Some(line) = self.aim.release() else {
            return false;
        };
        if self.state.phase != GamePhase::Running || !self.trigger.try_fire(now_ms) {
            return false;
        }

        let velocity = line.velocity(self.state.tuning.bullet_speed);
        let origin = self.state.survivor.weapon_origin();
        self.state.bullets.push(Bullet::new(origin, velocity));
        self.state.events.push(GameEvent::ShotFired);
        true
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn session() -> Session {
        Session::new(42, Tuning::default())
    }

    fn fire(session: &mut Session, now_ms: f64) -> bool {
        session.pointer_down(Vec2::new(700.0, 300.0));
        session.pointer_move(Vec2::new(800.0, 200.0));
        session.pointer_up(now_ms)
    }

    #[test]
    fn test_frame_outcomes_follow_phase() {
        let mut s = session();
        assert_eq!(s.frame(), FrameOutcome::Stepped);

        s.key_down("p");
        assert_eq!(s.phase(), GamePhase::Paused);
        assert_eq!(s.frame(), FrameOutcome::Skipped);

        s.key_up("p");
        s.key_down("P");
        assert_eq!(s.frame(), FrameOutcome::Stepped);

        s.state_mut().end(crate::sim::GameOverReason::TimeUp);
        assert_eq!(s.frame(), FrameOutcome::Halted);
        s.toggle_pause();
        assert_eq!(s.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_cooldown_blocks_rapid_fire() {
        let mut s = session();
        assert!(fire(&mut s, 1000.0));
        assert!(!fire(&mut s, 1100.0));
        assert_eq!(s.state().bullets.len(), 1);

        assert!(fire(&mut s, 1400.0));
        assert_eq!(s.state().bullets.len(), 2);
    }

    #[test]
    fn test_bullet_leaves_weapon_at_fixed_speed() {
        let mut s = session();
        assert!(fire(&mut s, 0.0));
        let bullet = &s.state().bullets[0];
        assert_eq!(bullet.pos, Vec2::new(450.0, GROUND_LEVEL - 15.0));
        assert!((bullet.vel.length() - BULLET_SPEED).abs() < 1e-4);
        assert!(bullet.vel.x > 0.0 && bullet.vel.y < 0.0);
        assert!(s.drain_events().contains(&GameEvent::ShotFired));
    }

    #[test]
    fn test_release_without_press_does_not_fire() {
        let mut s = session();
        assert!(!s.pointer_up(0.0));
        assert!(s.state().bullets.is_empty());
    }

    #[test]
    fn test_aim_line_visible_while_dragging() {
        let mut s = session();
        assert!(s.aim_line().is_none());
        s.pointer_down(Vec2::new(600.0, 300.0));
        let line = s.aim_line().unwrap();
        assert_eq!(line.start, Vec2::new(450.0, GROUND_LEVEL - 15.0));
        s.pointer_up(0.0);
        assert!(s.aim_line().is_none());
    }

    #[test]
    fn test_interval_timer_catches_up_and_cancels() {
        let mut timer = IntervalTimer::new(1000.0, 0.0);
        assert_eq!(timer.poll(999.0), 0);
        assert_eq!(timer.poll(1000.0), 1);
        assert_eq!(timer.poll(3500.0), 2);
        timer.cancel();
        assert_eq!(timer.poll(10_000.0), 0);
    }

    #[test]
    fn test_zero_period_timer_never_fires() {
        let mut timer = IntervalTimer::new(0.0, 0.0);
        assert_eq!(timer.poll(5_000.0), 0);
        let mut timer = IntervalTimer::new(-10.0, 0.0);
        assert_eq!(timer.poll(5_000.0), 0);
    }

    #[test]
    fn test_held_pause_key_toggles_once() {
        let mut s = session();
        s.key_down("p");
        // Browser auto-repeat: more key-downs without a key-up
        s.key_down("p");
        s.key_down("p");
        assert_eq!(s.phase(), GamePhase::Paused);

        s.key_up("p");
        s.key_down("p");
        assert_eq!(s.phase(), GamePhase::Running);
    }

    #[test]
    fn test_paused_intervals_do_nothing() {
        let mut s = session();
        s.toggle_pause();
        s.on_spawn_interval();
        s.on_countdown_interval();
        assert!(s.state().zombies.is_empty());
        assert_eq!(s.state().time_remaining, ROUND_SECONDS);
    }
}
