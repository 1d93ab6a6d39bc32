//! Input translation
//!
//! Key events update a pressed-key map asynchronously; the simulation reads a
//! level-triggered `TickInput` snapshot of it once per tick. Pointer drags
//! build an aim line and fire on release, gated by a real-time cooldown.

use std::collections::HashMap;

use glam::Vec2;

/// Key identifiers (DOM `KeyboardEvent.key` values)
pub mod keys {
    pub const LEFT: &str = "ArrowLeft";
    pub const RIGHT: &str = "ArrowRight";
    pub const JUMP: &str = "ArrowUp";
}

/// Pause toggles on either case of `p`
pub fn is_pause_key(key: &str) -> bool {
    matches!(key, "p" | "P")
}

/// Movement intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Pressed/released state per key
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashMap<String, bool>,
}

impl KeyState {
    /// Mark a key held; returns false if it already was (auto-repeat)
    pub fn key_down(&mut self, key: &str) -> bool {
        let was_down = self.pressed.insert(key.to_string(), true).unwrap_or(false);
        !was_down
    }

    pub fn key_up(&mut self, key: &str) {
        self.pressed.insert(key.to_string(), false);
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.pressed.get(key).copied().unwrap_or(false)
    }

    /// Release everything (focus lost)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.is_down(keys::LEFT),
            right: self.is_down(keys::RIGHT),
            jump: self.is_down(keys::JUMP),
        }
    }
}

/// Line from the weapon origin to the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimLine {
    pub start: Vec2,
    pub end: Vec2,
}

impl AimLine {
    /// Velocity of `speed` magnitude along the aim direction
    pub fn velocity(&self, speed: f32) -> Vec2 {
        let delta = self.end - self.start;
        let angle = delta.y.atan2(delta.x);
        Vec2::new(speed * angle.cos(), speed * angle.sin())
    }
}

/// Press → move → release drag gesture
#[derive(Debug, Clone, Default)]
pub struct AimGesture {
    line: Option<AimLine>,
}

impl AimGesture {
    /// Start aiming; the origin is captured once at press time
    pub fn press(&mut self, origin: Vec2, pointer: Vec2) {
        self.line = Some(AimLine {
            start: origin,
            end: pointer,
        });
    }

    pub fn drag(&mut self, pointer: Vec2) {
        if let Some(line) = &mut self.line {
            line.end = pointer;
        }
    }

    /// Finish the drag, returning the final aim (None if no drag was active)
    pub fn release(&mut self) -> Option<AimLine> {
        self.line.take()
    }

    /// Current aim line for rendering
    pub fn active(&self) -> Option<AimLine> {
        self.line
    }
}

/// Fire-rate limiter on wall-clock milliseconds
#[derive(Debug, Clone)]
pub struct Trigger {
    cooldown_ms: f64,
    last_shot_ms: Option<f64>,
}

impl Trigger {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            last_shot_ms: None,
        }
    }

    /// Consume a shot if the cooldown has elapsed since the last one
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        let ready = self
            .last_shot_ms
            .map(|last| now_ms - last >= self.cooldown_ms)
            .unwrap_or(true);
        if ready {
            self.last_shot_ms = Some(now_ms);
        }
        ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_level_triggered() {
        let mut held = KeyState::default();
        assert_eq!(held.snapshot(), TickInput::default());

        held.key_down(keys::LEFT);
        held.key_down(keys::JUMP);
        // Held keys show up on every snapshot until released
        assert!(held.snapshot().left);
        assert!(held.snapshot().left);
        assert!(held.snapshot().jump);

        held.key_up(keys::LEFT);
        assert!(!held.snapshot().left);
        assert!(held.snapshot().jump);

        held.clear();
        assert_eq!(held.snapshot(), TickInput::default());
    }

    #[test]
    fn test_key_down_reports_fresh_press() {
        let mut held = KeyState::default();
        assert!(held.key_down("p"));
        assert!(!held.key_down("p"));
        held.key_up("p");
        assert!(held.key_down("p"));
    }

    #[test]
    fn test_pause_key() {
        assert!(is_pause_key("p"));
        assert!(is_pause_key("P"));
        assert!(!is_pause_key("Escape"));
    }

    #[test]
    fn test_gesture_tracks_drag() {
        let mut gesture = AimGesture::default();
        gesture.drag(Vec2::new(5.0, 5.0));
        assert_eq!(gesture.active(), None);

        gesture.press(Vec2::new(450.0, 525.0), Vec2::new(500.0, 525.0));
        gesture.drag(Vec2::new(600.0, 400.0));
        let line = gesture.release().unwrap();
        assert_eq!(line.start, Vec2::new(450.0, 525.0));
        assert_eq!(line.end, Vec2::new(600.0, 400.0));
        assert_eq!(gesture.release(), None);
    }

    #[test]
    fn test_aim_velocity_has_fixed_magnitude() {
        let line = AimLine {
            start: Vec2::new(0.0, 0.0),
            end: Vec2::new(30.0, -40.0),
        };
        let vel = line.velocity(7.0);
        assert!((vel.length() - 7.0).abs() < 1e-4);
        assert!((vel.x - 4.2).abs() < 1e-4);
        assert!((vel.y + 5.6).abs() < 1e-4);
    }

    #[test]
    fn test_trigger_cooldown() {
        let mut trigger = Trigger::new(300.0);
        assert!(trigger.try_fire(1000.0));
        assert!(!trigger.try_fire(1100.0));
        assert!(!trigger.try_fire(1299.0));
        assert!(trigger.try_fire(1300.0));
    }
}
