//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here. Defaults match the
//! shipped game; partial JSON documents override individual fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading a tuning override
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("Failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,

    pub survivor_speed: f32,
    pub survivor_health: i32,
    pub jump_velocity: f32,

    pub zombie_speed: f32,
    /// Health removed from the survivor per tick of zombie contact
    pub contact_damage: i32,

    pub bullet_speed: f32,
    pub fire_cooldown_ms: f64,

    pub block_health: i32,

    pub kill_score: u64,
    pub round_seconds: u32,
    pub spawn_interval_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            survivor_speed: SURVIVOR_SPEED,
            survivor_health: SURVIVOR_MAX_HEALTH,
            jump_velocity: JUMP_VELOCITY,
            zombie_speed: ZOMBIE_SPEED,
            contact_damage: CONTACT_DAMAGE,
            bullet_speed: BULLET_SPEED,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            block_health: BLOCK_HEALTH,
            kill_score: KILL_SCORE,
            round_seconds: ROUND_SECONDS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "zombie_siege_tuning";

    /// Parse and validate a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.gravity > 0.0 && self.gravity.is_finite()) {
            return Err(TuningError::Invalid {
                field: "gravity",
                reason: "must be positive and finite",
            });
        }
        if !(self.survivor_speed > 0.0 && self.survivor_speed.is_finite()) {
            return Err(TuningError::Invalid {
                field: "survivor_speed",
                reason: "must be positive and finite",
            });
        }
        if !(self.jump_velocity < 0.0 && self.jump_velocity.is_finite()) {
            return Err(TuningError::Invalid {
                field: "jump_velocity",
                reason: "must be negative (upward) and finite",
            });
        }
        if self.survivor_health <= 0 {
            return Err(TuningError::Invalid {
                field: "survivor_health",
                reason: "must be positive",
            });
        }
        if self.block_health <= 0 {
            return Err(TuningError::Invalid {
                field: "block_health",
                reason: "must be positive",
            });
        }
        if self.contact_damage < 0 {
            return Err(TuningError::Invalid {
                field: "contact_damage",
                reason: "must not be negative",
            });
        }
        if !(self.zombie_speed > 0.0 && self.zombie_speed.is_finite()) {
            return Err(TuningError::Invalid {
                field: "zombie_speed",
                reason: "must be positive and finite",
            });
        }
        if !(self.bullet_speed > 0.0 && self.bullet_speed.is_finite()) {
            return Err(TuningError::Invalid {
                field: "bullet_speed",
                reason: "must be positive and finite",
            });
        }
        if !(self.spawn_interval_ms > 0.0 && self.spawn_interval_ms.is_finite()) {
            return Err(TuningError::Invalid {
                field: "spawn_interval_ms",
                reason: "must be positive and finite",
            });
        }
        if !(self.fire_cooldown_ms >= 0.0) {
            return Err(TuningError::Invalid {
                field: "fire_cooldown_ms",
                reason: "must not be negative",
            });
        }
        if self.round_seconds == 0 {
            return Err(TuningError::Invalid {
                field: "round_seconds",
                reason: "must be at least one second",
            });
        }
        Ok(())
    }

    /// Load a tuning override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning override from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring tuning override: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Load a tuning override from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
