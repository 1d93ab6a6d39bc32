//! Per-tick movement integration
//!
//! Steps are untimed: one call advances one display frame.

use super::state::{Bullet, Survivor, Zombie};
use crate::consts::GROUND_LEVEL;

/// Apply gravity to the survivor and land on the ground
pub fn integrate_survivor(survivor: &mut Survivor, gravity: f32) {
    survivor.vy += gravity;
    survivor.pos.y += survivor.vy;

    if survivor.pos.y > GROUND_LEVEL {
        survivor.pos.y = GROUND_LEVEL;
        survivor.vy = 0.0;
        survivor.on_ground = true;
    }
}

/// Launch a jump if standing on the ground
pub fn jump(survivor: &mut Survivor, jump_velocity: f32) {
    if survivor.on_ground {
        survivor.vy = jump_velocity;
        survivor.on_ground = false;
    }
}

/// Move a bullet, then bend its path (gravity after position update)
pub fn integrate_bullet(bullet: &mut Bullet, gravity: f32) {
    bullet.pos += bullet.vel;
    bullet.vel.y += gravity;
}

/// Walk a zombie one step in its direction of travel
pub fn advance_zombie(zombie: &mut Zombie) {
    zombie.pos.x += zombie.speed * zombie.direction.sign();
}
