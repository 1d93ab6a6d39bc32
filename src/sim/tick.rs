//! Simulation tick
//!
//! One call advances the world by one display frame: physics, collisions,
//! then input-driven survivor movement.

use super::collision::{
    can_move, cull_bullets, resolve_block_contacts, resolve_bullet_hits, survivor_contacts,
};
use super::input::TickInput;
use super::physics::{advance_zombie, integrate_bullet, integrate_survivor, jump};
use super::state::{Direction, GameEvent, GameOverReason, GamePhase, GameState};

/// Advance the game state by one step
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Paused and finished games don't simulate
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;
    let gravity = state.tuning.gravity;

    integrate_survivor(&mut state.survivor, gravity);

    // Zombies walk, chew through cover, and bite
    for zombie in &mut state.zombies {
        advance_zombie(zombie);
    }
    let destroyed = resolve_block_contacts(&state.zombies, &mut state.blocks);
    for _ in 0..destroyed {
        state.events.push(GameEvent::BlockDestroyed);
    }

    let bites = survivor_contacts(&state.zombies, &state.survivor);
    for _ in 0..bites {
        state.survivor.take_damage(state.tuning.contact_damage);
    }

    // Bullets fly, hit, or leave
    for bullet in &mut state.bullets {
        integrate_bullet(bullet, gravity);
    }
    let kills = resolve_bullet_hits(&mut state.bullets, &mut state.zombies);
    for _ in 0..kills {
        state.award_kill();
    }
    cull_bullets(&mut state.bullets);

    // Survivor movement from held keys
    let step = state.survivor.speed;
    if input.left && can_move(&state.survivor, &state.blocks, Direction::Left) {
        state.survivor.pos.x -= step;
    }
    if input.right && can_move(&state.survivor, &state.blocks, Direction::Right) {
        state.survivor.pos.x += step;
    }
    if input.jump {
        jump(&mut state.survivor, state.tuning.jump_velocity);
    }

    if !state.survivor.alive {
        state.end(GameOverReason::SurvivorDied);
    }
}
