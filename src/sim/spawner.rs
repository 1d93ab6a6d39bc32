//! Zombie spawning
//!
//! Driven by a real-time interval rather than the frame loop, so spawn rate is
//! independent of display refresh.

use rand::Rng;

use super::state::{Direction, GameEvent, GamePhase, GameState, Zombie};
use crate::consts::{GAME_WIDTH, ZOMBIE_RIGHT_SPAWN_INSET};

/// Spawn x for each edge, with the direction that walks toward the far edge
pub fn spawn_point(from_left: bool) -> (f32, Direction) {
    if from_left {
        (0.0, Direction::Right)
    } else {
        (GAME_WIDTH - ZOMBIE_RIGHT_SPAWN_INSET, Direction::Left)
    }
}

/// Interval callback: add one zombie at a random edge
///
/// Does nothing unless the game is running. Returns the spawned direction.
pub fn spawn_zombie<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Option<Direction> {
    if state.phase != GamePhase::Running {
        return None;
    }

    let (x, direction) = spawn_point(rng.random_bool(0.5));
    state
        .zombies
        .push(Zombie::new(x, state.tuning.zombie_speed, direction));
    state.events.push(GameEvent::ZombieSpawned { direction });
    log::debug!("Zombie spawned heading {:?} ({} alive)", direction, state.zombies.len());

    Some(direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GROUND_LEVEL;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawns_walk_toward_far_edge() {
        let mut state = GameState::new(Tuning::default());
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..50 {
            spawn_zombie(&mut state, &mut rng);
        }
        assert_eq!(state.zombies.len(), 50);

        for zombie in &state.zombies {
            assert_eq!(zombie.pos.y, GROUND_LEVEL);
            match zombie.direction {
                Direction::Right => assert_eq!(zombie.pos.x, 0.0),
                Direction::Left => assert_eq!(zombie.pos.x, GAME_WIDTH - 40.0),
            }
        }

        // Both edges get used
        assert!(state.zombies.iter().any(|z| z.direction == Direction::Left));
        assert!(state.zombies.iter().any(|z| z.direction == Direction::Right));
    }

    #[test]
    fn test_no_spawn_unless_running() {
        let mut state = GameState::new(Tuning::default());
        let mut rng = Pcg32::seed_from_u64(7);

        state.phase = GamePhase::Paused;
        assert_eq!(spawn_zombie(&mut state, &mut rng), None);

        state.phase = GamePhase::GameOver;
        assert_eq!(spawn_zombie(&mut state, &mut rng), None);
        assert!(state.zombies.is_empty());
    }
}
