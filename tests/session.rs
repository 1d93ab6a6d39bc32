//! Whole-session scenarios driven through the public host API

use glam::Vec2;
use zombie_siege::consts::*;
use zombie_siege::sim::{Block, Bullet, Direction, GameEvent, GameOverReason, GamePhase, Zombie};
use zombie_siege::{FrameOutcome, Session, Tuning};

fn cleared(tuning: Tuning) -> Session {
    let mut session = Session::new(1, tuning);
    session.state_mut().blocks.clear();
    session
}

fn game_over_events(events: &[GameEvent]) -> Vec<(GameOverReason, u64)> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::GameOver { reason, score } => Some((*reason, *score)),
            _ => None,
        })
        .collect()
}

#[test]
fn zombie_destroys_block_after_three_ticks_of_contact() {
    let mut session = cleared(Tuning::default());
    session
        .state_mut()
        .blocks
        .push(Block::new(40.0, GROUND_LEVEL - BLOCK_SIZE, BLOCK_HEALTH));
    session
        .state_mut()
        .zombies
        .push(Zombie::new(0.0, ZOMBIE_SPEED, Direction::Right));

    for _ in 0..12 {
        assert_eq!(session.frame(), FrameOutcome::Stepped);
    }
    assert_eq!(session.state().blocks[0].health, 1);

    session.frame();
    assert!(session.state().blocks.is_empty());
    assert!(session.drain_events().contains(&GameEvent::BlockDestroyed));
}

#[test]
fn rapid_releases_fire_once() {
    let mut session = Session::new(1, Tuning::default());
    let aim = |s: &mut Session| {
        s.pointer_down(Vec2::new(600.0, 400.0));
        s.pointer_move(Vec2::new(700.0, 300.0));
    };

    aim(&mut session);
    assert!(session.pointer_up(5_000.0));
    aim(&mut session);
    assert!(!session.pointer_up(5_100.0));
    assert_eq!(session.state().bullets.len(), 1);

    let shots = session
        .drain_events()
        .into_iter()
        .filter(|e| *e == GameEvent::ShotFired)
        .count();
    assert_eq!(shots, 1);
}

#[test]
fn score_is_ten_per_kill() {
    let mut session = cleared(Tuning::default());
    let xs = [20.0, 80.0, 140.0, 200.0];
    for x in xs {
        let state = session.state_mut();
        state
            .zombies
            .push(Zombie::new(x, ZOMBIE_SPEED, Direction::Right));
        state.bullets.push(Bullet::new(
            Vec2::new(x - 10.0, GROUND_LEVEL - 20.0),
            Vec2::new(BULLET_SPEED, 0.0),
        ));
    }

    session.frame();
    assert!(session.state().zombies.is_empty());
    assert_eq!(session.state().score, xs.len() as u64 * KILL_SCORE);
}

#[test]
fn clock_running_out_ends_the_round() {
    let tuning = Tuning {
        round_seconds: 3,
        ..Default::default()
    };
    let mut session = Session::new(9, tuning);
    let (mut spawn, mut countdown) = session.timers(0.0);

    session.run_timers(&mut spawn, &mut countdown, 2_000.0);
    assert_eq!(session.phase(), GamePhase::Running);
    assert_eq!(session.state().time_remaining, 1);

    session.run_timers(&mut spawn, &mut countdown, 3_000.0);
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert!(spawn.is_cancelled() && countdown.is_cancelled());
    assert!(session.state().survivor.health > 0);

    let zombies = session.state().zombies.len();
    session.run_timers(&mut spawn, &mut countdown, 60_000.0);
    assert_eq!(session.state().zombies.len(), zombies);
    assert_eq!(session.frame(), FrameOutcome::Halted);

    let overs = game_over_events(&session.drain_events());
    assert_eq!(overs, vec![(GameOverReason::TimeUp, 0)]);
}

#[test]
fn survivor_death_ends_the_round() {
    let tuning = Tuning {
        survivor_health: 4,
        ..Default::default()
    };
    let mut session = cleared(tuning);
    // Survivor box spans 435..465; this zombie reaches it on the first step
    session
        .state_mut()
        .zombies
        .push(Zombie::new(410.0, ZOMBIE_SPEED, Direction::Right));

    assert_eq!(session.frame(), FrameOutcome::Stepped);
    assert_eq!(session.phase(), GamePhase::Running);
    assert_eq!(session.frame(), FrameOutcome::Stepped);
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert_eq!(session.frame(), FrameOutcome::Halted);
    assert!(session.state().time_remaining > 0);

    let overs = game_over_events(&session.drain_events());
    assert_eq!(overs, vec![(GameOverReason::SurvivorDied, 0)]);
}

#[test]
fn pause_freezes_frames_spawns_and_clock() {
    let mut session = Session::new(3, Tuning::default());
    let (mut spawn, mut countdown) = session.timers(0.0);

    session.key_down("p");
    session.key_up("p");
    for _ in 0..5 {
        assert_eq!(session.frame(), FrameOutcome::Skipped);
    }
    session.run_timers(&mut spawn, &mut countdown, 4_000.0);
    assert!(session.state().zombies.is_empty());
    assert_eq!(session.state().time_remaining, ROUND_SECONDS);
    assert!(!spawn.is_cancelled());

    session.key_down("P");
    assert_eq!(session.frame(), FrameOutcome::Stepped);
    session.run_timers(&mut spawn, &mut countdown, 5_000.0);
    assert_eq!(session.state().zombies.len(), 1);
    assert_eq!(session.state().time_remaining, ROUND_SECONDS - 1);
}

#[test]
fn arrow_keys_move_until_cover() {
    let mut session = Session::new(1, Tuning::default());
    session.key_down("ArrowRight");
    for _ in 0..20 {
        session.frame();
    }
    session.key_up("ArrowRight");
    // Right cluster starts at 510; the next step would reach it
    assert_eq!(session.state().survivor.pos.x, 505.0);
}
