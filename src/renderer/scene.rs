//! Game snapshot to triangle list
//!
//! Draw order: backdrop, survivor, zombies, bullets, blocks, aim line.

use super::shapes::{gradient_rect, line, rect};
use super::vertex::{Vertex, colors};
use crate::consts::{GAME_HEIGHT, GAME_WIDTH, GROUND_LEVEL};
use crate::settings::Settings;
use crate::sim::{AimLine, GameState};

const HEAD_HEIGHT: f32 = 10.0;
const HEALTH_BAR_WIDTH: f32 = 50.0;
const HEALTH_BAR_HEIGHT: f32 = 5.0;
/// Gap between the top of the survivor's body and the health bar
const HEALTH_BAR_LIFT: f32 = 30.0;
const AIM_LINE_THICKNESS: f32 = 1.5;

/// Build every vertex for one frame
pub fn build_scene(state: &GameState, aim: Option<AimLine>, settings: &Settings) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        48 + (state.zombies.len() * 2 + state.bullets.len() + state.blocks.len()) * 6,
    );

    // Backdrop
    vertices.extend(gradient_rect(
        0.0,
        0.0,
        GAME_WIDTH,
        GROUND_LEVEL,
        colors::SKY_TOP,
        colors::SKY_HORIZON,
    ));
    vertices.extend(rect(
        0.0,
        GROUND_LEVEL,
        GAME_WIDTH,
        GAME_HEIGHT - GROUND_LEVEL,
        colors::GROUND,
    ));

    // Survivor (x is the body center, y the feet)
    let s = &state.survivor;
    let body_top = s.pos.y - s.height;
    vertices.extend(rect(s.left(), body_top, s.width, s.height, colors::SURVIVOR));
    vertices.extend(rect(
        s.pos.x - s.width / 4.0,
        body_top - HEAD_HEIGHT,
        s.width / 2.0,
        HEAD_HEIGHT,
        colors::SURVIVOR,
    ));

    if settings.show_health_bar {
        let bar_x = s.pos.x - HEALTH_BAR_WIDTH / 2.0;
        let bar_y = body_top - HEALTH_BAR_LIFT;
        let max = state.tuning.survivor_health.max(1) as f32;
        let fill = (s.health.max(0) as f32 / max).min(1.0);
        vertices.extend(rect(
            bar_x,
            bar_y,
            HEALTH_BAR_WIDTH,
            HEALTH_BAR_HEIGHT,
            colors::HEALTH_BACK,
        ));
        vertices.extend(rect(
            bar_x,
            bar_y,
            HEALTH_BAR_WIDTH * fill,
            HEALTH_BAR_HEIGHT,
            colors::HEALTH_FILL,
        ));
    }

    // Zombies (x is the left edge, y the feet)
    for z in &state.zombies {
        let top = z.pos.y - z.height;
        vertices.extend(rect(z.pos.x, top, z.width, z.height, colors::ZOMBIE));
        vertices.extend(rect(
            z.pos.x + z.width / 4.0,
            top - HEAD_HEIGHT,
            z.width / 2.0,
            HEAD_HEIGHT,
            colors::ZOMBIE,
        ));
    }

    for b in &state.bullets {
        vertices.extend(rect(b.pos.x, b.pos.y, b.width, b.height, colors::BULLET));
    }

    for b in &state.blocks {
        vertices.extend(rect(b.pos.x, b.pos.y, b.width, b.height, colors::BLOCK));
    }

    if settings.show_aim_line {
        if let Some(aim) = aim {
            vertices.extend(line(
                aim.start,
                aim.end,
                AIM_LINE_THICKNESS,
                colors::AIM_LINE,
            ));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Direction, Zombie};
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[test]
    fn test_vertex_budget() {
        let mut state = GameState::new(Tuning::default());
        state
            .zombies
            .push(Zombie::new(0.0, 1.0, Direction::Right));
        let aim = Some(AimLine {
            start: Vec2::new(450.0, 525.0),
            end: Vec2::new(600.0, 300.0),
        });

        let settings = Settings::default();
        // backdrop 2 + survivor 2 + health 2 + zombie 2 + blocks 8 + aim 1 quads
        assert_eq!(build_scene(&state, aim, &settings).len(), 17 * 6);

        let hidden = Settings {
            show_aim_line: false,
            show_health_bar: false,
            ..Default::default()
        };
        assert_eq!(build_scene(&state, aim, &hidden).len(), 14 * 6);
    }

    #[test]
    fn test_health_bar_shrinks() {
        let mut state = GameState::new(Tuning::default());
        state.blocks.clear();
        state.survivor.health = 50;
        let verts = build_scene(&state, None, &Settings::default());

        // Health fill is the 6th quad
        let fill = &verts[5 * 6..6 * 6];
        let min_x = fill.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = fill.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert!((max_x - min_x - HEALTH_BAR_WIDTH / 4.0).abs() < 1e-4);
        assert_eq!(fill[0].color, colors::HEALTH_FILL);
    }
}
