//! Fixed timestep simulation tick
//!
//! Order within a tick:
//! 1. Restart request (only honored after game over)
//! 2. Player resolution from held input and last step's contacts
//! 3. Physics step for player, stars and bombs
//! 4. Player/star overlaps, then player/bomb contact
//! 5. Animation clock

use super::physics::step_body;
use super::player::resolve_player;
use super::rect::Rect;
use super::rules::{collect_star, hit_bomb, restart_game};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held arrow keys
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Restart request (Space or clicking "Try Again"); one-shot
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart && state.phase == GamePhase::GameOver {
        restart_game(state);
        return;
    }

    state.time_ticks += 1;

    if state.phase == GamePhase::GameOver {
        // World is frozen; only the death clip keeps playing
        state.player.anim.advance(dt);
        return;
    }

    let jumping = state.player.grounded() && input.up;
    resolve_player(state, input);
    if jumping {
        state.events.push(GameEvent::Jumped);
    }

    if !state.physics_paused {
        step_world(state, dt);
    }

    // Overlaps: every active star under the player is collected this tick
    let player_rect = state.player.body.rect();
    for idx in 0..state.stars.len() {
        let star = &state.stars[idx];
        if star.active && player_rect.overlaps(&star.body.rect()) {
            collect_star(state, idx);
        }
    }

    if state
        .bombs
        .iter()
        .any(|bomb| player_rect.overlaps(&bomb.body.rect()))
    {
        hit_bomb(state);
    }

    state.player.anim.advance(dt);
}

/// Physics for every dynamic body against the platforms
fn step_world(state: &mut GameState, dt: f32) {
    let solids: Vec<Rect> = state.platforms.iter().map(|p| p.rect).collect();
    let bounds = state.bounds();
    let gravity = state.tuning.gravity;

    step_body(&mut state.player.body, &solids, &bounds, gravity, dt);

    for star in state.stars.iter_mut().filter(|s| s.active) {
        step_body(&mut star.body, &solids, &bounds, gravity, dt);
    }

    for bomb in &mut state.bombs {
        step_body(&mut bomb.body, &solids, &bounds, gravity, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::animation::Animation;
    use crate::sim::body::Body;
    use crate::sim::state::Bomb;
    use glam::Vec2;

    fn settle(state: &mut GameState, ticks: u32) {
        let idle = TickInput::default();
        for _ in 0..ticks {
            tick(state, &idle, SIM_DT);
        }
    }

    #[test]
    fn test_player_lands_on_ground() {
        let mut state = GameState::new(12345);
        assert!(!state.player.grounded());
        settle(&mut state, 60);
        assert!(state.player.grounded());
        assert_eq!(state.player.animation(), Animation::Idle);
        let feet = state.player.body.rect().max().y;
        assert!((feet - 536.0).abs() < 1.0, "feet at {}", feet);
    }

    #[test]
    fn test_jump_leaves_ground() {
        let mut state = GameState::new(1);
        settle(&mut state, 60);
        let start_y = state.player.body.pos.y;
        let jump = TickInput {
            up: true,
            ..Default::default()
        };
        tick(&mut state, &jump, SIM_DT);
        assert!(state.events.contains(&GameEvent::Jumped));
        settle(&mut state, 10);
        assert!(state.player.body.pos.y < start_y - 20.0);
        assert!(!state.player.grounded());
    }

    #[test]
    fn test_running_moves_player() {
        let mut state = GameState::new(1);
        settle(&mut state, 60);
        let start_x = state.player.body.pos.x;
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut state, &right, SIM_DT);
        }
        // 160 px/s for half a second
        assert!(state.player.body.pos.x > start_x + 70.0);
        assert_eq!(state.player.animation(), Animation::RunRight);
    }

    #[test]
    fn test_bomb_contact_freezes_world() {
        let mut state = GameState::new(2);
        settle(&mut state, 60);

        let mut body = Body::new(state.player.body.rect().center(), Vec2::splat(14.0));
        body.allow_gravity = false;
        body.vel = Vec2::new(100.0, 0.0);
        let id = state.next_entity_id();
        state.bombs.push(Bomb { id, body });

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.physics_paused);
        assert_eq!(state.player.animation(), Animation::Die);

        let player_pos = state.player.body.pos;
        let bomb_pos = state.bombs[0].body.pos;
        let moving = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut state, &moving, SIM_DT);
        }
        assert_eq!(state.player.body.pos, player_pos);
        assert_eq!(state.bombs[0].body.pos, bomb_pos);
        assert_eq!(state.player.animation(), Animation::Die);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut state = GameState::new(3);
        state.score = 30;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, SIM_DT);
        assert_eq!(state.score, 30);
        assert_eq!(state.restarts, 0);

        state.high_score = 30;
        hit_bomb(&mut state);
        tick(&mut state, &restart, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 30);
        assert!(state.events.contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_walking_into_star_collects_it() {
        let mut state = GameState::new(10);
        settle(&mut state, 60);
        // Park a star right on the player
        let center = state.player.body.rect().center();
        state.stars[0].body.pos = center;
        state.stars[0].body.vel = Vec2::ZERO;
        state.stars[0].body.allow_gravity = false;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(!state.stars[0].active);
        assert_eq!(state.score, 10);
        assert_eq!(state.high_score, 10);
    }

    #[test]
    fn test_stars_fall_onto_platforms() {
        let mut state = GameState::new(4);
        settle(&mut state, 240);
        for star in state.stars.iter().filter(|s| s.active) {
            assert!(star.body.pos.y > 0.0);
            assert!(star.body.rect().max().y <= 600.0 + 0.5);
        }
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed and inputs stay identical
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                up: true,
                ..Default::default()
            },
            TickInput {
                left: true,
                down: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..400 {
            let input = &inputs[(i / 25) % inputs.len()];
            tick(&mut state1, input, SIM_DT);
            tick(&mut state2, input, SIM_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.bombs.len(), state2.bombs.len());
        assert_eq!(state1.player.body.pos, state2.player.body.pos);
    }
}
