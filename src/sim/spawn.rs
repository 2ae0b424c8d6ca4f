//! Bomb drops and star wave respawn

use glam::Vec2;

use super::body::Body;
use super::state::{Bomb, GameEvent, GameState};
use crate::consts::{BOMB_SIZE, WORLD_WIDTH};

/// Pick a spawn x on the far side of the split line from the player
pub fn bomb_spawn_x(state: &mut GameState, player_x: f32) -> f32 {
    let split = state.tuning.bomb_split_x;
    let x = if player_x < split as f32 {
        state.random_int(split, WORLD_WIDTH as i32)
    } else {
        state.random_int(0, split)
    };
    x as f32
}

/// Drop `count` bombs away from the player
pub fn drop_bombs(state: &mut GameState, count: u32, player_x: f32) {
    for _ in 0..count {
        let x = bomb_spawn_x(state, player_x);
        let max_vx = state.tuning.bomb_max_speed_x;
        let vx = state.random_int(-max_vx, max_vx) as f32;

        let mut body = Body::new(
            Vec2::new(x, state.tuning.bomb_spawn_y),
            Vec2::splat(BOMB_SIZE),
        );
        body.bounce = Vec2::splat(state.tuning.bomb_bounce);
        body.collide_world_bounds = true;
        body.vel = Vec2::new(vx, state.tuning.bomb_fall_speed);
        // Bombs travel in straight bounced lines
        body.allow_gravity = false;

        let id = state.next_entity_id();
        state.bombs.push(Bomb { id, body });
        state.events.push(GameEvent::BombDropped { x });
        log::debug!("Bomb {} dropped at x={} vx={}", id, x, vx);
    }
}

/// Bring every star back to the top of its column
pub fn respawn_stars(state: &mut GameState) {
    for star in &mut state.stars {
        star.body.reset(Vec2::new(star.home_x, 0.0));
        star.active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_bomb_spawns_opposite_player(player_x in 0.0f32..800.0, seed in any::<u64>()) {
            let mut state = GameState::new(seed);
            drop_bombs(&mut state, 4, player_x);
            for bomb in &state.bombs {
                let x = bomb.body.pos.x;
                if player_x < 350.0 {
                    prop_assert!((350.0..=800.0).contains(&x));
                } else {
                    prop_assert!((0.0..=350.0).contains(&x));
                }
            }
        }
    }

    #[test]
    fn test_bomb_body_setup() {
        let mut state = GameState::new(5);
        drop_bombs(&mut state, 3, 100.0);
        assert_eq!(state.bombs.len(), 3);
        for bomb in &state.bombs {
            let body = &bomb.body;
            assert_eq!(body.pos.y, 16.0);
            assert_eq!(body.bounce, Vec2::ONE);
            assert!(body.collide_world_bounds);
            assert!(!body.allow_gravity);
            assert_eq!(body.vel.y, 20.0);
            assert!((-200.0..=200.0).contains(&body.vel.x));
            assert_eq!(body.vel.x.fract(), 0.0);
        }
        let dropped = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::BombDropped { .. }))
            .count();
        assert_eq!(dropped, 3);
    }

    #[test]
    fn test_respawn_resets_columns() {
        let mut state = GameState::new(9);
        for star in &mut state.stars {
            star.active = false;
            star.body.pos = Vec2::new(star.home_x + 3.0, 500.0);
            star.body.vel = Vec2::new(0.0, 80.0);
        }
        respawn_stars(&mut state);
        for star in &state.stars {
            assert!(star.active);
            assert_eq!(star.body.pos, Vec2::new(star.home_x, 0.0));
            assert_eq!(star.body.vel, Vec2::ZERO);
        }
    }
}
