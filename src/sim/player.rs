//! Per-frame player resolution
//!
//! Reads the held directions and the grounded flag from the last physics
//! step, then sets velocity, facing, hitbox and animation. The sprite sheets
//! have the character off-center in the 128px cell, so each pose shifts the
//! hitbox to stay under the body.

use super::animation::Animation;
use super::body::Hitbox;
use super::state::GameState;
use super::tick::TickInput;

/// Hitbox when spawning and running left
pub const HITBOX_SPAWN: Hitbox = Hitbox::new(35.0, 65.0, 55.0, 55.0);
pub const HITBOX_RUN_LEFT: Hitbox = HITBOX_SPAWN;
pub const HITBOX_RUN_RIGHT: Hitbox = Hitbox::new(35.0, 65.0, 30.0, 55.0);
/// Take-off frame sits lower in the cell
pub const HITBOX_JUMP: Hitbox = Hitbox::new(35.0, 65.0, 45.0, 65.0);
pub const HITBOX_AIR: Hitbox = Hitbox::new(35.0, 65.0, 45.0, 55.0);

/// Resolve the player's motion and pose for this frame
pub fn resolve_player(state: &mut GameState, input: &TickInput) {
    if state.is_game_over() || !state.player.alive {
        return;
    }

    let tuning = &state.tuning;
    let player = &mut state.player;

    // No inertia: horizontal speed is re-applied from input every frame
    player.body.vel.x = 0.0;

    if player.grounded() {
        if input.up {
            player.body.vel.y = tuning.jump_velocity;
            player.anim.play(Animation::JumpUp, true);
            player.body.set_hitbox(HITBOX_JUMP);
        } else if input.left {
            player.body.vel.x = -tuning.run_speed;
            player.anim.play(Animation::RunLeft, true);
            player.flip_x = true;
            player.body.set_hitbox(HITBOX_RUN_LEFT);
        } else if input.right {
            player.body.vel.x = tuning.run_speed;
            player.anim.play(Animation::RunRight, true);
            player.flip_x = false;
            player.body.set_hitbox(HITBOX_RUN_RIGHT);
        } else if input.down {
            player.anim.play(Animation::Crouch, true);
        } else {
            player.anim.play(Animation::Idle, true);
        }
        return;
    }

    // Entering the air (or the jump clip ran out): switch to the jump pose once
    if !player.anim.is_playing() || player.anim.current() != Animation::JumpUp {
        player.anim.play(Animation::JumpUp, true);
        player.body.set_hitbox(HITBOX_AIR);
    }

    if input.left {
        player.body.vel.x = -tuning.run_speed;
        player.flip_x = true;
        player.body.set_hitbox(HITBOX_AIR);
    } else if input.right {
        player.body.vel.x = tuning.run_speed;
        player.flip_x = false;
    }

    // Hard drop
    if input.down && !input.left && !input.right {
        player.body.vel.y = tuning.hard_drop_velocity;
        player.body.set_hitbox(HITBOX_AIR);
        player.anim.play(Animation::Crouch, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use glam::Vec2;
    use proptest::prelude::*;

    fn grounded_state() -> GameState {
        let mut state = GameState::new(1);
        state.player.body.touching.down = true;
        state
    }

    fn airborne_state() -> GameState {
        let mut state = GameState::new(1);
        state.player.body.touching.down = false;
        state
    }

    fn input(up: bool, down: bool, left: bool, right: bool) -> TickInput {
        TickInput {
            up,
            down,
            left,
            right,
            ..Default::default()
        }
    }

    proptest! {
        #[test]
        fn prop_grounded_up_always_jumps(
            down in any::<bool>(),
            left in any::<bool>(),
            right in any::<bool>(),
            vx in -500.0f32..500.0,
        ) {
            let mut state = grounded_state();
            state.player.body.vel.x = vx;
            resolve_player(&mut state, &input(true, down, left, right));
            prop_assert_eq!(state.player.body.vel.y, -355.0);
            prop_assert_eq!(state.player.body.vel.x, 0.0);
            prop_assert_eq!(state.player.animation(), Animation::JumpUp);
            prop_assert_eq!(state.player.body.hitbox, HITBOX_JUMP);
        }
    }

    #[test]
    fn test_ground_run_left_and_right() {
        let mut state = grounded_state();
        resolve_player(&mut state, &input(false, false, true, false));
        assert_eq!(state.player.body.vel.x, -160.0);
        assert!(state.player.flip_x);
        assert_eq!(state.player.animation(), Animation::RunLeft);
        assert_eq!(state.player.body.hitbox, HITBOX_RUN_LEFT);

        resolve_player(&mut state, &input(false, false, false, true));
        assert_eq!(state.player.body.vel.x, 160.0);
        assert!(!state.player.flip_x);
        assert_eq!(state.player.animation(), Animation::RunRight);
        assert_eq!(state.player.body.hitbox, HITBOX_RUN_RIGHT);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut state = grounded_state();
        resolve_player(&mut state, &input(false, false, true, true));
        assert_eq!(state.player.body.vel.x, -160.0);
        assert_eq!(state.player.animation(), Animation::RunLeft);

        let mut state = airborne_state();
        resolve_player(&mut state, &input(false, false, true, true));
        assert_eq!(state.player.body.vel.x, -160.0);
        assert!(state.player.flip_x);
    }

    #[test]
    fn test_ground_crouch_and_idle() {
        let mut state = grounded_state();
        state.player.body.vel.x = 90.0;
        resolve_player(&mut state, &input(false, true, false, false));
        assert_eq!(state.player.animation(), Animation::Crouch);
        assert_eq!(state.player.body.vel.x, 0.0);

        resolve_player(&mut state, &TickInput::default());
        assert_eq!(state.player.animation(), Animation::Idle);
        assert_eq!(state.player.body.vel.x, 0.0);
    }

    #[test]
    fn test_air_entry_transition_applies_once() {
        let mut state = airborne_state();
        resolve_player(&mut state, &TickInput::default());
        assert_eq!(state.player.animation(), Animation::JumpUp);
        assert_eq!(state.player.body.hitbox, HITBOX_AIR);

        // While the jump clip is running the pose is left alone
        state.player.body.set_hitbox(HITBOX_JUMP);
        resolve_player(&mut state, &TickInput::default());
        assert_eq!(state.player.body.hitbox, HITBOX_JUMP);
    }

    #[test]
    fn test_air_steering() {
        let mut state = airborne_state();
        state.player.body.vel.y = 40.0;
        resolve_player(&mut state, &input(false, false, false, true));
        assert_eq!(state.player.body.vel.x, 160.0);
        assert!(!state.player.flip_x);
        // Vertical speed untouched by steering
        assert_eq!(state.player.body.vel.y, 40.0);
    }

    #[test]
    fn test_hard_drop() {
        let mut state = airborne_state();
        state.player.body.vel.y = -100.0;
        resolve_player(&mut state, &input(false, true, false, false));
        assert_eq!(state.player.body.vel.y, 230.0);
        assert_eq!(state.player.animation(), Animation::Crouch);
        assert_eq!(state.player.body.hitbox, HITBOX_AIR);
    }

    #[test]
    fn test_no_hard_drop_with_horizontal_input() {
        let mut state = airborne_state();
        state.player.body.vel.y = -100.0;
        resolve_player(&mut state, &input(false, true, true, false));
        assert_eq!(state.player.body.vel.y, -100.0);
        assert_eq!(state.player.animation(), Animation::JumpUp);
    }

    #[test]
    fn test_game_over_is_a_no_op() {
        let mut state = grounded_state();
        state.phase = GamePhase::GameOver;
        state.player.body.vel = Vec2::new(12.0, 34.0);
        resolve_player(&mut state, &input(true, false, true, false));
        assert_eq!(state.player.body.vel, Vec2::new(12.0, 34.0));
        assert!(!state.player.anim.is_playing());
    }
}
