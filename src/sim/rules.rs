//! Contact rules: star collection, bomb hits and restarting
//!
//! These run from the tick when the physics step reports a contact.

use super::animation::Animation;
use super::spawn::{drop_bombs, respawn_stars};
use super::state::{GameEvent, GamePhase, GameState};

/// Player touched an active star
pub fn collect_star(state: &mut GameState, star_idx: usize) {
    let Some(star) = state.stars.get_mut(star_idx) else {
        return;
    };
    if !star.active {
        return;
    }
    star.active = false;

    state.score += state.tuning.star_score;
    state.events.push(GameEvent::StarCollected { score: state.score });

    if state.score > state.high_score {
        state.high_score = state.score;
        state.events.push(GameEvent::HighScore {
            score: state.high_score,
        });
    }

    state.stars_collected += 1;

    let player_x = state.player.body.pos.x;

    if state.active_star_count() == 0 {
        respawn_stars(state);
        state.events.push(GameEvent::WaveRespawned);
        log::info!("Wave cleared at score {}", state.score);
        drop_bombs(state, 1, player_x);
    }

    // Difficulty ramp, independent of the wave respawn
    let every = state.tuning.bomb_every_n_stars.max(1);
    if state.stars_collected.is_multiple_of(every) {
        drop_bombs(state, 1, player_x);
    }
}

/// Player touched a bomb: freeze the world and end the run
pub fn hit_bomb(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.physics_paused = true;
    state.player.anim.play(Animation::Die, false);
    state.player.alive = false;
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::PlayerDied { score: state.score });
    log::info!(
        "Game over: score {} (high score {}), {} bombs in play",
        state.score,
        state.high_score,
        state.bombs.len()
    );
}

/// Start a fresh life. High score, seed and tuning carry over.
pub fn restart_game(state: &mut GameState) {
    state.score = 0;
    state.stars_collected = 0;
    state.physics_paused = false;
    state.phase = GamePhase::Playing;
    state.restarts += 1;
    state.build_scene();
    state.events.push(GameEvent::Restarted);
    log::info!("Restarted (restart #{})", state.restarts);
}
