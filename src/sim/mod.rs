//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod animation;
pub mod body;
pub mod physics;
pub mod player;
pub mod rect;
pub mod rules;
pub mod spawn;
pub mod state;
pub mod tick;

pub use animation::{Animation, AnimationPlayer, Clip, Sheet};
pub use body::{Body, Hitbox, Touching};
pub use player::resolve_player;
pub use rect::Rect;
pub use rules::{collect_star, hit_bomb, restart_game};
pub use spawn::{drop_bombs, respawn_stars};
pub use state::{Bomb, GameEvent, GamePhase, GameState, Platform, Player, Star};
pub use tick::{TickInput, tick};
