//! Game state and core simulation types
//!
//! Everything the scene owns lives here. The declarative layout (platforms,
//! star grid, player spawn) is rebuilt from scratch on restart.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::animation::{Animation, AnimationPlayer};
use super::body::Body;
use super::player::HITBOX_SPAWN;
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player hit a bomb; waiting for restart
    GameOver,
}

/// Things that happened during a tick (drained by the host for audio/logs)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player left the ground
    Jumped,
    /// A star was collected; carries the new score
    StarCollected { score: u32 },
    /// The high score was raised
    HighScore { score: u32 },
    /// Every star was collected and the wave came back
    WaveRespawned,
    /// A bomb entered play at this x
    BombDropped { x: f32 },
    /// Player touched a bomb
    PlayerDied { score: u32 },
    /// Scene rebuilt after game over
    Restarted,
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Sprite mirrored to face left
    pub flip_x: bool,
    pub anim: AnimationPlayer,
    pub alive: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        let mut body = Body::new(
            Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            Vec2::splat(PLAYER_FRAME),
        );
        body.set_hitbox(HITBOX_SPAWN);
        body.bounce = Vec2::splat(tuning.player_bounce);
        body.collide_world_bounds = true;

        Self {
            body,
            flip_x: false,
            anim: AnimationPlayer::default(),
            alive: true,
        }
    }

    /// Standing on a platform (set by the last physics step)
    pub fn grounded(&self) -> bool {
        self.body.on_floor()
    }

    pub fn animation(&self) -> Animation {
        self.anim.current()
    }
}

/// A collectible star
#[derive(Debug, Clone)]
pub struct Star {
    pub id: u32,
    pub body: Body,
    pub active: bool,
    /// Column the star returns to on wave respawn
    pub home_x: f32,
}

/// A bouncing bomb
#[derive(Debug, Clone)]
pub struct Bomb {
    pub id: u32,
    pub body: Body,
}

/// A static platform
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    /// Platform tile centered at (x, y), scaled uniformly
    pub fn tile(x: f32, y: f32, scale: f32) -> Self {
        Self {
            rect: Rect::from_center(
                Vec2::new(x, y),
                Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT) * scale,
            ),
        }
    }
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Balance values
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Physics frozen (set on death)
    pub physics_paused: bool,
    /// Score for the current life
    pub score: u32,
    /// Best score this session (survives restarts)
    pub high_score: u32,
    /// Stars collected this life (drives bomb cadence)
    pub stars_collected: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Number of restarts this session
    pub restarts: u32,
    pub player: Player,
    pub platforms: Vec<Platform>,
    /// Star group (sorted by id)
    pub stars: Vec<Star>,
    /// Bomb group (sorted by id, only grows until restart)
    pub bombs: Vec<Bomb>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with custom balance values
    pub fn with_tuning(seed: u64, mut tuning: Tuning) -> Self {
        tuning.clamp_ranges();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            tuning,
            phase: GamePhase::Playing,
            physics_paused: false,
            score: 0,
            high_score: 0,
            stars_collected: 0,
            time_ticks: 0,
            restarts: 0,
            platforms: Vec::new(),
            stars: Vec::new(),
            bombs: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };
        state.build_scene();
        state
    }

    /// Lay out platforms, player and stars from the declarative layout.
    /// Bombs start empty.
    pub(crate) fn build_scene(&mut self) {
        self.platforms = PLATFORM_LAYOUT
            .iter()
            .map(|&(x, y, scale)| Platform::tile(x, y, scale))
            .collect();

        self.player = Player::new(&self.tuning);
        self.bombs.clear();
        self.stars.clear();
        for i in 0..self.tuning.star_count {
            let x = self.tuning.star_start_x + self.tuning.star_step_x * i as f32;
            let bounce_y = self.random_f32(self.tuning.star_bounce_min, self.tuning.star_bounce_max);
            let mut body = Body::new(Vec2::new(x, 0.0), Vec2::new(STAR_WIDTH, STAR_HEIGHT));
            body.bounce.y = bounce_y;
            let id = self.next_entity_id();
            self.stars.push(Star {
                id,
                body,
                active: true,
                home_x: x,
            });
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Uniform integer in [min, max]
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Uniform float in [min, max)
    pub fn random_f32(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn active_star_count(&self) -> usize {
        self.stars.iter().filter(|s| s.active).count()
    }

    /// World bounds as a rect
    pub fn bounds(&self) -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(WORLD_WIDTH, WORLD_HEIGHT))
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
