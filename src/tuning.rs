//! Data-driven game balance
//!
//! Every gameplay number lives here so balance passes don't touch the sim.
//! Missing fields in a JSON override fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::WORLD_WIDTH;

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World gravity (pixels/s², positive is down)
    pub gravity: f32,

    // === Player ===
    /// Horizontal run speed (ground and air)
    pub run_speed: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_velocity: f32,
    /// Vertical velocity applied by the airborne hard drop
    pub hard_drop_velocity: f32,
    /// Player restitution
    pub player_bounce: f32,

    // === Stars ===
    /// Points per star
    pub star_score: u32,
    /// Stars per wave
    pub star_count: u32,
    /// X of the first star
    pub star_start_x: f32,
    /// Horizontal spacing between stars
    pub star_step_x: f32,
    /// Vertical bounce range, sampled once per star
    pub star_bounce_min: f32,
    pub star_bounce_max: f32,

    // === Bombs ===
    /// A bomb drops every N collected stars
    pub bomb_every_n_stars: u32,
    /// Bombs spawn on the far side of this x from the player
    pub bomb_split_x: i32,
    /// Spawn height
    pub bomb_spawn_y: f32,
    /// Horizontal speed is uniform in [-max, max]
    pub bomb_max_speed_x: i32,
    /// Initial downward speed
    pub bomb_fall_speed: f32,
    /// Bomb restitution
    pub bomb_bounce: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 300.0,

            run_speed: 160.0,
            jump_velocity: -355.0,
            hard_drop_velocity: 230.0,
            player_bounce: 0.1,

            star_score: 10,
            star_count: 12,
            star_start_x: 12.0,
            star_step_x: 70.0,
            star_bounce_min: 0.4,
            star_bounce_max: 0.8,

            bomb_every_n_stars: 2,
            bomb_split_x: 350,
            bomb_spawn_y: 16.0,
            bomb_max_speed_x: 200,
            bomb_fall_speed: 20.0,
            bomb_bounce: 1.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning override. Out-of-range values are
    /// clamped; see [`Tuning::clamp_ranges`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Self = serde_json::from_str(json)?;
        tuning.clamp_ranges();
        Ok(tuning)
    }

    /// Pull values that would leave a random range empty back into range.
    /// Returns true if anything changed.
    pub fn clamp_ranges(&mut self) -> bool {
        let mut changed = false;

        let split = self.bomb_split_x.clamp(0, WORLD_WIDTH as i32);
        if split != self.bomb_split_x {
            log::warn!(
                "bomb_split_x {} outside the world, using {}",
                self.bomb_split_x,
                split
            );
            self.bomb_split_x = split;
            changed = true;
        }

        if self.bomb_max_speed_x < 0 {
            let speed = self.bomb_max_speed_x.saturating_neg();
            log::warn!(
                "bomb_max_speed_x {} is negative, using {}",
                self.bomb_max_speed_x,
                speed
            );
            self.bomb_max_speed_x = speed;
            changed = true;
        }

        if self.bomb_every_n_stars == 0 {
            log::warn!("bomb_every_n_stars must be at least 1");
            self.bomb_every_n_stars = 1;
            changed = true;
        }

        if self.star_bounce_max < self.star_bounce_min {
            log::warn!(
                "star bounce range [{}, {}] is inverted, swapping",
                self.star_bounce_min,
                self.star_bounce_max
            );
            std::mem::swap(&mut self.star_bounce_min, &mut self.star_bounce_max);
            changed = true;
        }

        changed
    }
}
