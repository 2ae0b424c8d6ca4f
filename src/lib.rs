//! Star Grabber - collect the falling stars, dodge the bombs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (arcade physics, player logic, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Persisted user preferences
//! - `tuning`: Data-driven game balance
//! - `audio`: Procedural Web Audio effects (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the browser frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions in pixels (y grows downward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player sprite frame (every sheet uses 128x128 cells)
    pub const PLAYER_FRAME: f32 = 128.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 475.0;

    /// Star and bomb sprite sizes
    pub const STAR_WIDTH: f32 = 24.0;
    pub const STAR_HEIGHT: f32 = 22.0;
    pub const BOMB_SIZE: f32 = 14.0;

    /// One platform tile; the ground uses it at 2x scale
    pub const PLATFORM_WIDTH: f32 = 400.0;
    pub const PLATFORM_HEIGHT: f32 = 32.0;

    /// Platform layout: (center x, center y, scale)
    pub const PLATFORM_LAYOUT: [(f32, f32, f32); 4] = [
        (400.0, 568.0, 2.0), // Ground
        (600.0, 400.0, 1.0),
        (50.0, 250.0, 1.0),
        (750.0, 220.0, 1.0),
    ];
}

/// Linear interpolation between two RGB colors (components 0-255)
#[inline]
pub fn lerp_rgb(from: [u8; 3], to: [u8; 3], t: f32) -> [f32; 4] {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) / 255.0;
    [mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2]), 1.0]
}
