//! Coin Crawl - A top-down arena coin collector
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, containment, enemy AI, coins, game state)
//! - `input`: Directional actions with held state and edge-triggered events
//! - `persistence`: Key-value storage (LocalStorage on web, in-memory elsewhere)
//! - `highscores`: The single persisted high score
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD and end-screen text

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use input::{Action, Controls, KeyEdge};
pub use persistence::{KeyValueStore, MemoryStore, StorageError};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Nominal host frame rate; one tick per frame
    pub const FRAMES_PER_SECOND: f32 = 60.0;
    /// Elapsed time of one nominal frame, in frame units
    pub const FRAME_DT: f32 = 1.0;

    /// Window dimensions (play field plus the HUD strip underneath)
    pub const WINDOW_WIDTH: f32 = 864.0;
    pub const WINDOW_HEIGHT: f32 = 900.0;
    /// Height of the bottom HUD strip
    pub const HUD_HEIGHT: f32 = 84.0;
    /// Background (play field) size
    pub const FIELD_WIDTH: f32 = 864.0;
    pub const FIELD_HEIGHT: f32 = 864.0;

    /// Thickness of the wall tiles around the field
    pub const WALL_MARGIN: f32 = 48.0;
    /// Horizontal movement limits for walkers
    pub const ARENA_MIN_X: f32 = WALL_MARGIN;
    pub const ARENA_MAX_X: f32 = WINDOW_WIDTH - WALL_MARGIN;
    /// Lowest edge a walker may reach (leaves room for the HUD strip)
    pub const ARENA_BOTTOM: f32 = WINDOW_HEIGHT - HUD_HEIGHT;
    /// Highest edge a walker may reach
    pub const ARENA_TOP: f32 = WALL_MARGIN;
    /// Far edge used when scattering coins
    pub const COIN_FIELD_LIMIT: f32 = 816.0;

    /// Sprites are 32px frames drawn at 1.4x
    pub const SPRITE_SCALE: f32 = 1.4;
    pub const CHARACTER_SIZE: Vec2 = Vec2::new(32.0 * SPRITE_SCALE, 32.0 * SPRITE_SCALE);
    /// Coins are 16px frames drawn at 1.4x
    pub const COIN_SIZE: Vec2 = Vec2::new(16.0 * SPRITE_SCALE, 16.0 * SPRITE_SCALE);

    /// Player health on spawn
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    /// Health bar pixels per point of health
    pub const HEALTH_BAR_SCALE: f32 = 2.0;
}
