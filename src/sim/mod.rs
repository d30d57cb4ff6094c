//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied frame delta only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod ai;
pub mod coins;
pub mod entity;
pub mod geometry;
pub mod state;
pub mod tick;

pub use ai::CooldownClock;
pub use coins::{CoinField, CollectReport};
pub use entity::{Coin, Enemy, EntityKind, EntityRef, Facing, Player};
pub use geometry::{Body, CollisionSide, Rect, contain, overlaps};
pub use state::{GameEvent, GamePhase, GameSession};
pub use tick::{TickInput, tick};
